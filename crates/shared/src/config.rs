//! Application configuration management.

use serde::Deserialize;

use crate::types::CurrencyConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Display currency. Defaults to the CFA franc.
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Admin panel configuration.
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Admin panel configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Route the admin landing page redirects to.
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            dashboard_path: default_dashboard_path(),
        }
    }
}

fn default_dashboard_path() -> String {
    "/admin/dashboard".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `LOGODOUMAN__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LOGODOUMAN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SymbolPosition, XOF};

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.currency, XOF);
        assert_eq!(config.admin.dashboard_path, "/admin/dashboard");
    }

    #[test]
    fn test_load_with_env_overrides() {
        temp_env::with_vars(
            [
                ("LOGODOUMAN__SERVER__PORT", Some("9090")),
                ("LOGODOUMAN__CURRENCY__SYMBOL", Some("CFA")),
                ("LOGODOUMAN__CURRENCY__SYMBOL_POSITION", Some("before")),
                ("LOGODOUMAN__ADMIN__DASHBOARD_PATH", Some("/admin/home")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.currency.symbol, "CFA");
                assert_eq!(config.currency.symbol_position, SymbolPosition::Before);
                assert_eq!(config.currency.code, "XOF");
                assert_eq!(config.admin.dashboard_path, "/admin/home");
            },
        );
    }
}
