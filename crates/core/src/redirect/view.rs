//! Redirect view and its navigation seam.

use std::borrow::Cow;

use super::error::NavigationError;

/// Route the admin landing page forwards to.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Client-side navigation capability provided by the host.
pub trait Navigator {
    /// Requests navigation to `path`.
    fn navigate_to(&self, path: &str) -> Result<(), NavigationError>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate_to(&self, path: &str) -> Result<(), NavigationError> {
        (**self).navigate_to(path)
    }
}

/// View that navigates to a fixed destination as soon as it is activated.
#[derive(Debug, Clone)]
pub struct RedirectView<N> {
    navigator: N,
    destination: Cow<'static, str>,
}

impl<N: Navigator> RedirectView<N> {
    /// Creates a view that forwards to the admin dashboard.
    pub fn new(navigator: N) -> Self {
        Self::with_destination(navigator, DASHBOARD_PATH)
    }

    /// Creates a view that forwards to `destination`.
    pub fn with_destination(navigator: N, destination: impl Into<Cow<'static, str>>) -> Self {
        Self {
            navigator,
            destination: destination.into(),
        }
    }

    /// The route this view navigates to.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Issues exactly one navigation request to the destination.
    ///
    /// Navigator failures are returned unchanged; the host decides how to
    /// recover. Activating again repeats the request.
    pub fn on_activate(&self) -> Result<(), NavigationError> {
        self.navigator.navigate_to(&self.destination)
    }

    /// Placeholder shown while navigation is pending.
    pub fn render(&self) -> LoadingPlaceholder {
        LoadingPlaceholder::default()
    }
}

/// Static loading content shown during the redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingPlaceholder {
    /// First line, the product name.
    pub title: &'static str,
    /// Second line, the status message.
    pub message: &'static str,
}

impl Default for LoadingPlaceholder {
    fn default() -> Self {
        Self {
            title: "LogoDouman Admin",
            message: "Redirection...",
        }
    }
}

impl LoadingPlaceholder {
    /// Renders a standalone page with a centered spinner, both text lines and
    /// an immediate refresh to `destination`.
    #[must_use]
    pub fn to_html(&self, destination: &str) -> String {
        let destination = escape_html(destination);
        let title = escape_html(self.title);
        let message = escape_html(self.message);

        format!(
            r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="0; url={destination}">
<title>{title}</title>
<style>
.redirect {{ display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; }}
.spinner {{ width: 40px; height: 40px; border: 4px solid #e5e7eb; border-top-color: #2563eb; border-radius: 50%; animation: spin 1s linear infinite; }}
@keyframes spin {{ to {{ transform: rotate(360deg); }} }}
</style>
</head>
<body>
<div class="redirect">
<div class="spinner" role="status" aria-label="{message}"></div>
<h1>{title}</h1>
<p>{message}</p>
<a href="{destination}">{destination}</a>
</div>
</body>
</html>
"#
        )
    }
}

fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
