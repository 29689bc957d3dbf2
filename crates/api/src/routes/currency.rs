//! Currency formatting routes.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};
use logodouman_core::currency::{
    format_currency_compact_with, format_currency_with, format_for_input, is_valid_amount,
    parse_currency,
};
use logodouman_shared::{AppError, CurrencyConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AppState, error::ApiError};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currency", get(get_currency))
        .route("/currency/format", get(format_amount))
        .route("/currency/parse", post(parse_amount))
}

/// Query for `/currency/format`.
#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    /// Amount in cents.
    pub amount: i64,
    /// Whether to include the currency symbol.
    #[serde(default = "default_show_symbol")]
    pub show_symbol: bool,
}

fn default_show_symbol() -> bool {
    true
}

/// Every display form of a stored amount.
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    /// Amount in cents, as received.
    pub amount_in_cents: i64,
    /// Full display string.
    pub formatted: String,
    /// Abbreviated display string.
    pub compact: String,
    /// Whole-unit value for editable fields.
    pub input_value: i64,
}

/// Body for `/currency/parse`.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Amount in major units as typed by the user.
    pub amount: f64,
}

/// Result of parsing a user-entered amount.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    /// Amount in cents.
    pub amount_in_cents: i64,
}

/// GET `/currency` - Active currency configuration.
async fn get_currency(State(state): State<AppState>) -> Json<CurrencyConfig> {
    Json(state.currency.as_ref().clone())
}

/// GET `/currency/format` - Format an amount in cents.
async fn format_amount(
    State(state): State<AppState>,
    query: Result<Query<FormatQuery>, QueryRejection>,
) -> Result<Json<FormatResponse>, ApiError> {
    let Query(query) = query?;
    let currency = state.currency.as_ref();

    Ok(Json(FormatResponse {
        amount_in_cents: query.amount,
        formatted: format_currency_with(currency, query.amount, query.show_symbol),
        compact: format_currency_compact_with(currency, query.amount),
        input_value: format_for_input(query.amount),
    }))
}

/// POST `/currency/parse` - Convert a user-entered amount into cents.
async fn parse_amount(
    body: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, ApiError> {
    let Json(body) = body?;
    if !is_valid_amount(body.amount) {
        return Err(AppError::Validation(format!(
            "amount must be a finite, non-negative number, got {}",
            body.amount
        ))
        .into());
    }

    let amount = Decimal::try_from(body.amount)
        .map_err(|e| AppError::Validation(format!("amount is not representable: {e}")))?;
    let amount_in_cents = parse_currency(amount);
    debug!(%amount, amount_in_cents, "Parsed currency input");

    Ok(Json(ParseResponse { amount_in_cents }))
}
