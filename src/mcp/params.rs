/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Tool arguments as they arrive over MCP.
//!
//! Every field is optional and kept raw so that deserialization never fails on
//! a well-formed object. Missing, malformed and out-of-range values are caught
//! by the accessors and `TryFrom` conversions, which return
//! [`AppError::InvalidInput`] and end up as tool errors. Assistants frequently
//! send numbers as strings (`"quantity": "2"`), so numeric fields accept both.

use crate::error::{AppError, AppResult};
use crate::model::requests::{
    HistoryQuery, LimitOrderRequest, MarketOrderRequest, StopOrderRequest, TransactionsQuery,
};
use crate::model::validation::{search_limit, validate_required, validate_ticker};
use crate::presentation::order::{Side, TimeValidity};
use schemars::JsonSchema;
use serde::Deserialize;

/// A numeric argument sent either as a JSON number or as a string
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum NumberOrString {
    /// `2.5`
    Number(serde_json::Number),
    /// `"2.5"`
    Text(String),
}

impl NumberOrString {
    fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrString::Number(n) => n.as_f64(),
            NumberOrString::Text(s) => s.trim().parse().ok(),
        }
    }

    fn as_i64(&self) -> Option<i64> {
        let integral = |f: f64| (f.fract() == 0.0 && f.abs() < 9.0e15).then_some(f as i64);
        match self {
            NumberOrString::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
            NumberOrString::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, NumberOrString::Text(s) if s.trim().is_empty())
    }

    fn describe(&self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<i64> for NumberOrString {
    fn from(value: i64) -> Self {
        NumberOrString::Number(value.into())
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        NumberOrString::Text(value.to_string())
    }
}

fn present(value: Option<&NumberOrString>) -> Option<&NumberOrString> {
    value.filter(|raw| !raw.is_blank())
}

fn required_number(field: &str, value: Option<&NumberOrString>) -> AppResult<f64> {
    let raw = present(value).ok_or_else(|| AppError::InvalidInput(format!("{field} is required")))?;
    raw.as_f64().ok_or_else(|| {
        AppError::InvalidInput(format!("invalid {field} value: {}", raw.describe()))
    })
}

fn required_integer(field: &str, value: Option<&NumberOrString>) -> AppResult<i64> {
    let raw = present(value).ok_or_else(|| AppError::InvalidInput(format!("{field} is required")))?;
    raw.as_i64().ok_or_else(|| {
        AppError::InvalidInput(format!("{field} must be an integer, got {}", raw.describe()))
    })
}

fn optional_integer(field: &str, value: Option<&NumberOrString>) -> AppResult<Option<i64>> {
    match present(value) {
        None => Ok(None),
        Some(raw) => raw.as_i64().map(Some).ok_or_else(|| {
            AppError::InvalidInput(format!("{field} must be an integer, got {}", raw.describe()))
        }),
    }
}

/// Negative limits are rejected here; zero and oversized values are left to
/// the limit rules of each endpoint.
fn optional_limit(value: Option<&NumberOrString>) -> AppResult<Option<u32>> {
    match optional_integer("limit", value)? {
        None => Ok(None),
        Some(v) if v < 0 => Err(AppError::InvalidInput(format!(
            "limit must be at least 1, got {v}"
        ))),
        Some(v) => Ok(Some(u32::try_from(v).unwrap_or(u32::MAX))),
    }
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

fn parse_side(value: Option<&str>) -> AppResult<Side> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Side::default()),
        Some(s) => s.parse().map_err(AppError::InvalidInput),
    }
}

fn parse_time_validity(value: Option<&str>) -> AppResult<TimeValidity> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(TimeValidity::default()),
        Some(s) => s.parse().map_err(AppError::InvalidInput),
    }
}

/// Arguments of `get_position`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TickerParams {
    /// Instrument ticker, e.g. `AAPL_US_EQ`
    #[serde(default)]
    pub ticker: Option<String>,
}

impl TickerParams {
    /// The validated ticker
    pub fn ticker(&self) -> AppResult<String> {
        validate_ticker(text(self.ticker.as_deref()))
    }
}

/// Arguments of `search_instruments`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Text matched against ticker and name, case-insensitive
    #[serde(default)]
    pub query: Option<String>,
    /// Maximum number of results (default 10, max 50)
    #[serde(default)]
    pub limit: Option<NumberOrString>,
}

impl SearchParams {
    /// The trimmed, non-empty query
    pub fn query(&self) -> AppResult<String> {
        validate_required("query", text(self.query.as_deref()))
    }

    /// Number of instruments to return
    pub fn limit(&self) -> AppResult<usize> {
        search_limit(optional_limit(self.limit.as_ref())?)
    }
}

/// Arguments of `get_order` and `cancel_order`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct OrderIdParams {
    /// Order id
    #[serde(default)]
    pub order_id: Option<NumberOrString>,
}

impl OrderIdParams {
    /// The order id as an integer
    pub fn order_id(&self) -> AppResult<i64> {
        required_integer("order_id", self.order_id.as_ref())
    }
}

/// Arguments of `get_pie`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PieIdParams {
    /// Pie id
    #[serde(default)]
    pub pie_id: Option<NumberOrString>,
}

impl PieIdParams {
    /// The pie id as an integer
    pub fn pie_id(&self) -> AppResult<i64> {
        required_integer("pie_id", self.pie_id.as_ref())
    }
}

/// Arguments of `place_market_order`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct MarketOrderParams {
    /// Instrument ticker, e.g. `AAPL_US_EQ`
    #[serde(default)]
    pub ticker: Option<String>,
    /// Number of shares, strictly positive (fractional allowed)
    #[serde(default)]
    pub quantity: Option<NumberOrString>,
    /// `buy` (default) or `sell`
    #[serde(default)]
    #[schemars(with = "Option<Side>")]
    pub side: Option<String>,
}

impl TryFrom<MarketOrderParams> for MarketOrderRequest {
    type Error = AppError;

    fn try_from(params: MarketOrderParams) -> AppResult<Self> {
        MarketOrderRequest::new(
            text(params.ticker.as_deref()),
            required_number("quantity", params.quantity.as_ref())?,
            parse_side(params.side.as_deref())?,
        )
    }
}

/// Arguments of `place_limit_order`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct LimitOrderParams {
    /// Instrument ticker, e.g. `AAPL_US_EQ`
    #[serde(default)]
    pub ticker: Option<String>,
    /// Number of shares, strictly positive (fractional allowed)
    #[serde(default)]
    pub quantity: Option<NumberOrString>,
    /// Worst acceptable price
    #[serde(default)]
    pub limit_price: Option<NumberOrString>,
    /// `buy` (default) or `sell`
    #[serde(default)]
    #[schemars(with = "Option<Side>")]
    pub side: Option<String>,
    /// `DAY` (default) or `GOOD_TILL_CANCEL`
    #[serde(default)]
    #[schemars(with = "Option<TimeValidity>")]
    pub time_validity: Option<String>,
}

impl TryFrom<LimitOrderParams> for LimitOrderRequest {
    type Error = AppError;

    fn try_from(params: LimitOrderParams) -> AppResult<Self> {
        LimitOrderRequest::new(
            text(params.ticker.as_deref()),
            required_number("quantity", params.quantity.as_ref())?,
            required_number("limit_price", params.limit_price.as_ref())?,
            parse_side(params.side.as_deref())?,
            parse_time_validity(params.time_validity.as_deref())?,
        )
    }
}

/// Arguments of `place_stop_order`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct StopOrderParams {
    /// Instrument ticker, e.g. `AAPL_US_EQ`
    #[serde(default)]
    pub ticker: Option<String>,
    /// Number of shares, strictly positive (fractional allowed)
    #[serde(default)]
    pub quantity: Option<NumberOrString>,
    /// Price that triggers a market order
    #[serde(default)]
    pub stop_price: Option<NumberOrString>,
    /// `buy` (default) for a buy stop, `sell` for a stop-loss
    #[serde(default)]
    #[schemars(with = "Option<Side>")]
    pub side: Option<String>,
    /// `DAY` (default) or `GOOD_TILL_CANCEL`
    #[serde(default)]
    #[schemars(with = "Option<TimeValidity>")]
    pub time_validity: Option<String>,
}

impl TryFrom<StopOrderParams> for StopOrderRequest {
    type Error = AppError;

    fn try_from(params: StopOrderParams) -> AppResult<Self> {
        StopOrderRequest::new(
            text(params.ticker.as_deref()),
            required_number("quantity", params.quantity.as_ref())?,
            required_number("stop_price", params.stop_price.as_ref())?,
            parse_side(params.side.as_deref())?,
            parse_time_validity(params.time_validity.as_deref())?,
        )
    }
}

/// Arguments of `get_order_history` and `get_dividends`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct HistoryParams {
    /// Restrict to one instrument
    #[serde(default)]
    pub ticker: Option<String>,
    /// Page size, 1 to 50 (default 50)
    #[serde(default)]
    pub limit: Option<NumberOrString>,
    /// Cursor from the previous page's `nextPagePath`
    #[serde(default)]
    pub cursor: Option<NumberOrString>,
}

impl TryFrom<HistoryParams> for HistoryQuery {
    type Error = AppError;

    fn try_from(params: HistoryParams) -> AppResult<Self> {
        HistoryQuery::new(
            params.ticker.as_deref(),
            optional_limit(params.limit.as_ref())?,
            optional_integer("cursor", params.cursor.as_ref())?,
        )
    }
}

/// Arguments of `get_transactions`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TransactionsParams {
    /// Page size, 1 to 50 (default 50)
    #[serde(default)]
    pub limit: Option<NumberOrString>,
    /// Cursor from the previous page's `nextPagePath`
    #[serde(default)]
    pub cursor: Option<NumberOrString>,
    /// RFC 3339 timestamp the page starts from, taken from the previous page's
    /// `nextPagePath`
    #[serde(default)]
    pub time: Option<String>,
}

impl TryFrom<TransactionsParams> for TransactionsQuery {
    type Error = AppError;

    fn try_from(params: TransactionsParams) -> AppResult<Self> {
        let cursor = params.cursor.as_ref().map(NumberOrString::describe);
        TransactionsQuery::new(
            optional_limit(params.limit.as_ref())?,
            cursor.as_deref(),
            params.time.as_deref(),
        )
    }
}
