/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppResult;
use crate::model::validation::{
    history_limit, normalize_time, validate_optional_ticker, validate_positive, validate_ticker,
};
use crate::presentation::order::{OrderType, Side, TimeValidity};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::Serialize;

/// Body of `POST /equity/orders/market`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    /// Instrument ticker
    pub ticker: String,
    /// Signed quantity: negative sells
    pub quantity: f64,
}

impl MarketOrderRequest {
    /// Validates the arguments and builds the request
    ///
    /// `quantity` must be strictly positive; the direction comes from `side`.
    pub fn new(ticker: &str, quantity: f64, side: Side) -> AppResult<Self> {
        let ticker = validate_ticker(ticker)?;
        let quantity = validate_positive("quantity", quantity)?;
        Ok(Self {
            ticker,
            quantity: side.signed_quantity(quantity),
        })
    }

    /// Endpoint this request is sent to
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        OrderType::Market.endpoint()
    }
}

/// Body of `POST /equity/orders/limit`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    /// Instrument ticker
    pub ticker: String,
    /// Signed quantity: negative sells
    pub quantity: f64,
    /// Worst acceptable price
    pub limit_price: f64,
    /// Lifetime of the order
    pub time_validity: TimeValidity,
}

impl LimitOrderRequest {
    /// Validates the arguments and builds the request
    pub fn new(
        ticker: &str,
        quantity: f64,
        limit_price: f64,
        side: Side,
        time_validity: TimeValidity,
    ) -> AppResult<Self> {
        let ticker = validate_ticker(ticker)?;
        let quantity = validate_positive("quantity", quantity)?;
        let limit_price = validate_positive("limit_price", limit_price)?;
        Ok(Self {
            ticker,
            quantity: side.signed_quantity(quantity),
            limit_price,
            time_validity,
        })
    }

    /// Endpoint this request is sent to
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        OrderType::Limit.endpoint()
    }
}

/// Body of `POST /equity/orders/stop`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRequest {
    /// Instrument ticker
    pub ticker: String,
    /// Signed quantity: negative sells (stop-loss)
    pub quantity: f64,
    /// Price that triggers the market order
    pub stop_price: f64,
    /// Lifetime of the order
    pub time_validity: TimeValidity,
}

impl StopOrderRequest {
    /// Validates the arguments and builds the request
    pub fn new(
        ticker: &str,
        quantity: f64,
        stop_price: f64,
        side: Side,
        time_validity: TimeValidity,
    ) -> AppResult<Self> {
        let ticker = validate_ticker(ticker)?;
        let quantity = validate_positive("quantity", quantity)?;
        let stop_price = validate_positive("stop_price", stop_price)?;
        Ok(Self {
            ticker,
            quantity: side.signed_quantity(quantity),
            stop_price,
            time_validity,
        })
    }

    /// Endpoint this request is sent to
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        OrderType::Stop.endpoint()
    }
}

/// Query of the order and dividend history endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Page size, 1 to 50
    pub limit: u32,
    /// Restrict to one instrument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Pagination cursor returned by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<i64>,
}

impl HistoryQuery {
    /// Validates the arguments and builds the query
    pub fn new(ticker: Option<&str>, limit: Option<u32>, cursor: Option<i64>) -> AppResult<Self> {
        Ok(Self {
            limit: history_limit(limit)?,
            ticker: validate_optional_ticker(ticker)?,
            cursor,
        })
    }
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            limit: crate::constants::MAX_HISTORY_LIMIT,
            ticker: None,
            cursor: None,
        }
    }
}

/// Query of the transaction history endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Eq)]
pub struct TransactionsQuery {
    /// Page size, 1 to 50
    pub limit: u32,
    /// Pagination cursor returned by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Only transactions at or before this UTC timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl TransactionsQuery {
    /// Validates the arguments and builds the query
    pub fn new(limit: Option<u32>, cursor: Option<&str>, time: Option<&str>) -> AppResult<Self> {
        let time = match time.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => Some(normalize_time(t)?),
            None => None,
        };
        Ok(Self {
            limit: history_limit(limit)?,
            cursor: cursor
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            time,
        })
    }
}
