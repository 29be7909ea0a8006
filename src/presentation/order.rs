/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Order side
///
/// The API has no side field: a sell is a negative quantity.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy (positive quantity)
    #[default]
    Buy,
    /// Sell (negative quantity)
    Sell,
}

impl Side {
    /// Applies the side to an unsigned quantity
    #[must_use]
    pub fn signed_quantity(&self, quantity: f64) -> f64 {
        match self {
            Side::Buy => quantity,
            Side::Sell => -quantity,
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("side must be buy or sell, got {other}")),
        }
    }
}

/// How long a pending limit or stop order stays active
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeValidity {
    /// Cancelled at the end of the trading day
    #[default]
    Day,
    /// Stays active until cancelled
    GoodTillCancel,
}

impl FromStr for TimeValidity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "DAY" => Ok(TimeValidity::Day),
            "GOOD_TILL_CANCEL" | "GTC" => Ok(TimeValidity::GoodTillCancel),
            other => Err(format!(
                "time_validity must be DAY or GOOD_TILL_CANCEL, got {other}"
            )),
        }
    }
}

/// Order type, used to pick the placement endpoint
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Executed immediately at the current price
    Market,
    /// Executed at the limit price or better
    Limit,
    /// Becomes a market order when the stop price is reached
    Stop,
}

impl OrderType {
    /// Path of the placement endpoint
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            OrderType::Market => "/equity/orders/market",
            OrderType::Limit => "/equity/orders/limit",
            OrderType::Stop => "/equity/orders/stop",
        }
    }
}
