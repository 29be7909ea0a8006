use crate::error::AppError;
use crate::model::requests::{LimitOrderRequest, MarketOrderRequest, StopOrderRequest};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Service for listing, placing and cancelling equity orders
///
/// Request types are validated on construction, so implementations can send
/// them as they are.
pub trait OrderService: Send + Sync {
    /// Lists pending orders
    async fn get_active_orders(&self) -> Result<Value, AppError>;

    /// Gets a pending order by id
    async fn get_order(&self, order_id: i64) -> Result<Value, AppError>;

    /// Places a market order
    async fn place_market_order(&self, order: &MarketOrderRequest) -> Result<Value, AppError>;

    /// Places a limit order
    async fn place_limit_order(&self, order: &LimitOrderRequest) -> Result<Value, AppError>;

    /// Places a stop order
    async fn place_stop_order(&self, order: &StopOrderRequest) -> Result<Value, AppError>;

    /// Cancels a pending order
    async fn cancel_order(&self, order_id: i64) -> Result<(), AppError>;
}
