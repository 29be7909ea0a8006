use crate::error::AppError;
use crate::model::requests::{HistoryQuery, TransactionsQuery};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for paginated history endpoints
///
/// Each call fetches a single page; the response carries the cursor for the
/// next one.
#[async_trait]
pub trait HistoryService: Send + Sync {
    /// Gets historical (filled, cancelled, rejected) orders
    async fn get_order_history(&self, query: &HistoryQuery) -> Result<Value, AppError>;

    /// Gets paid dividends
    async fn get_dividends(&self, query: &HistoryQuery) -> Result<Value, AppError>;

    /// Gets deposits, withdrawals, fees and transfers
    async fn get_transactions(&self, query: &TransactionsQuery) -> Result<Value, AppError>;
}
