use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the portfolio service
#[async_trait]
pub trait PortfolioService: Send + Sync {
    /// Gets all open positions
    async fn get_portfolio(&self) -> Result<Value, AppError>;

    /// Gets one open position
    ///
    /// # Arguments
    /// * `ticker` - Instrument ticker, e.g. `AAPL_US_EQ`
    async fn get_position(&self, ticker: &str) -> Result<Value, AppError>;
}
