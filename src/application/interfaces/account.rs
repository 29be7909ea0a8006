use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the account id and currency (`GET /equity/account/info`)
    async fn get_account_info(&self) -> Result<Value, AppError>;

    /// Gets the cash breakdown: free, invested, blocked, result, total
    /// (`GET /equity/account/cash`)
    async fn get_account_cash(&self) -> Result<Value, AppError>;
}
