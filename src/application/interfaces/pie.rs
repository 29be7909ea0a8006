use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for pies
#[async_trait]
pub trait PieService: Send + Sync {
    /// Lists all pies
    async fn list_pies(&self) -> Result<Value, AppError>;

    /// Gets a pie with its instruments and settings
    async fn get_pie(&self, pie_id: i64) -> Result<Value, AppError>;
}
