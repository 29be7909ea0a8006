use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for exchange and instrument metadata
#[async_trait]
pub trait InstrumentService: Send + Sync {
    /// Lists exchanges with their working schedules
    async fn list_exchanges(&self) -> Result<Value, AppError>;

    /// Lists every tradable instrument
    async fn list_instruments(&self) -> Result<Value, AppError>;
}
