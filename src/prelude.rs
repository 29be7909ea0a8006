/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust,ignore
//! use trading212_mcp::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let positions = client.get_portfolio().await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration, credentials and environment selection
pub use crate::application::config::{Config, Credentials, Environment, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// REST client
pub use crate::application::client::Client;

/// Service interfaces implemented by the client
pub use crate::application::interfaces::{
    AccountService, HistoryService, InstrumentService, OrderService, PieService, PortfolioService,
};

/// HTTP transport
pub use crate::model::http::HttpClient;

// ============================================================================
// REQUEST MODELS
// ============================================================================

/// Validated request bodies and queries
pub use crate::model::requests::{
    HistoryQuery, LimitOrderRequest, MarketOrderRequest, StopOrderRequest, TransactionsQuery,
};

/// Order enums
pub use crate::presentation::order::{OrderType, Side, TimeValidity};

/// Instrument search
pub use crate::presentation::instrument::{InstrumentSearchResult, filter_instruments};

// ============================================================================
// MCP SERVER
// ============================================================================

/// MCP server and tool arguments
pub use crate::mcp::params::{
    HistoryParams, LimitOrderParams, MarketOrderParams, NumberOrString, OrderIdParams, PieIdParams,
    SearchParams, StopOrderParams, TickerParams, TransactionsParams,
};
pub use crate::mcp::server::{ToolOutput, Trading212Server, render};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Configuration sources
pub use crate::utils::config::{ConfigSource, ProcessEnv};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
