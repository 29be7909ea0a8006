/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # trading212-mcp
//!
//! A Model Context Protocol (MCP) server that exposes the Trading212 REST API as a
//! set of tools an AI assistant can call.
//!
//! Every tool maps to exactly one brokerage endpoint:
//!
//! - account info and cash balances
//! - portfolio positions
//! - exchanges and instrument search
//! - pending orders, order placement (market, limit, stop) and cancellation
//! - order, dividend and transaction history
//! - pies
//!
//! Requests are authenticated with HTTP Basic auth built from the configured API key
//! and secret, and sent to the live or demo environment selected at startup.
//!
//! ## Configuration
//!
//! | Variable | Description | Default |
//! |---|---|---|
//! | `TRADING212_API_KEY` | API key (or `TRADING212_API_KEY_FILE`) | unset |
//! | `TRADING212_API_SECRET` | API secret (or `TRADING212_API_SECRET_FILE`) | unset |
//! | `TRADING212_ENVIRONMENT` | `live` or `demo` | `live` |
//! | `TRADING212_BASE_URL` | Overrides the environment's base URL | unset |
//! | `TRADING212_TIMEOUT` | HTTP timeout in seconds | `30` |
//! | `TRADING212_SECRETS_DIR` | Directory with mounted secret files | `/run/secrets` |
//! | `LOGLEVEL` | Log level written to stderr | `INFO` |
//!
//! ## Example
//!
//! ```ignore
//! use trading212_mcp::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let cash = client.get_account_cash().await?;
//! ```

/// Application layer: configuration, brokerage client and service interfaces
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error type shared by every layer
pub mod error;
/// MCP server and tool parameter definitions
pub mod mcp;
/// Request models, validation and the HTTP transport
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Presentation helpers for order enums and instrument search
pub mod presentation;
/// Configuration and logging utilities
pub mod utils;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
