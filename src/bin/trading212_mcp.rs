/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Trading212 MCP server over stdio.
//!
//! stdout carries the MCP stream; logs go to stderr.

use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tracing::{error, info};
use trading212_mcp::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting Trading212 MCP server v{}", version());

    let config = Config::new();
    info!(
        "Environment: {} ({})",
        config.environment, config.rest_api.base_url
    );

    let client = Arc::new(Client::new(config)?);
    let server = Trading212Server::new(client);

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("MCP serve error: {:?}", e);
    })?;

    service.waiting().await?;
    info!("Trading212 MCP server stopped");
    Ok(())
}
