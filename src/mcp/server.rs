/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! MCP server exposing the Trading212 API as tools.
//!
//! Each tool validates its arguments, sends one request through [`Client`] and
//! returns the response as pretty-printed JSON. Failures come back as tool
//! errors (`isError: true`) carrying the error message.

use crate::application::client::Client;
use crate::application::interfaces::{
    AccountService, HistoryService, InstrumentService, OrderService, PieService, PortfolioService,
};
use crate::VERSION;
use crate::constants::SERVER_NAME;
use crate::error::AppResult;
use crate::mcp::params::{
    HistoryParams, LimitOrderParams, MarketOrderParams, OrderIdParams, PieIdParams, SearchParams,
    StopOrderParams, TickerParams, TransactionsParams,
};
use crate::model::requests::{
    HistoryQuery, LimitOrderRequest, MarketOrderRequest, StopOrderRequest, TransactionsQuery,
};
use crate::presentation::instrument::filter_instruments;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::error;

/// Text and error flag of a finished tool call
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// JSON on success, the error message on failure
    pub text: String,
    /// Whether the call failed
    pub is_error: bool,
}

/// Renders the outcome of a tool call
#[must_use]
pub fn render(outcome: AppResult<Value>) -> ToolOutput {
    match outcome.and_then(|value| Ok(serde_json::to_string_pretty(&value)?)) {
        Ok(text) => ToolOutput {
            text,
            is_error: false,
        },
        Err(e) => ToolOutput {
            text: e.to_string(),
            is_error: true,
        },
    }
}

fn into_call_result(tool: &str, outcome: AppResult<Value>) -> Result<CallToolResult, McpError> {
    let output = render(outcome);
    if output.is_error {
        error!("{} failed: {}", tool, output.text);
        Ok(CallToolResult::error(vec![Content::text(output.text)]))
    } else {
        Ok(CallToolResult::success(vec![Content::text(output.text)]))
    }
}

/// MCP server over a Trading212 [`Client`]
#[derive(Clone)]
pub struct Trading212Server {
    client: Arc<Client>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl Trading212Server {
    /// Creates the server with every tool registered
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Get your Trading212 account information: account id and currency.")]
    pub async fn get_account_info(&self) -> Result<CallToolResult, McpError> {
        into_call_result("get_account_info", self.client.get_account_info().await)
    }

    #[tool(
        description = "Get the cash breakdown of your Trading212 account: free, invested, blocked, profit/loss and total."
    )]
    pub async fn get_account_cash(&self) -> Result<CallToolResult, McpError> {
        into_call_result("get_account_cash", self.client.get_account_cash().await)
    }

    #[tool(
        description = "Get all open positions with quantity, average price, current price and profit/loss."
    )]
    pub async fn get_portfolio(&self) -> Result<CallToolResult, McpError> {
        into_call_result("get_portfolio", self.client.get_portfolio().await)
    }

    #[tool(description = "Get one open position by ticker symbol, e.g. AAPL_US_EQ.")]
    pub async fn get_position(
        &self,
        Parameters(params): Parameters<TickerParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("get_position", self.position(params).await)
    }

    #[tool(description = "List the stock exchanges and their trading schedules.")]
    pub async fn list_exchanges(&self) -> Result<CallToolResult, McpError> {
        into_call_result("list_exchanges", self.client.list_exchanges().await)
    }

    #[tool(description = "Search tradable instruments (stocks, ETFs) by ticker or name.")]
    pub async fn search_instruments(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("search_instruments", self.search(params).await)
    }

    #[tool(description = "List all pending orders.")]
    pub async fn get_active_orders(&self) -> Result<CallToolResult, McpError> {
        into_call_result("get_active_orders", self.client.get_active_orders().await)
    }

    #[tool(description = "Get a pending order by id.")]
    pub async fn get_order(
        &self,
        Parameters(params): Parameters<OrderIdParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("get_order", self.order(params).await)
    }

    #[tool(
        description = "Place a market order. Quantity must be positive; use side=sell to sell. Executes immediately at the market price."
    )]
    pub async fn place_market_order(
        &self,
        Parameters(params): Parameters<MarketOrderParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("place_market_order", self.market_order(params).await)
    }

    #[tool(
        description = "Place a limit order that executes at limit_price or better. Quantity must be positive; use side=sell to sell."
    )]
    pub async fn place_limit_order(
        &self,
        Parameters(params): Parameters<LimitOrderParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("place_limit_order", self.limit_order(params).await)
    }

    #[tool(
        description = "Place a stop order that becomes a market order at stop_price. Use side=sell for a stop-loss."
    )]
    pub async fn place_stop_order(
        &self,
        Parameters(params): Parameters<StopOrderParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("place_stop_order", self.stop_order(params).await)
    }

    #[tool(description = "Cancel a pending order by id.")]
    pub async fn cancel_order(
        &self,
        Parameters(params): Parameters<OrderIdParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("cancel_order", self.cancel(params).await)
    }

    #[tool(
        description = "Get historical orders, optionally for one ticker. Paginated: limit up to 50, cursor from the previous page."
    )]
    pub async fn get_order_history(
        &self,
        Parameters(params): Parameters<HistoryParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("get_order_history", self.order_history(params).await)
    }

    #[tool(
        description = "Get paid dividends, optionally for one ticker. Paginated: limit up to 50, cursor from the previous page."
    )]
    pub async fn get_dividends(
        &self,
        Parameters(params): Parameters<HistoryParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("get_dividends", self.dividends(params).await)
    }

    #[tool(
        description = "Get account transactions: deposits, withdrawals, fees and transfers. Paginated: limit up to 50, cursor and time from the previous page."
    )]
    pub async fn get_transactions(
        &self,
        Parameters(params): Parameters<TransactionsParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("get_transactions", self.transactions(params).await)
    }

    #[tool(description = "List all investment pies.")]
    pub async fn list_pies(&self) -> Result<CallToolResult, McpError> {
        into_call_result("list_pies", self.client.list_pies().await)
    }

    #[tool(description = "Get a pie by id with its instruments and settings.")]
    pub async fn get_pie(
        &self,
        Parameters(params): Parameters<PieIdParams>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result("get_pie", self.pie(params).await)
    }
}

impl Trading212Server {
    /// The underlying REST client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Names of the registered tools, in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.into_owned())
            .collect()
    }

    async fn position(&self, params: TickerParams) -> AppResult<Value> {
        self.client.get_position(&params.ticker()?).await
    }

    async fn order(&self, params: OrderIdParams) -> AppResult<Value> {
        self.client.get_order(params.order_id()?).await
    }

    async fn pie(&self, params: PieIdParams) -> AppResult<Value> {
        self.client.get_pie(params.pie_id()?).await
    }

    async fn search(&self, params: SearchParams) -> AppResult<Value> {
        let query = params.query()?;
        let limit = params.limit()?;
        let instruments = self.client.list_instruments().await?;
        Ok(serde_json::to_value(filter_instruments(
            &instruments,
            &query,
            limit,
        ))?)
    }

    async fn market_order(&self, params: MarketOrderParams) -> AppResult<Value> {
        let order = MarketOrderRequest::try_from(params)?;
        self.client.place_market_order(&order).await
    }

    async fn limit_order(&self, params: LimitOrderParams) -> AppResult<Value> {
        let order = LimitOrderRequest::try_from(params)?;
        self.client.place_limit_order(&order).await
    }

    async fn stop_order(&self, params: StopOrderParams) -> AppResult<Value> {
        let order = StopOrderRequest::try_from(params)?;
        self.client.place_stop_order(&order).await
    }

    async fn cancel(&self, params: OrderIdParams) -> AppResult<Value> {
        let order_id = params.order_id()?;
        self.client.cancel_order(order_id).await?;
        Ok(json!({ "orderId": order_id, "cancelled": true }))
    }

    async fn order_history(&self, params: HistoryParams) -> AppResult<Value> {
        let query = HistoryQuery::try_from(params)?;
        self.client.get_order_history(&query).await
    }

    async fn dividends(&self, params: HistoryParams) -> AppResult<Value> {
        let query = HistoryQuery::try_from(params)?;
        self.client.get_dividends(&query).await
    }

    async fn transactions(&self, params: TransactionsParams) -> AppResult<Value> {
        let query = TransactionsQuery::try_from(params)?;
        self.client.get_transactions(&query).await
    }
}

#[tool_handler]
impl ServerHandler for Trading212Server {
    fn get_info(&self) -> ServerInfo {
        let environment = self.client.environment();
        ServerInfo {
            instructions: Some(format!(
                "Trading212 brokerage tools, connected to the {} environment ({}). \
                 Account, portfolio, order, history and pie data are returned as JSON. \
                 Order placement and cancellation act on the real account when the \
                 environment is LIVE.",
                environment,
                self.client.base_url()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                title: Some("Trading212".to_string()),
                version: VERSION.to_string(),
                ..Implementation::default()
            },
            ..Default::default()
        }
    }
}
