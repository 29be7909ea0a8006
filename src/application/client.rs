/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::application::config::{Config, Environment};
use crate::application::interfaces::{
    AccountService, HistoryService, InstrumentService, OrderService, PieService, PortfolioService,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    HistoryQuery, LimitOrderRequest, MarketOrderRequest, StopOrderRequest, TransactionsQuery,
};
use crate::model::validation::{validate_id, validate_ticker};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Trading212 REST client
///
/// Each method issues exactly one HTTP request and returns the response body
/// as the API sent it.
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client; no request is sent until the first call
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(Arc::new(config))?);
        Ok(Self { http_client })
    }

    /// Environment the client talks to
    pub fn environment(&self) -> Environment {
        self.http_client.config().environment
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.http_client.config().rest_api.base_url
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }
}

#[async_trait]
impl AccountService for Client {
    async fn get_account_info(&self) -> Result<Value, AppError> {
        info!("Fetching account info");
        self.http_client.get("/equity/account/info").await
    }

    async fn get_account_cash(&self) -> Result<Value, AppError> {
        info!("Fetching account cash");
        self.http_client.get("/equity/account/cash").await
    }
}

#[async_trait]
impl PortfolioService for Client {
    async fn get_portfolio(&self) -> Result<Value, AppError> {
        info!("Fetching portfolio positions");
        let result: Value = self.http_client.get("/equity/portfolio").await?;
        debug!(
            "Positions obtained: {}",
            result.as_array().map_or(0, Vec::len)
        );
        Ok(result)
    }

    async fn get_position(&self, ticker: &str) -> Result<Value, AppError> {
        let ticker = validate_ticker(ticker)?;
        info!("Fetching position for {}", ticker);
        let path = format!("/equity/portfolio/{ticker}");
        self.http_client.get(&path).await
    }
}

#[async_trait]
impl InstrumentService for Client {
    async fn list_exchanges(&self) -> Result<Value, AppError> {
        info!("Fetching exchanges");
        self.http_client.get("/equity/metadata/exchanges").await
    }

    async fn list_instruments(&self) -> Result<Value, AppError> {
        info!("Fetching instruments");
        let result: Value = self.http_client.get("/equity/metadata/instruments").await?;
        debug!(
            "Instruments obtained: {}",
            result.as_array().map_or(0, Vec::len)
        );
        Ok(result)
    }
}

#[async_trait]
impl OrderService for Client {
    async fn get_active_orders(&self) -> Result<Value, AppError> {
        info!("Fetching active orders");
        self.http_client.get("/equity/orders").await
    }

    async fn get_order(&self, order_id: i64) -> Result<Value, AppError> {
        let order_id = validate_id("order_id", order_id)?;
        info!("Fetching order {}", order_id);
        let path = format!("/equity/orders/{order_id}");
        self.http_client.get(&path).await
    }

    async fn place_market_order(&self, order: &MarketOrderRequest) -> Result<Value, AppError> {
        info!("Placing market order: {} x {}", order.ticker, order.quantity);
        self.http_client.post(order.endpoint(), order).await
    }

    async fn place_limit_order(&self, order: &LimitOrderRequest) -> Result<Value, AppError> {
        info!(
            "Placing limit order: {} x {} @ {}",
            order.ticker, order.quantity, order.limit_price
        );
        self.http_client.post(order.endpoint(), order).await
    }

    async fn place_stop_order(&self, order: &StopOrderRequest) -> Result<Value, AppError> {
        info!(
            "Placing stop order: {} x {} @ {}",
            order.ticker, order.quantity, order.stop_price
        );
        self.http_client.post(order.endpoint(), order).await
    }

    async fn cancel_order(&self, order_id: i64) -> Result<(), AppError> {
        let order_id = validate_id("order_id", order_id)?;
        info!("Cancelling order {}", order_id);
        let path = format!("/equity/orders/{order_id}");
        let _: Value = self.http_client.delete(&path).await?;
        Ok(())
    }
}

#[async_trait]
impl HistoryService for Client {
    async fn get_order_history(&self, query: &HistoryQuery) -> Result<Value, AppError> {
        info!("Fetching order history");
        self.http_client
            .get_with_query("/equity/history/orders", query)
            .await
    }

    async fn get_dividends(&self, query: &HistoryQuery) -> Result<Value, AppError> {
        info!("Fetching dividend history");
        self.http_client
            .get_with_query("/history/dividends", query)
            .await
    }

    async fn get_transactions(&self, query: &TransactionsQuery) -> Result<Value, AppError> {
        info!("Fetching transactions");
        self.http_client
            .get_with_query("/history/transactions", query)
            .await
    }
}

#[async_trait]
impl PieService for Client {
    async fn list_pies(&self) -> Result<Value, AppError> {
        info!("Fetching pies");
        self.http_client.get("/equity/pies").await
    }

    async fn get_pie(&self, pie_id: i64) -> Result<Value, AppError> {
        let pie_id = validate_id("pie_id", pie_id)?;
        info!("Fetching pie {}", pie_id);
        let path = format!("/equity/pies/{pie_id}");
        self.http_client.get(&path).await
    }
}
