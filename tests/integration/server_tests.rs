// Tool calls through the MCP server

use assert_json_diff::assert_json_eq;
use crate::common::{AUTH_HEADER, api, is_tool_error, setup, test_config, tool_text};
use mockito::{Matcher, Server};
use rmcp::ServerHandler;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};
use std::collections::HashMap;
use trading212_mcp::prelude::*;

async fn server_with_mock() -> (mockito::ServerGuard, Trading212Server) {
    let (server, client) = setup().await;
    (server, Trading212Server::new(client))
}

#[tokio::test]
async fn test_get_account_cash_tool_returns_pretty_json() {
    let (mut server, mcp) = server_with_mock().await;
    let mock = server
        .mock("GET", api("/equity/account/cash").as_str())
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body(r#"{"free":1000.5,"total":2500}"#)
        .expect(1)
        .create_async()
        .await;

    let result = mcp.get_account_cash().await.unwrap();

    assert!(!is_tool_error(&result));
    let text = tool_text(&result);
    assert!(text.contains('\n'));
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_json_eq!(value, json!({"free": 1000.5, "total": 2500}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_becomes_tool_error() {
    let (mut server, mcp) = server_with_mock().await;
    let mock = server
        .mock("GET", api("/equity/portfolio").as_str())
        .with_status(401)
        .with_body(r#"{"message":"Invalid API key"}"#)
        .expect(1)
        .create_async()
        .await;

    let result = mcp.get_portfolio().await.unwrap();

    assert!(is_tool_error(&result));
    let text = tool_text(&result);
    assert!(text.contains("401"));
    assert!(text.contains("Invalid API key"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_credentials_sends_unauthenticated_request() {
    let mut server = Server::new_async().await;
    let client = Client::new(test_config(&server, false)).unwrap();
    let mcp = Trading212Server::new(Arc::new(client));
    let mock = server
        .mock("GET", api("/equity/account/info").as_str())
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_body("Unauthorized")
        .expect(1)
        .create_async()
        .await;

    let result = mcp.get_account_info().await.unwrap();

    assert!(is_tool_error(&result));
    assert!(tool_text(&result).contains("401"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_market_order_tool_sells_with_negative_quantity() {
    let (mut server, mcp) = server_with_mock().await;
    let mock = server
        .mock("POST", api("/equity/orders/market").as_str())
        .match_body(Matcher::Json(json!({"ticker": "AAPL_US_EQ", "quantity": -2.0})))
        .with_status(200)
        .with_body(r#"{"id": 100, "status": "NEW"}"#)
        .expect(1)
        .create_async()
        .await;

    let result = mcp
        .place_market_order(args(json!({"ticker": "AAPL_US_EQ", "quantity": "2", "side": "sell"})))
        .await
        .unwrap();

    assert!(!is_tool_error(&result));
    mock.assert_async().await;
}

fn args<T: serde::de::DeserializeOwned>(value: Value) -> Parameters<T> {
    Parameters(serde_json::from_value(value).expect("arguments deserialize"))
}

#[tokio::test]
async fn test_non_positive_quantity_is_rejected_locally() {
    let (mut server, mcp) = server_with_mock().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = mcp
        .place_market_order(args(json!({"ticker": "AAPL_US_EQ", "quantity": 0})))
        .await
        .unwrap();
    assert!(is_tool_error(&result));
    assert!(tool_text(&result).contains("quantity"));

    let result = mcp
        .place_limit_order(args(json!({
            "ticker": "AAPL_US_EQ",
            "quantity": -1,
            "limit_price": 100
        })))
        .await
        .unwrap();
    assert!(is_tool_error(&result));

    let result = mcp
        .place_stop_order(args(json!({
            "ticker": "AAPL_US_EQ",
            "quantity": 1,
            "stop_price": 0,
            "side": "sell",
            "time_validity": "GOOD_TILL_CANCEL"
        })))
        .await
        .unwrap();
    assert!(is_tool_error(&result));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_arguments_become_tool_errors() {
    let (mut server, mcp) = server_with_mock().await;
    let get = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let post = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = mcp
        .place_market_order(args(json!({"ticker": "AAPL_US_EQ", "quantity": "lots"})))
        .await
        .unwrap();
    assert!(is_tool_error(&result));
    assert!(tool_text(&result).contains("lots"));

    let result = mcp
        .place_market_order(args(json!({"quantity": "1"})))
        .await
        .unwrap();
    assert!(is_tool_error(&result));
    assert!(tool_text(&result).contains("ticker"));

    let result = mcp.get_position(args(json!({}))).await.unwrap();
    assert!(is_tool_error(&result));

    let result = mcp
        .get_dividends(args(json!({"limit": "-5"})))
        .await
        .unwrap();
    assert!(is_tool_error(&result));
    assert!(tool_text(&result).contains("limit"));

    let result = mcp.get_order(args(json!({"order_id": "abc"}))).await.unwrap();
    assert!(is_tool_error(&result));

    get.assert_async().await;
    post.assert_async().await;
}

#[tokio::test]
async fn test_cancel_order_tool_confirms() {
    let (mut server, mcp) = server_with_mock().await;
    let mock = server
        .mock("DELETE", api("/equity/orders/321").as_str())
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let result = mcp
        .cancel_order(args(json!({"order_id": 321})))
        .await
        .unwrap();

    assert!(!is_tool_error(&result));
    let value: Value = serde_json::from_str(&tool_text(&result)).unwrap();
    assert_json_eq!(value, json!({"orderId": 321, "cancelled": true}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_instruments_filters_locally() {
    let (mut server, mcp) = server_with_mock().await;
    let mock = server
        .mock("GET", api("/equity/metadata/instruments").as_str())
        .with_status(200)
        .with_body(
            json!([
                {"ticker": "AAPL_US_EQ", "name": "Apple Inc"},
                {"ticker": "APLE_US_EQ", "name": "Apple Hospitality REIT"},
                {"ticker": "MSFT_US_EQ", "name": "Microsoft"}
            ])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let result = mcp
        .search_instruments(args(json!({"query": "apple", "limit": 1})))
        .await
        .unwrap();

    assert!(!is_tool_error(&result));
    let value: Value = serde_json::from_str(&tool_text(&result)).unwrap();
    assert_eq!(value["query"], "apple");
    assert_eq!(value["totalMatches"], 2);
    assert_eq!(value["instruments"].as_array().unwrap().len(), 1);
    assert_eq!(value["instruments"][0]["ticker"], "AAPL_US_EQ");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_search_query_is_rejected() {
    let (mut server, mcp) = server_with_mock().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = mcp
        .search_instruments(args(json!({"query": "   "})))
        .await
        .unwrap();

    assert!(is_tool_error(&result));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_history_tool_rejects_zero_limit() {
    let (mut server, mcp) = server_with_mock().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = mcp.get_dividends(args(json!({"limit": 0}))).await.unwrap();

    assert!(is_tool_error(&result));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_pie_tool() {
    let (mut server, mcp) = server_with_mock().await;
    let mock = server
        .mock("GET", api("/equity/pies/12").as_str())
        .with_status(200)
        .with_body(r#"{"settings": {"id": 12}}"#)
        .expect(1)
        .create_async()
        .await;

    let result = mcp
        .get_pie(args(json!({"pie_id": "12"})))
        .await
        .unwrap();

    assert!(!is_tool_error(&result));
    mock.assert_async().await;
}

#[test]
fn test_environment_selects_base_url() {
    let live = Config::from_source(&HashMap::from([
        ("TRADING212_ENVIRONMENT", "live"),
        ("TRADING212_SECRETS_DIR", "/nonexistent"),
    ]));
    let demo = Config::from_source(&HashMap::from([
        ("TRADING212_ENVIRONMENT", "DEMO"),
        ("TRADING212_SECRETS_DIR", "/nonexistent"),
    ]));

    let live = Client::new(live).unwrap();
    let demo = Client::new(demo).unwrap();

    assert_eq!(live.base_url(), LIVE_BASE_URL);
    assert_eq!(demo.base_url(), DEMO_BASE_URL);
    assert_eq!(live.environment(), Environment::Live);
    assert_eq!(demo.environment(), Environment::Demo);
}

#[tokio::test]
async fn test_get_info_without_credentials() {
    let server = Server::new_async().await;
    let client = Client::new(test_config(&server, false)).unwrap();
    let mcp = Trading212Server::new(Arc::new(client));

    let info = mcp.get_info();

    assert_eq!(info.server_info.name, "trading212");
    assert_eq!(info.server_info.version, VERSION);
    let instructions = info.instructions.unwrap_or_default();
    assert!(instructions.contains("DEMO"));
    assert!(info.capabilities.tools.is_some());

    let config = mcp.client().config();
    assert_eq!(config.rest_api.timeout, 5);
    assert!(!config.credentials.is_complete());
}

#[tokio::test]
async fn test_every_tool_is_registered() {
    let (_server, mcp) = server_with_mock().await;

    let mut names = mcp.tool_names();
    names.sort();

    let mut expected = vec![
        "get_account_info",
        "get_account_cash",
        "get_portfolio",
        "get_position",
        "list_exchanges",
        "search_instruments",
        "get_active_orders",
        "get_order",
        "place_market_order",
        "place_limit_order",
        "place_stop_order",
        "cancel_order",
        "get_order_history",
        "get_dividends",
        "get_transactions",
        "list_pies",
        "get_pie",
    ];
    expected.sort_unstable();
    assert_eq!(names, expected);
}
