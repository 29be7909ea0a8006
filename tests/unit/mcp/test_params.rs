use serde_json::json;
use trading212_mcp::error::AppError;
use trading212_mcp::mcp::params::{
    HistoryParams, LimitOrderParams, MarketOrderParams, OrderIdParams, PieIdParams, SearchParams,
    StopOrderParams, TickerParams, TransactionsParams,
};
use trading212_mcp::model::requests::{
    HistoryQuery, LimitOrderRequest, MarketOrderRequest, StopOrderRequest, TransactionsQuery,
};
use trading212_mcp::presentation::order::TimeValidity;

fn invalid_message(err: AppError) -> String {
    match err {
        AppError::InvalidInput(message) => message,
        other => panic!("expected invalid input, got {other}"),
    }
}

#[test]
fn market_params_convert_with_side() {
    let params: MarketOrderParams = serde_json::from_value(
        json!({"ticker": "AAPL_US_EQ", "quantity": 2, "side": "sell"}),
    )
    .unwrap();
    let order = MarketOrderRequest::try_from(params).unwrap();
    assert_eq!(order.quantity, -2.0);
}

#[test]
fn market_params_negative_quantity_is_invalid_input() {
    let params: MarketOrderParams =
        serde_json::from_value(json!({"ticker": "AAPL_US_EQ", "quantity": -2})).unwrap();
    let err = MarketOrderRequest::try_from(params).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn market_params_non_numeric_quantity_is_invalid_input() {
    let params: MarketOrderParams =
        serde_json::from_value(json!({"ticker": "AAPL_US_EQ", "quantity": "lots"})).unwrap();
    let message = invalid_message(MarketOrderRequest::try_from(params).unwrap_err());
    assert!(message.contains("quantity"));
    assert!(message.contains("lots"));
}

#[test]
fn market_params_missing_fields_are_invalid_input() {
    let params: MarketOrderParams = serde_json::from_value(json!({"quantity": "1"})).unwrap();
    let message = invalid_message(MarketOrderRequest::try_from(params).unwrap_err());
    assert!(message.contains("ticker"));

    let params: MarketOrderParams =
        serde_json::from_value(json!({"ticker": "AAPL_US_EQ"})).unwrap();
    let message = invalid_message(MarketOrderRequest::try_from(params).unwrap_err());
    assert_eq!(message, "quantity is required");
}

#[test]
fn unknown_side_is_invalid_input() {
    let params: MarketOrderParams = serde_json::from_value(
        json!({"ticker": "AAPL_US_EQ", "quantity": 1, "side": "short"}),
    )
    .unwrap();
    let message = invalid_message(MarketOrderRequest::try_from(params).unwrap_err());
    assert!(message.contains("side"));
}

#[test]
fn limit_params_defaults() {
    let params: LimitOrderParams = serde_json::from_value(
        json!({"ticker": "AAPL_US_EQ", "quantity": "1", "limit_price": "99.5"}),
    )
    .unwrap();
    let order = LimitOrderRequest::try_from(params).unwrap();
    assert_eq!(order.time_validity, TimeValidity::Day);
    assert_eq!(order.limit_price, 99.5);
    assert_eq!(order.quantity, 1.0);
}

#[test]
fn limit_params_missing_price_is_invalid_input() {
    let params: LimitOrderParams =
        serde_json::from_value(json!({"ticker": "AAPL_US_EQ", "quantity": 1})).unwrap();
    let message = invalid_message(LimitOrderRequest::try_from(params).unwrap_err());
    assert_eq!(message, "limit_price is required");
}

#[test]
fn stop_params_accept_good_till_cancel() {
    let params: StopOrderParams = serde_json::from_value(json!({
        "ticker": "AAPL_US_EQ",
        "quantity": 1,
        "stop_price": 120,
        "side": "sell",
        "time_validity": "GOOD_TILL_CANCEL"
    }))
    .unwrap();
    let order = StopOrderRequest::try_from(params).unwrap();
    assert_eq!(order.time_validity, TimeValidity::GoodTillCancel);
    assert_eq!(order.quantity, -1.0);
}

#[test]
fn unknown_time_validity_is_invalid_input() {
    let params: StopOrderParams = serde_json::from_value(json!({
        "ticker": "AAPL_US_EQ",
        "quantity": 1,
        "stop_price": 120,
        "time_validity": "FOREVER"
    }))
    .unwrap();
    let message = invalid_message(StopOrderRequest::try_from(params).unwrap_err());
    assert!(message.contains("time_validity"));
}

#[test]
fn id_params_accept_numbers_and_strings() {
    let params: OrderIdParams = serde_json::from_value(json!({"order_id": "123"})).unwrap();
    assert_eq!(params.order_id().unwrap(), 123);

    let params: PieIdParams = serde_json::from_value(json!({"pie_id": 7})).unwrap();
    assert_eq!(params.pie_id().unwrap(), 7);

    let params: PieIdParams = serde_json::from_value(json!({"pie_id": "seven"})).unwrap();
    assert!(params.pie_id().is_err());
}

#[test]
fn ticker_params_require_a_ticker() {
    let params: TickerParams = serde_json::from_value(json!({})).unwrap();
    assert!(params.ticker().is_err());

    let params: TickerParams = serde_json::from_value(json!({"ticker": " VUSA_EQ "})).unwrap();
    assert_eq!(params.ticker().unwrap(), "VUSA_EQ");
}

#[test]
fn search_params_limits() {
    let params: SearchParams = serde_json::from_value(json!({"query": "apple"})).unwrap();
    assert_eq!(params.limit().unwrap(), 10);

    let params: SearchParams =
        serde_json::from_value(json!({"query": "apple", "limit": "500"})).unwrap();
    assert_eq!(params.limit().unwrap(), 50);

    let params: SearchParams = serde_json::from_value(json!({"limit": 5})).unwrap();
    assert!(params.query().is_err());
}

#[test]
fn history_params_empty_object() {
    let params: HistoryParams = serde_json::from_value(json!({})).unwrap();
    let query = HistoryQuery::try_from(params).unwrap();
    assert_eq!(query.limit, 50);
    assert_eq!(query.ticker, None);
}

#[test]
fn history_params_string_numbers() {
    let params: HistoryParams =
        serde_json::from_value(json!({"ticker": "AAPL_US_EQ", "limit": "10", "cursor": "99"}))
            .unwrap();
    let query = HistoryQuery::try_from(params).unwrap();
    assert_eq!(query.limit, 10);
    assert_eq!(query.cursor, Some(99));
}

#[test]
fn history_params_negative_limit_is_invalid_input() {
    let params: HistoryParams = serde_json::from_value(json!({"limit": -5})).unwrap();
    let message = invalid_message(HistoryQuery::try_from(params).unwrap_err());
    assert!(message.contains("-5"));

    let params: HistoryParams = serde_json::from_value(json!({"limit": "-5"})).unwrap();
    assert!(HistoryQuery::try_from(params).is_err());
}

#[test]
fn history_params_huge_limit_is_clamped() {
    let params: HistoryParams =
        serde_json::from_value(json!({"limit": 99_999_999_999_i64})).unwrap();
    let query = HistoryQuery::try_from(params).unwrap();
    assert_eq!(query.limit, 50);
}

#[test]
fn transactions_params_numeric_cursor_becomes_string() {
    let params: TransactionsParams =
        serde_json::from_value(json!({"cursor": 12345, "limit": 5})).unwrap();
    let query = TransactionsQuery::try_from(params).unwrap();
    assert_eq!(query.cursor.as_deref(), Some("12345"));
    assert_eq!(query.limit, 5);
}
