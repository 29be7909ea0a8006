use serde_json::json;
use trading212_mcp::error::AppError;
use trading212_mcp::model::requests::{
    HistoryQuery, LimitOrderRequest, MarketOrderRequest, StopOrderRequest, TransactionsQuery,
};
use trading212_mcp::presentation::order::{Side, TimeValidity};

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn market_order_buy_serializes_positive_quantity() {
    let order = MarketOrderRequest::new(" AAPL_US_EQ ", 3.0, Side::Buy).unwrap();
    assert_eq!(order.endpoint(), "/equity/orders/market");
    assert_eq!(json_value(&order), json!({"ticker": "AAPL_US_EQ", "quantity": 3.0}));
}

#[test]
fn market_order_sell_serializes_negative_quantity() {
    let order = MarketOrderRequest::new("AAPL_US_EQ", 1.5, Side::Sell).unwrap();
    assert_eq!(order.quantity, -1.5);
}

#[test]
fn market_order_rejects_non_positive_quantity() {
    for quantity in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = MarketOrderRequest::new("AAPL_US_EQ", quantity, Side::Buy);
        assert!(
            matches!(result, Err(AppError::InvalidInput(_))),
            "quantity {quantity} should be rejected"
        );
    }
}

#[test]
fn limit_order_wire_field_names() {
    let order =
        LimitOrderRequest::new("TSLA_US_EQ", 2.0, 150.25, Side::Buy, TimeValidity::GoodTillCancel)
            .unwrap();
    assert_eq!(order.endpoint(), "/equity/orders/limit");
    assert_eq!(
        json_value(&order),
        json!({
            "ticker": "TSLA_US_EQ",
            "quantity": 2.0,
            "limitPrice": 150.25,
            "timeValidity": "GOOD_TILL_CANCEL"
        })
    );
}

#[test]
fn limit_order_rejects_zero_price() {
    let result = LimitOrderRequest::new("TSLA_US_EQ", 2.0, 0.0, Side::Buy, TimeValidity::Day);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("limit_price"));
}

#[test]
fn stop_order_sell_is_stop_loss() {
    let order =
        StopOrderRequest::new("VUSA_EQ", 4.0, 80.0, Side::Sell, TimeValidity::Day).unwrap();
    assert_eq!(order.endpoint(), "/equity/orders/stop");
    assert_eq!(
        json_value(&order),
        json!({
            "ticker": "VUSA_EQ",
            "quantity": -4.0,
            "stopPrice": 80.0,
            "timeValidity": "DAY"
        })
    );
}

#[test]
fn history_query_defaults_and_clamping() {
    let query = HistoryQuery::new(None, None, None).unwrap();
    assert_eq!(query, HistoryQuery::default());
    assert_eq!(json_value(&query), json!({"limit": 50}));

    let query = HistoryQuery::new(Some("AAPL_US_EQ"), Some(500), Some(17)).unwrap();
    assert_eq!(query.limit, 50);
    assert_eq!(query.ticker.as_deref(), Some("AAPL_US_EQ"));
    assert_eq!(query.cursor, Some(17));

    assert!(HistoryQuery::new(None, Some(0), None).is_err());
    assert!(HistoryQuery::new(Some("bad ticker"), None, None).is_err());
}

#[test]
fn history_query_blank_ticker_is_absent() {
    let query = HistoryQuery::new(Some("  "), Some(10), None).unwrap();
    assert_eq!(query.ticker, None);
}

#[test]
fn transactions_query_normalizes_time() {
    let query =
        TransactionsQuery::new(Some(20), Some(" abc "), Some("2024-05-01T09:30:00-04:00")).unwrap();
    assert_eq!(query.limit, 20);
    assert_eq!(query.cursor.as_deref(), Some("abc"));
    assert_eq!(query.time.as_deref(), Some("2024-05-01T13:30:00Z"));

    assert!(TransactionsQuery::new(None, None, Some("last week")).is_err());
}
