use std::sync::{Arc, Mutex};

use ghostmarket_api::types::OrderbookResponse;
use ghostmarket_api::{AssetsQuery, Client, Config, Error, OrderQuery, UsersQuery};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri())
}

#[tokio::test]
async fn get_assets_sends_defaults_and_returns_body_unchanged() {
    let mock_server = MockServer::start().await;
    let body = json!({ "assets": [{ "token_id": "1" }], "total": 1 });

    Mock::given(method("GET"))
        .and(path("/api/v1/assets/"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "0"))
        .and(query_param("order_by", "id"))
        .and(query_param("order_direction", "asc"))
        .and(query_param("fiat_currency", "USD"))
        .and(query_param("auction_state", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_assets(&AssetsQuery::default()).await.unwrap();
    assert_eq!(result, body);
}

#[tokio::test]
async fn explicit_query_key_overrides_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets/"))
        .and(query_param("limit", "5"))
        .and(query_param("order_by", "mint_date"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = AssetsQuery::default().with_limit(5).with_order_by("mint_date");
    assert!(client.get_assets(&query).await.is_ok());
}

#[tokio::test]
async fn get_orders_paginates_from_page_and_page_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/openorders/"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orders": [], "count": 0 })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.get_orders(&OrderQuery::default(), 3).await.is_ok());
}

#[tokio::test]
async fn get_orders_explicit_offset_and_limit_win() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/openorders/"))
        .and(query_param("limit", "7"))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orders": [], "count": 0 })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = OrderQuery::default().with_offset(100).with_limit(7);
    assert!(client.get_orders(&query, 3).await.is_ok());
}

#[tokio::test]
async fn get_orders_body_deserializes_into_orderbook_response() {
    let mock_server = MockServer::start().await;
    let order = json!({
        "id": 1,
        "chain": "n3",
        "token_contract": "0xc",
        "token_id": "1",
        "token_amount": "1",
        "quote_contract": "0xq",
        "quote_price": "1000000000",
        "maker_address": "NfKA",
        "start_date": "1650000000",
        "end_date": "0",
        "signature": "sig",
        "order_key_hash": "hash",
        "salt": "salt",
        "origin_fees": "0",
        "origin_address": ""
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/openorders/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "orders": [order], "count": 1 })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value = client.get_orders(&OrderQuery::default(), 1).await.unwrap();
    let orderbook: OrderbookResponse = serde_json::from_value(value).unwrap();
    assert_eq!(orderbook.count, 1);
    assert_eq!(orderbook.orders[0].maker_address, "NfKA");
}

#[tokio::test]
async fn api_key_header_sent_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/"))
        .and(header("X-API-KEY", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&mock_server)
        .await;

    let client = Client::new(Config {
        api_key: Some("secret".to_string()),
        api_base_url: Some(mock_server.uri()),
        ..Config::default()
    });
    assert!(client.get_users(&UsersQuery::default()).await.is_ok());
}

#[tokio::test]
async fn no_api_key_header_without_configuration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.get_users(&UsersQuery::default()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("x-api-key"));
}

#[tokio::test]
async fn user_exists_sends_username() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/userexists/"))
        .and(query_param("username", "ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "exists": true })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_user_exists("ghost").await.unwrap();
    assert_eq!(result, json!({ "exists": true }));
}

#[tokio::test]
async fn bad_request_joins_errors_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "errors": ["a", "b"] })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_assets(&AssetsQuery::default()).await.unwrap_err();
    match &err {
        Error::Api { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "a, b");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn not_found_with_unparseable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/metadata/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>nope</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_metadata(&ghostmarket_api::TokenQuery::default())
        .await
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Not found."));
    assert!(msg.contains("404"));
}

#[tokio::test]
async fn server_error_mentions_support_contact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "oops": 1 })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_assets(&AssetsQuery::default()).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Internal server error."));
    assert!(msg.contains("discord.gg"));
}

#[tokio::test]
async fn non_success_never_returns_a_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets/"))
        .respond_with(ResponseTemplate::new(503).set_body_string(""))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.get_assets(&AssetsQuery::default()).await.is_err());
}

#[tokio::test]
async fn logger_fires_once_before_and_once_after_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);
    let mut client = client_for(&mock_server);
    client.logger = Box::new(move |line| sink.lock().unwrap().push(line.to_string()));

    client.get_assets(&AssetsQuery::default()).await.unwrap();

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Sending request: "));
    assert_eq!(lines[1], "Got success: 200");
}

#[tokio::test]
async fn logger_fires_once_before_and_once_after_on_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&mock_server)
        .await;

    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);
    let mut client = client_for(&mock_server);
    client.logger = Box::new(move |line| sink.lock().unwrap().push(line.to_string()));

    assert!(client.get_assets(&AssetsQuery::default()).await.is_err());

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Sending request: "));
    assert_eq!(lines[1], "Got error 404: gone");
}

#[tokio::test]
async fn success_body_that_is_not_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_assets(&AssetsQuery::default()).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn page_size_field_drives_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/openorders/"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orders": [], "count": 0 })))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    client.page_size = 5;
    assert!(client.get_order(&OrderQuery::default(), 2).await.is_ok());
}
