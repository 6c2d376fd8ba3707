//! API endpoint integration tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use barista_agent::api::{self, ApiState};
use barista_agent::{BaristaAgent, MemoryOrderStore, ORDER_SAVE_FAILED_MESSAGE};
use tower::ServiceExt;

mod common;
use common::{failing_agent, json_agent, read_order_file, test_config};

/// Build a test API router
fn build_test_router(agent: BaristaAgent) -> axum::Router {
    api::router(Arc::new(ApiState { agent }))
}

fn memory_router() -> axum::Router {
    build_test_router(BaristaAgent::with_store(
        test_config(),
        Arc::new(MemoryOrderStore::new()),
    ))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_tool(name: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/tools/{name}"))
        .header("content-type", "application/json")
        .header("x-session-id", "session-1")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const LATTE: &str = r#"{"drink_type":"Latte","size":"Tall","milk":"Oat","extras":["Vanilla syrup"],"name":"Amir"}"#;

#[tokio::test]
async fn test_health_endpoint() {
    let response = memory_router().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_menu_endpoint() {
    let response = memory_router().oneshot(get("/menu")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let text = json["text"].as_str().unwrap();
    assert!(text.starts_with("Welcome to Java Gen!"));
    assert_eq!(text.lines().count(), 5);
    assert_eq!(json["categories"]["sizes"].as_array().unwrap().len(), 6);
    assert_eq!(json["categories"]["drinks"][0], "Espresso");
}

#[tokio::test]
async fn test_menu_categories_keep_table_order() {
    let response = memory_router().oneshot(get("/menu")).await.unwrap();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let raw = String::from_utf8(body.to_vec()).unwrap();
    let positions: Vec<usize> = [
        "\"sizes\"",
        "\"servings\"",
        "\"drinks\"",
        "\"milk_options\"",
        "\"extras_examples\"",
    ]
    .iter()
    .map(|key| raw.find(key).unwrap())
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{raw}");
}

#[tokio::test]
async fn test_instructions_endpoint() {
    let response = memory_router().oneshot(get("/instructions")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let text = json["text"].as_str().unwrap();
    assert!(text.contains("submit_order"));
    assert!(text.contains("Welcome to Java Gen!"));
}

#[tokio::test]
async fn test_manifest_endpoint() {
    let response = memory_router().oneshot(get("/manifest")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["persona_id"], "java-gen-barista");
    assert_eq!(json["tools"][0]["function"]["name"], "submit_order");
    assert_eq!(json["voice"]["stt_model"], "nova-3");
}

#[tokio::test]
async fn test_list_tools() {
    let response = memory_router().oneshot(get("/tools")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tools = json["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["type"], "function");
    assert_eq!(
        tools[0]["function"]["parameters"]["required"],
        serde_json::json!(["drink_type", "size", "milk", "extras", "name"])
    );
}

#[tokio::test]
async fn test_submit_order_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_router(json_agent(dir.path()));

    let response = app.oneshot(post_tool("submit_order", LATTE)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let output = json["output"].as_str().unwrap();
    assert!(output.starts_with("Order confirmed!"));
    assert!(output.contains("Milk: Oat"));

    let saved = read_order_file(&dir.path().join("order.json"));
    assert_eq!(saved["drinkType"], "Latte");
    assert_eq!(saved["extras"], serde_json::json!(["Vanilla syrup"]));
}

#[tokio::test]
async fn test_submit_order_store_failure_is_spoken() {
    let app = build_test_router(failing_agent());

    let response = app.oneshot(post_tool("submit_order", LATTE)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["output"], ORDER_SAVE_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_unknown_tool_is_not_found() {
    let response = memory_router()
        .oneshot(post_tool("refund_order", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_malformed_arguments_are_bad_request() {
    let response = memory_router()
        .oneshot(post_tool("submit_order", r#"{"drink_type":"Latte"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_current_order_before_and_after_submit() {
    let app = memory_router();

    let response = app.clone().oneshot(get("/orders/current")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(post_tool("submit_order", LATTE))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/orders/current")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["drinkType"], "Latte");
    assert_eq!(json["name"], "Amir");
}
