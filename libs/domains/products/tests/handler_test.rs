//! Handler tests for Products domain
//!
//! These tests drive the products router directly over the in-memory
//! repository:
//! - Request validation (path and body)
//! - Response envelopes and status codes
//! - Error responses
//!
//! CORS, docs and the `/api` prefix belong to the application router and are
//! covered there.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn detail_messages(body: &Value) -> Vec<(String, String)> {
    body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| {
            (
                d["field"].as_str().unwrap().to_string(),
                d["message"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_product_lifecycle() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({ "name": "Monitor", "price": 300 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "data": { "id": 1, "name": "Monitor", "price": 300.0, "availability": true } })
    );

    let (status, body) = send(&app, "PATCH", "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["availability"], false);

    let (status, body) = send(&app, "GET", "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["availability"], false);

    let (status, body) = send(&app, "DELETE", "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": "Product deleted successfully" }));

    let (status, body) = send(&app, "GET", "/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_returns_newest_first() {
    let app = app();

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));

    for name in ["Monitor", "Mouse", "Desk"] {
        send(&app, "POST", "/", Some(json!({ "name": name, "price": 10 }))).await;
    }

    let (_, body) = send(&app, "GET", "/", None).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Desk", "Mouse", "Monitor"]);
}

#[tokio::test]
async fn test_create_ignores_availability_in_body() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({ "name": "Lamp", "price": "12.50", "availability": false })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["availability"], true);
    assert_eq!(body["data"]["price"], 12.5);
}

#[tokio::test]
async fn test_create_with_invalid_fields_persists_nothing() {
    let app = app();

    let (status, body) = send(&app, "POST", "/", Some(json!({ "name": "", "price": 0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(
        detail_messages(&body),
        vec![
            ("name".to_string(), "Name is required".to_string()),
            (
                "price".to_string(),
                "Price must be greater than 0".to_string()
            ),
        ]
    );

    let (_, body) = send(&app, "GET", "/", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_create_without_json_content_type_reports_missing_fields() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"name":"Monitor","price":300}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_non_integer_ids_are_rejected_before_handler() {
    let app = app();

    for method in ["GET", "PATCH", "DELETE"] {
        let (status, body) = send(&app, method, "/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(
            detail_messages(&body),
            vec![("id".to_string(), "ID must be an integer".to_string())]
        );
    }
}

#[tokio::test]
async fn test_unknown_ids_return_not_found() {
    let app = app();

    for method in ["GET", "PATCH", "DELETE"] {
        let (status, body) = send(&app, method, "/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(body["error"], "NOT_FOUND");
    }

    let (status, _) = send(
        &app,
        "PUT",
        "/999",
        Some(json!({ "name": "Ghost", "price": 1, "availability": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let app = app();
    send(&app, "POST", "/", Some(json!({ "name": "Monitor", "price": 300 }))).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/1",
        Some(json!({ "name": "Monitor 27\"", "price": 349.99, "availability": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "id": 1, "name": "Monitor 27\"", "price": 349.99, "availability": false })
    );
}

#[tokio::test]
async fn test_update_reports_id_and_body_errors_together() {
    let app = app();

    let (status, body) = send(
        &app,
        "PUT",
        "/abc",
        Some(json!({ "name": "Desk", "price": -1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        detail_messages(&body),
        vec![
            ("id".to_string(), "ID must be an integer".to_string()),
            (
                "price".to_string(),
                "Price must be greater than 0".to_string()
            ),
            (
                "availability".to_string(),
                "Availability must be a boolean".to_string()
            ),
        ]
    );
}

#[tokio::test]
async fn test_toggle_twice_restores_and_ignores_body() {
    let app = app();
    send(&app, "POST", "/", Some(json!({ "name": "Monitor", "price": 300 }))).await;

    let (_, body) = send(&app, "PATCH", "/1", Some(json!({ "availability": true }))).await;
    assert_eq!(body["data"]["availability"], false);

    let (_, body) = send(&app, "PATCH", "/1", None).await;
    assert_eq!(body["data"]["availability"], true);
}

#[tokio::test]
async fn test_disconnected_repository_returns_500() {
    let app = handlers::router(ProductService::new(PgProductRepository::disconnected()));

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "DATABASE_UNAVAILABLE");

    let (status, _) = send(
        &app,
        "POST",
        "/",
        Some(json!({ "name": "Monitor", "price": 300 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_validation_runs_even_when_database_is_down() {
    let app = handlers::router(ProductService::new(PgProductRepository::disconnected()));

    let (status, body) = send(&app, "GET", "/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}
