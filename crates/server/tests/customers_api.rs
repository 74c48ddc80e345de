use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, ServerState};
use service::customer::repo::InMemoryCustomerDao;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app(dao: InMemoryCustomerDao) -> Router {
    routes::build_router(ServerState::new(Arc::new(dao)), cors())
}

fn json_request(method: &str, uri: &str, body: Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?)
}

fn empty_request(method: &str, uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method(method).uri(uri).body(Body::empty())?)
}

async fn body_json(resp: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn health_ok() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::new());
    let resp = app.oneshot(empty_request("GET", "/health")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn list_returns_seeded_customers() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::with_seed_data());
    let resp = app.oneshot(empty_request("GET", "/api/v1/customers")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert_eq!(body, json!([
        {"id": 1, "name": "Avinaash", "email": "avinaash@io.com", "age": 31},
        {"id": 2, "name": "Leevy", "email": "leevy@io.com", "age": 30}
    ]));
    Ok(())
}

#[tokio::test]
async fn register_update_fetch_delete_flow() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::new());

    let resp = app.clone()
        .oneshot(json_request("POST", "/api/v1/customers", json!({"name": "A", "email": "a@x.com", "age": 31}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.clone()
        .oneshot(json_request("PUT", "/api/v1/customers/1", json!({"age": 32}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.clone().oneshot(empty_request("GET", "/api/v1/customers/1")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?, json!({"id": 1, "name": "A", "email": "a@x.com", "age": 32}));

    let resp = app.clone().oneshot(empty_request("DELETE", "/api/v1/customers/1")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(empty_request("GET", "/api/v1/customers/1")?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_conflict() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::with_seed_data());
    let resp = app
        .oneshot(json_request("POST", "/api/v1/customers", json!({"name": "Copy", "email": "leevy@io.com", "age": 22}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await?;
    assert_eq!(body["error"], "Conflict");
    assert!(body["message"].as_str().unwrap_or_default().contains("leevy@io.com"));
    Ok(())
}

#[tokio::test]
async fn create_accepts_unchecked_fields() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::new());
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/customers", json!({"name": "", "email": "b-at-x", "age": -1}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.oneshot(empty_request("GET", "/api/v1/customers/1")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert_eq!(body, json!({"id": 1, "name": "", "email": "b-at-x", "age": -1}));
    Ok(())
}

#[tokio::test]
async fn update_without_changes_is_bad_request() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::with_seed_data());
    let resp = app
        .oneshot(json_request("PUT", "/api/v1/customers/1", json!({"name": "Avinaash", "age": 31}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await?["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn update_to_existing_email_is_conflict() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::with_seed_data());
    let resp = app
        .oneshot(json_request("PUT", "/api/v1/customers/1", json!({"email": "leevy@io.com"}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_not_found() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::new());
    let resp = app.clone().oneshot(empty_request("DELETE", "/api/v1/customers/42")?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = app
        .oneshot(json_request("PUT", "/api/v1/customers/42", json!({"age": 1}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_requests_are_rejected_by_extractors() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::new());
    let resp = app.clone().oneshot(empty_request("GET", "/api/v1/customers/abc")?).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(json_request("POST", "/api/v1/customers", json!({"name": "NoEmail", "age": 3}))?)
        .await?;
    assert!(resp.status().is_client_error());
    Ok(())
}

#[tokio::test]
async fn metrics_and_openapi_exposed() -> anyhow::Result<()> {
    let app = build_app(InMemoryCustomerDao::new());
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/customers", json!({"name": "M", "email": "m@x.com", "age": 5}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.clone().oneshot(empty_request("GET", "/metrics")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let text = String::from_utf8(to_bytes(resp.into_body(), usize::MAX).await?.to_vec())?;
    assert!(text.contains("customers_created_total"));

    let resp = app.oneshot(empty_request("GET", "/api-docs/openapi.json")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await?;
    assert!(doc["paths"]["/api/v1/customers/{id}"].is_object());
    Ok(())
}
