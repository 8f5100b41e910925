use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use catalog::{
    abstract_trait::SchemaInitializerTrait,
    handler::AppRouter,
    repository::{Repositories, init_database},
    state::AppState,
};
use serde_json::{Value, json};
use shared::config::{ConnectionManager, ConnectionPool};
use tower::ServiceExt;

async fn memory_pool() -> ConnectionPool {
    ConnectionManager::new_pool("sqlite::memory:", 1, 1)
        .await
        .unwrap()
}

/// Router over an empty in-memory store, so ids start at 1.
async fn test_app() -> Router {
    let state = AppState::new(memory_pool().await).await;
    state.di_container.schema.ensure_schema().await.unwrap();
    AppRouter::build(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Sends `body` verbatim, with the given `Content-Type` when one is passed.
async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn lamp() -> Value {
    json!({
        "imageUrl": "https://example.com/lamp.png",
        "name": "Desk lamp",
        "count": 3,
        "width": 120,
        "height": 340,
        "weight": "1.2kg"
    })
}

async fn create_product(app: &Router) -> i64 {
    let (status, body) = send(app, "POST", "/api/products", Some(lamp())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn create_comment(app: &Router, product_id: i64, description: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/comments",
        Some(json!({
            "productId": product_id,
            "description": description,
            "date": "10:00 01.09.2021"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK", "message": "Server is running"}));
}

#[tokio::test]
async fn create_product_echoes_input() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/api/products", Some(lamp())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["imageUrl"], "https://example.com/lamp.png");
    assert_eq!(body["name"], "Desk lamp");
    assert_eq!(body["count"], 3);
    assert_eq!(body["size"], json!({"width": 120, "height": 340}));
    assert_eq!(body["weight"], "1.2kg");
    assert_eq!(body["comments"], json!([]));
}

#[tokio::test]
async fn create_product_without_weight_is_rejected() {
    let app = test_app().await;

    let mut payload = lamp();
    payload.as_object_mut().unwrap().remove("weight");

    let (status, body) = send(&app, "POST", "/api/products", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (_, products) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(products, json!([]));
}

#[tokio::test]
async fn create_product_with_empty_name_is_rejected() {
    let app = test_app().await;

    let mut payload = lamp();
    payload["name"] = json!("");

    let (status, _) = send(&app, "POST", "/api/products", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_wrongly_typed_field_is_bad_request() {
    let app = test_app().await;

    let mut payload = lamp();
    payload["count"] = json!("3");
    let (status, body) = send(&app, "POST", "/api/products", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON");

    let (status, body) = send(
        &app,
        "POST",
        "/api/comments",
        Some(json!({"productId": "1", "description": "Typed", "date": "now"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON");

    let (_, products) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(products, json!([]));
}

#[tokio::test]
async fn create_without_json_content_type_is_missing_fields() {
    let app = test_app().await;

    let (status, body) = send_raw(
        &app,
        "POST",
        "/api/products",
        None,
        r#"{"imageUrl":"x","name":"Lamp","count":1,"width":1,"height":1,"weight":"1kg"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (status, body) = send_raw(&app, "POST", "/api/comments", Some("text/plain"), "hello").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (status, body) = send_raw(
        &app,
        "POST",
        "/api/products",
        Some("application/json"),
        "{not json",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON");
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/products/999999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[tokio::test]
async fn non_numeric_product_id_is_bad_request() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid product ID"}));

    let (status, body) = send(&app, "DELETE", "/api/comments/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid comment ID"}));
}

#[tokio::test]
async fn product_lists_its_comments_in_id_order() {
    let app = test_app().await;
    let product_id = create_product(&app).await;

    let first = create_comment(&app, product_id, "Bright enough").await;
    let second = create_comment(&app, product_id, "Wobbly base").await;

    let (status, body) = send(&app, "GET", &format!("/api/products/{product_id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"].as_i64().unwrap(), first);
    assert_eq!(comments[0]["description"], "Bright enough");
    assert_eq!(comments[0]["productId"].as_i64().unwrap(), product_id);
    assert_eq!(comments[1]["id"].as_i64().unwrap(), second);
}

#[tokio::test]
async fn products_without_comments_are_listed_too() {
    let app = test_app().await;
    let lonely = create_product(&app).await;
    let commented = create_product(&app).await;
    create_comment(&app, commented, "Nice").await;

    let (status, body) = send(&app, "GET", "/api/products", None).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["id"].as_i64().unwrap(), lonely);
    assert_eq!(products[0]["comments"], json!([]));
    assert_eq!(products[1]["comments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_product_removes_its_comments() {
    let app = test_app().await;
    let product_id = create_product(&app).await;
    let comment_id = create_comment(&app, product_id, "Soon gone").await;

    let (status, body) = send(&app, "DELETE", &format!("/api/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product deleted successfully"}));

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/comments/product/{product_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = send(&app, "GET", &format!("/api/comments/{comment_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/api/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_update_changes_nothing() {
    let app = test_app().await;
    let product_id = create_product(&app).await;
    let uri = format!("/api/products/{product_id}");

    let (_, before) = send(&app, "GET", &uri, None).await;

    let request = Request::builder()
        .method("PUT")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"error": "Product not found or no changes made"}));

    let (status, _) = send(&app, "PUT", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, after) = send(&app, "GET", &uri, None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn partial_update_touches_only_given_fields() {
    let app = test_app().await;
    let product_id = create_product(&app).await;
    let uri = format!("/api/products/{product_id}");

    let (status, body) = send(&app, "PUT", &uri, Some(json!({"count": 7, "name": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product updated successfully"}));

    let (_, product) = send(&app, "GET", &uri, None).await;
    assert_eq!(product["count"], 7);
    assert_eq!(product["name"], "Desk lamp");
    assert_eq!(product["weight"], "1.2kg");
}

#[tokio::test]
async fn update_of_missing_product_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/products/424242",
        Some(json!({"name": "Ghost"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found or no changes made"}));
}

#[tokio::test]
async fn repeated_reads_are_identical() {
    let app = test_app().await;
    let product_id = create_product(&app).await;
    create_comment(&app, product_id, "Stable").await;
    let uri = format!("/api/products/{product_id}");

    let (_, first) = send(&app, "GET", &uri, None).await;
    let (_, second) = send(&app, "GET", &uri, None).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn comment_lifecycle() {
    let app = test_app().await;
    let product_id = create_product(&app).await;
    let comment_id = create_comment(&app, product_id, "First impression").await;
    let uri = format!("/api/comments/{comment_id}");

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "First impression");
    assert_eq!(body["date"], "10:00 01.09.2021");

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"description": "Second thoughts"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Comment updated successfully"}));

    let (_, all) = send(&app, "GET", "/api/comments", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["description"], "Second thoughts");

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Comment deleted successfully"}));

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Comment not found"}));
}

#[tokio::test]
async fn empty_comment_update_changes_nothing() {
    let app = test_app().await;
    let product_id = create_product(&app).await;
    let comment_id = create_comment(&app, product_id, "Untouched").await;
    let uri = format!("/api/comments/{comment_id}");

    let (_, before) = send(&app, "GET", &uri, None).await;

    let (status, body) = send(&app, "PUT", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Comment not found or no changes made"}));

    let (status, body) = send(&app, "PUT", &uri, Some(json!({"date": null}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Comment not found or no changes made"}));

    let (_, after) = send(&app, "GET", &uri, None).await;
    assert_eq!(before, after);
    assert_eq!(after["description"], "Untouched");
}

#[tokio::test]
async fn comments_by_product_need_a_numeric_id() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/comments/product/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid product ID"}));
}

#[tokio::test]
async fn missing_comment_cannot_be_changed_or_deleted() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/comments/999",
        Some(json!({"description": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Comment not found or no changes made"}));

    let (status, body) = send(&app, "DELETE", "/api/comments/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Comment not found"}));
}

#[tokio::test]
async fn comment_requires_a_product_id() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/comments",
        Some(json!({"productId": 0, "description": "Orphan", "date": "now"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn comment_for_unknown_product_is_a_backend_error() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/comments",
        Some(json!({"productId": 999, "description": "Orphan", "date": "now"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/nothing-here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Route not found"}));
}

#[tokio::test]
async fn metrics_and_openapi_are_served() {
    let app = test_app().await;
    send(&app, "GET", "/api/products", None).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("product_query_service_request_counter"));

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/products/{id}"].is_object());
}

#[tokio::test]
async fn seeding_runs_once() {
    let pool = memory_pool().await;
    let repos = Repositories::new(&pool);

    assert!(init_database(repos.schema.as_ref()).await.unwrap());
    assert!(!init_database(repos.schema.as_ref()).await.unwrap());
    assert!(!repos.schema.seed_if_empty().await.unwrap());

    let app = AppRouter::build(AppState::new(pool).await);

    let (_, products) = send(&app, "GET", "/api/products", None).await;
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Sample Product 1");
    assert_eq!(products[0]["comments"].as_array().unwrap().len(), 2);
    assert_eq!(products[1]["comments"].as_array().unwrap().len(), 1);

    let (_, comments) = send(&app, "GET", "/api/comments", None).await;
    assert_eq!(comments.as_array().unwrap().len(), 3);
}

#[tokio::test]
#[ignore = "needs a PostgreSQL server in DATABASE_URL"]
async fn postgres_round_trip() {
    let url = std::env::var("DATABASE_URL").unwrap();
    let pool = ConnectionManager::new_pool(&url, 1, 2).await.unwrap();
    let state = AppState::new(pool).await;
    state.di_container.schema.ensure_schema().await.unwrap();
    let app = AppRouter::build(state);

    let product_id = create_product(&app).await;
    let comment_id = create_comment(&app, product_id, "From postgres").await;

    let (status, body) = send(&app, "GET", &format!("/api/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comments"][0]["id"].as_i64().unwrap(), comment_id);

    let (status, _) = send(&app, "DELETE", &format!("/api/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}
