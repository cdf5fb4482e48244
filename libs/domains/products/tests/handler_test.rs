//! Handler tests for Products domain
//!
//! These tests drive the products router end to end over the in-memory
//! repository:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization and HTTP status codes
//! - Error envelopes
//!
//! Routing prefixes, tracing and CORS belong to the app and are not covered here.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(repo: &InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repo.clone()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn widget() -> Value {
    json!({
        "name": "Widget",
        "price": 9.99,
        "category": "tools",
        "sku": "W-1",
        "stock": 5
    })
}

async fn seed(
    repo: &InMemoryProductRepository,
    name: &str,
    category: &str,
    active: bool,
) -> Product {
    let mut product = Product::new(CreateProduct {
        name: name.to_string(),
        description: String::new(),
        price: 1.0,
        category: category.to_string(),
        sku: format!("SKU-{name}"),
        stock: 1,
    });
    product.is_active = active;
    repo.insert_raw(product.clone()).await;
    product
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let repo = InMemoryProductRepository::new();

    let response = app(&repo)
        .oneshot(json_request("POST", "/", widget()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, 9.99);
    assert_eq!(product.stock, 5);
    assert_eq!(product.description, "");
    assert!(product.is_active);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let repo = InMemoryProductRepository::new();
    let mut body = widget();
    body["name"] = json!("");

    let response = app(&repo)
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "INVALID_INPUT");
    assert_eq!(
        error["message"],
        "invalid product data: product name is required"
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_product_handler_ignores_is_active() {
    let repo = InMemoryProductRepository::new();
    let mut body = widget();
    body["is_active"] = json!(false);

    let response = app(&repo)
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let product: Product = json_body(response.into_body()).await;
    assert!(product.is_active);
}

#[tokio::test]
async fn test_create_product_handler_rejects_malformed_json() {
    let repo = InMemoryProductRepository::new();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app(&repo).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_list_products_hides_inactive() {
    let repo = InMemoryProductRepository::new();
    seed(&repo, "a", "tools", true).await;
    seed(&repo, "b", "tools", false).await;
    seed(&repo, "c", "toys", true).await;

    let response = app(&repo).oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list: Value = json_body(response.into_body()).await;
    assert_eq!(list["count"], 2);
    let products = list["products"].as_array().unwrap();
    assert!(products.iter().all(|p| p["is_active"] == true));
}

#[tokio::test]
async fn test_list_products_empty() {
    let repo = InMemoryProductRepository::new();

    let response = app(&repo).oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list: Value = json_body(response.into_body()).await;
    assert_eq!(list, json!({ "products": [], "count": 0 }));
}

#[tokio::test]
async fn test_get_by_category_handler() {
    let repo = InMemoryProductRepository::new();
    seed(&repo, "a", "tools", true).await;
    seed(&repo, "b", "tools", false).await;
    seed(&repo, "c", "toys", true).await;

    let response = app(&repo)
        .oneshot(empty_request("GET", "/category?category=tools"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list: ProductList = json_body(response.into_body()).await;
    assert_eq!(list.category.as_deref(), Some("tools"));
    assert_eq!(list.count, 1);
    assert_eq!(list.products[0].name, "a");
}

#[tokio::test]
async fn test_get_by_category_requires_category() {
    let repo = InMemoryProductRepository::new();

    for uri in ["/category", "/category?category="] {
        let response = app(&repo).oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_get_by_category_malformed_query_uses_error_envelope() {
    let repo = InMemoryProductRepository::new();

    let response = app(&repo)
        .oneshot(empty_request("GET", "/category?category=a&category=b"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], 1013);
    assert_eq!(body["error"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_get_product_handler() {
    let repo = InMemoryProductRepository::new();
    let hidden = seed(&repo, "hidden", "tools", false).await;

    let response = app(&repo)
        .oneshot(empty_request("GET", &format!("/{}", hidden.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product, hidden);
}

#[tokio::test]
async fn test_get_product_handler_returns_404() {
    let repo = InMemoryProductRepository::new();

    let response = app(&repo)
        .oneshot(empty_request("GET", "/missing-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "NOT_FOUND");
    assert_eq!(error["message"], "product not found");
}

#[tokio::test]
async fn test_update_product_handler_partial() {
    let repo = InMemoryProductRepository::new();
    let original = seed(&repo, "a", "tools", true).await;

    let response = app(&repo)
        .oneshot(json_request(
            "PUT",
            &format!("/{}", original.id),
            json!({ "price": 12.50 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.price, 12.50);
    assert_eq!(updated.name, original.name);
    assert_eq!(updated.sku, original.sku);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
}

#[tokio::test]
async fn test_update_product_handler_deactivates() {
    let repo = InMemoryProductRepository::new();
    let original = seed(&repo, "a", "tools", true).await;

    let response = app(&repo)
        .oneshot(json_request(
            "PUT",
            &format!("/{}", original.id),
            json!({ "is_active": false }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(&repo).oneshot(empty_request("GET", "/")).await.unwrap();
    let list: ProductList = json_body(response.into_body()).await;
    assert_eq!(list.count, 0);
}

#[tokio::test]
async fn test_update_product_handler_validates_present_fields() {
    let repo = InMemoryProductRepository::new();
    let original = seed(&repo, "a", "tools", true).await;

    let response = app(&repo)
        .oneshot(json_request(
            "PUT",
            &format!("/{}", original.id),
            json!({ "stock": -1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(
        error["message"],
        "invalid product data: product stock cannot be negative"
    );
}

#[tokio::test]
async fn test_update_product_handler_returns_404() {
    let repo = InMemoryProductRepository::new();

    let response = app(&repo)
        .oneshot(json_request("PUT", "/missing-id", json!({ "price": 1.0 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_handler_then_404() {
    let repo = InMemoryProductRepository::new();
    let product = seed(&repo, "a", "tools", true).await;
    let uri = format!("/{}", product.id);

    let response = app(&repo).oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "message": "Product deleted successfully" }));

    let response = app(&repo).oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app(&repo).oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_returns_500() {
    let repo = InMemoryProductRepository::failing("failed to scan products");

    let response = app(&repo).oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "PERSISTENCE_ERROR");
    assert_eq!(error["message"], "failed to scan products");
}

#[tokio::test]
async fn test_create_get_delete_lifecycle() {
    let repo = InMemoryProductRepository::new();

    let response = app(&repo)
        .oneshot(json_request("POST", "/", widget()))
        .await
        .unwrap();
    let created: Product = json_body(response.into_body()).await;
    let uri = format!("/{}", created.id);

    let response = app(&repo).oneshot(empty_request("GET", &uri)).await.unwrap();
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, created);

    let response = app(&repo).oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(&repo).oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
