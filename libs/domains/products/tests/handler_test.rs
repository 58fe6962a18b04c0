//! Handler tests for Products domain
//!
//! These drive the real router with `oneshot()`, backed by an in-memory
//! repository, and check:
//! - Body decoding and field rules (JSON and form bodies)
//! - Response shapes and HTTP status codes
//! - Error normalization (404 / 422 / route not matched)

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use axum_helpers::errors::handlers::route_not_matched;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // For oneshot()

/// In-memory stand-in for the MongoDB repository
#[derive(Clone, Default)]
struct InMemoryRepository {
    products: Arc<Mutex<Vec<Product>>>,
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products
            .iter()
            .find(|p| p.id == id.as_object_id())
            .cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, input: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.id == id.as_object_id())
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        product.apply_update(input);
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> ProductResult<Product> {
        let mut products = self.products.lock().unwrap();
        let index = products
            .iter()
            .position(|p| p.id == id.as_object_id())
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        Ok(products.remove(index))
    }
}

/// Products router mounted the way the API binary mounts it
fn app() -> Router {
    let service = ProductService::new(InMemoryRepository::default());
    Router::new()
        .nest("/products", handlers::router(service))
        .fallback(route_not_matched)
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

// Helper to send a request and parse the JSON response body
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create_pen(app: &Router) -> String {
    let (status, body) = send(
        app,
        json_request("POST", "/products", json!({ "name": "Pen", "price": 1.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["product"]["_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_returns_201_with_message() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/products",
            json!({ "name": "  Pen  ", "price": 1.5, "description": "Blue ink" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["msg"], "1 Product created :)");
    assert_eq!(body["product"]["name"], "Pen");
    assert_eq!(body["product"]["price"], 1.5);
    assert_eq!(body["product"]["description"], "Blue ink");
    assert_eq!(body["product"]["_id"].as_str().unwrap().len(), 24);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = app();
    let id = create_pen(&app).await;

    let (status, body) = send(&app, empty_request("GET", &format!("/products/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["_id"], id);
    assert_eq!(body["product"]["name"], "Pen");
    assert_eq!(body["product"]["price"], 1.5);
}

#[tokio::test]
async fn test_create_with_short_name_and_missing_price_is_422() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request("POST", "/products", json!({ "name": " a " })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({ "errors": [
            { "name": "Should be at least 2 Characters" },
            { "price": "Should be a number >= 0" }
        ]})
    );

    // Nothing was stored
    let (_, list) = send(&app, empty_request("GET", "/products")).await;
    assert_eq!(list, json!({ "products": [] }));
}

#[tokio::test]
async fn test_create_with_non_text_description_is_422() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/products",
            json!({ "name": "Pen", "price": 2, "description": 42 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "errors": [{ "description": "Should be a text" }] }));
}

#[tokio::test]
async fn test_create_with_empty_body_reports_required_fields() {
    let app = app();
    let (status, body) = send(&app, empty_request("POST", "/products")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_400() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_accepts_form_body() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=Notebook&price=3.25"))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["product"]["name"], "Notebook");
    assert_eq!(body["product"]["price"], 3.25);
}

#[tokio::test]
async fn test_list_returns_all_products() {
    let app = app();
    create_pen(&app).await;
    create_pen(&app).await;

    let (status, body) = send(&app, empty_request("GET", "/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_changes_only_price() {
    let app = app();
    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/products",
            json!({ "name": "Pen", "price": 1.5, "description": "Blue ink" }),
        ),
    )
    .await;
    let id = created["product"]["_id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/products/{id}"), json!({ "price": 5 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Product updated :)");
    assert_eq!(body["product"]["price"], 5.0);
    assert_eq!(body["product"]["name"], "Pen");
    assert_eq!(body["product"]["description"], "Blue ink");

    let (_, fetched) = send(&app, empty_request("GET", &format!("/products/{id}"))).await;
    assert_eq!(fetched["product"], body["product"]);
}

async fn create_pen_with_description(app: &Router) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/products",
            json!({ "name": "Pen", "price": 1.5, "description": "Blue ink" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["product"]["_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_update_with_null_description_keeps_stored_value() {
    let app = app();
    let id = create_pen_with_description(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/products/{id}"),
            json!({ "name": null, "price": null, "description": null }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Pen");
    assert_eq!(body["product"]["price"], 1.5);
    assert_eq!(body["product"]["description"], "Blue ink");
}

#[tokio::test]
async fn test_update_with_empty_description_keeps_stored_value() {
    let app = app();
    let id = create_pen_with_description(&app).await;
    let uri = format!("/products/{id}");

    let (status, body) = send(&app, json_request("PUT", &uri, json!({ "description": "" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["description"], "Blue ink");

    let (_, fetched) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(fetched["product"]["description"], "Blue ink");
}

#[tokio::test]
async fn test_update_with_empty_form_description_keeps_stored_value() {
    let app = app();
    let id = create_pen_with_description(&app).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/products/{id}"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("price=2&description="))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["price"], 2.0);
    assert_eq!(body["product"]["description"], "Blue ink");
}

#[tokio::test]
async fn test_update_replaces_non_empty_description() {
    let app = app();
    let id = create_pen_with_description(&app).await;

    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/products/{id}"), json!({ "description": "Red ink" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["description"], "Red ink");
}

#[tokio::test]
async fn test_update_with_negative_price_is_422() {
    let app = app();
    let id = create_pen(&app).await;

    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/products/{id}"), json!({ "price": -1 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "errors": [{ "price": "Should be a number >= 0" }] }));
}

#[tokio::test]
async fn test_delete_returns_product_then_404() {
    let app = app();
    let id = create_pen(&app).await;
    let uri = format!("/products/{id}");

    let (status, body) = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Product deleted");
    assert_eq!(body["product"]["_id"], id);

    let (status, body) = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Product Not Found" }));

    let (status, _) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_valid_id_is_404() {
    let app = app();
    let uri = "/products/65f1c0a2b4d3e8a9c0f1e2d3";

    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, empty_request(method, uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(body, json!({ "error": "Product Not Found" }));
    }

    let (status, _) = send(&app, json_request("PUT", uri, json!({ "price": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_is_404_not_500() {
    let app = app();
    let uri = "/products/not-an-object-id";

    let (status, body) = send(&app, empty_request("GET", uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Product Not Found" }));

    let (status, _) = send(&app, json_request("PUT", uri, json!({ "price": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request("DELETE", uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_undecodable_id_is_404_with_error_body() {
    let app = app();
    let uri = "/products/%FF";

    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, empty_request(method, uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(body, json!({ "error": "Product Not Found" }));
    }

    let (status, body) = send(&app, json_request("PUT", uri, json!({ "price": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Product Not Found" }));
}

#[tokio::test]
async fn test_unknown_route_reports_url() {
    let app = app();
    let (status, body) = send(&app, empty_request("GET", "/nonexistent")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": "The URL you requested: /nonexistent is NOT found on Server!" })
    );
}

#[tokio::test]
async fn test_unsupported_method_is_route_not_matched() {
    let app = app();
    let (status, body) = send(&app, empty_request("PATCH", "/products/abc")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "The URL you requested: /products/abc is NOT found on Server!"
    );
}
