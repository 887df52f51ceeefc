use analytics::AnalyticsEngine;
use axum::{
    routing::{get, post, put},
    Router,
};
use configuration::Settings;
use std::sync::Arc;
use storage::JsonStore;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub store: JsonStore,
    pub engine: AnalyticsEngine,
}

/// Builds the application router around the given store.
pub fn router(store: JsonStore) -> Router {
    let app_state = Arc::new(AppState {
        store,
        engine: AnalyticsEngine::new(),
    });
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/data", get(handlers::get_data))
        .route("/api/products", post(handlers::create_product))
        .route("/api/products/:id", put(handlers::update_product))
        .route("/api/analytics", get(handlers::get_analytics))
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
/// Tracing must already be initialized by the caller.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let store = JsonStore::new(settings.storage.data_file.clone());
    let app = router(store);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        data_file = %settings.storage.data_file.display(),
        "Web server listening on http://{}",
        addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const SAMPLE: &str = r#"{
  "products": [
    {"id": 1, "title": "Mug", "category": "Kitchen", "unitPrice": 10, "cogs": 4}
  ],
  "orders": [
    {"orderNo": "ORD-1", "lineItems": [{"productId": 1, "quantity": 3}], "discounts": 2, "taxes": 1, "shipping": 5}
  ]
}"#;

    fn app(dir: &TempDir) -> Router {
        let path = dir.path().join("products_orders.json");
        std::fs::write(&path, SAMPLE).unwrap();
        router(JsonStore::new(path))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn get_data_returns_products_and_orders() {
        let dir = TempDir::new().unwrap();
        let request = Request::get("/api/data").body(Body::empty()).unwrap();

        let (status, body) = send(app(&dir), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["products"][0]["unitPrice"], 10.0);
        assert_eq!(body["orders"][0]["orderNo"], "ORD-1");
    }

    #[tokio::test]
    async fn analytics_are_computed_from_the_file() {
        let dir = TempDir::new().unwrap();
        let request = Request::get("/api/analytics").body(Body::empty()).unwrap();

        let (status, body) = send(app(&dir), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"][0]["sales"], 34.0);
        assert_eq!(body["rows"][0]["totalCOGS"], 12.0);
        assert_eq!(body["rows"][0]["grossMargin"], 64.7);
        assert_eq!(body["totals"]["grossProfit"], 22.0);
    }

    #[tokio::test]
    async fn create_product_returns_created() {
        let dir = TempDir::new().unwrap();
        let payload = json!({"title": "Lamp", "category": "Lighting", "unitPrice": 25.5, "cogs": 11});

        let (status, body) = send(app(&dir), json_request("POST", "/api/products", payload)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 2);
        assert_eq!(body["title"], "Lamp");
    }

    #[tokio::test]
    async fn invalid_product_is_a_bad_request() {
        let dir = TempDir::new().unwrap();
        let payload = json!({"title": "Lamp", "category": "", "unitPrice": 25.5, "cogs": 11});

        let (status, body) = send(app(&dir), json_request("POST", "/api/products", payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Title and category are required");
    }

    #[tokio::test]
    async fn update_changes_analytics_inputs() {
        let dir = TempDir::new().unwrap();
        let router = app(&dir);
        let payload = json!({"title": "Mug", "category": "Kitchen", "unitPrice": 12, "cogs": 4});

        let (status, body) = send(router.clone(), json_request("PUT", "/api/products/1", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["unitPrice"], 12.0);

        let request = Request::get("/api/analytics").body(Body::empty()).unwrap();
        let (_, body) = send(router, request).await;
        assert_eq!(body["rows"][0]["grossSales"], 36.0);
    }

    #[tokio::test]
    async fn update_of_unknown_product_is_not_found() {
        let dir = TempDir::new().unwrap();
        let payload = json!({"title": "Mug", "category": "Kitchen", "unitPrice": 12, "cogs": 4});

        let (status, body) = send(app(&dir), json_request("PUT", "/api/products/42", payload)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Product not found");
    }

    #[tokio::test]
    async fn non_numeric_product_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let payload = json!({"title": "Mug", "category": "Kitchen", "unitPrice": 12, "cogs": 4});

        let (status, body) = send(app(&dir), json_request("PUT", "/api/products/abc", payload)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Product not found");
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_bad_request() {
        let dir = TempDir::new().unwrap();
        let request = Request::builder()
            .method("POST")
            .uri("/api/products")
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let (status, body) = send(app(&dir), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn wrongly_typed_amounts_get_validation_messages() {
        let dir = TempDir::new().unwrap();
        let router = app(&dir);

        let payload = json!({"title": "Lamp", "category": "Lighting", "unitPrice": "abc", "cogs": 11});
        let (status, body) = send(router.clone(), json_request("POST", "/api/products", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unit price must be a number greater than 0");

        let payload = json!({"title": "Mug", "category": "Kitchen", "unitPrice": 12});
        let (status, body) = send(router, json_request("PUT", "/api/products/1", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "COGS must be a number greater than 0");
    }

    #[tokio::test]
    async fn oversized_orders_still_produce_analytics() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products_orders.json");
        std::fs::write(
            &path,
            r#"{
  "products": [{"id": 1, "title": "Crate", "category": "Bulk", "unitPrice": 1000000000000000, "cogs": 1}],
  "orders": [{"orderNo": 1, "lineItems": [{"productId": 1, "quantity": 1000000000000000}]}]
}"#,
        )
        .unwrap();
        let request = Request::get("/api/analytics").body(Body::empty()).unwrap();

        let (status, body) = send(router(JsonStore::new(path)), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["rows"][0]["grossSales"].as_f64().unwrap() > 1e28);
        assert_eq!(body["rows"][0]["grossMargin"], 100.0);
    }
}
