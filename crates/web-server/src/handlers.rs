use crate::{error::AppError, AppState};
use analytics::AnalyticsSnapshot;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use core_types::{Dataset, Product, ProductDraft, ProductId};
use serde_json::Value;
use std::sync::Arc;

/// # GET /api/data
/// Returns every product and order as stored.
pub async fn get_data(State(state): State<Arc<AppState>>) -> Json<Dataset> {
    Json(state.store.load().await)
}

/// Turns a request body into a draft. Only a body that is not JSON at all is rejected
/// here; wrong field types surface as validation errors.
fn read_draft(payload: Result<Json<Value>, JsonRejection>) -> Result<ProductDraft, AppError> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(ProductDraft::from_json(&body))
}

/// # PUT /api/products/:id
/// An id that is not a product number cannot match any product.
pub async fn update_product(
    id: Result<Path<u32>, PathRejection>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id.map_err(|e| {
        tracing::debug!(error = %e, "Unparsable product id.");
        AppError::NotFound("Product not found".to_string())
    })?;
    let draft = read_draft(payload)?;
    let product = state.store.update_product(ProductId(id), draft).await?;
    Ok(Json(product))
}

/// # POST /api/products
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let draft = read_draft(payload)?;
    let product = state.store.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// # GET /api/analytics
/// Recomputes order analytics from the current file contents on every request.
pub async fn get_analytics(State(state): State<Arc<AppState>>) -> Json<AnalyticsSnapshot> {
    let data = state.store.load().await;
    Json(state.engine.analyze(&data.orders, &data.products))
}
