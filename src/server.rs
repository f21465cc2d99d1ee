// 🌐 Receipt Points API - Axum routes
// POST /receipts/process, GET /receipts/:id/points

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::receipt::Receipt;
use crate::scoring;
use crate::store::ScoreStore;
use crate::validation;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<ScoreStore>,
}

impl AppState {
    pub fn new(store: Arc<ScoreStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /receipts/process - Validate, score and store a receipt
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected unreadable receipt body");
        ApiError::InvalidReceipt
    })?;

    validation::validate(&receipt).map_err(|err| {
        tracing::warn!(error = %err, retailer = %receipt.retailer, "Rejected invalid receipt");
        ApiError::InvalidReceipt
    })?;

    let points = scoring::score(&receipt);
    let id = state.store.insert(points);
    tracing::info!(%id, points, "Processed receipt");

    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/:id/points - Look up the points recorded for a receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    match state.store.get(&id) {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            tracing::debug!(%id, "No receipt for id");
            Err(ApiError::NotFound)
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
