//! API Routes
//!
//! HTTP endpoint definitions for point queries and mutations.
//! Path and body integers are validated here, before the service is called.
//! Malformed paths and bodies are answered as invalid arguments.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::domain::{Amount, PointHistory, UserId, UserPoint};
use crate::error::AppError;
use crate::service::PointService;

// =========================================================================
// Request/Response types
// =========================================================================

/// Body of charge and use requests
#[derive(Debug, Serialize, Deserialize)]
pub struct AmountRequest {
    pub amount: i64,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the point API router
pub fn create_router() -> Router<PointService> {
    Router::new()
        .route("/point/:user_id", get(get_point))
        .route("/point/:user_id/histories", get(get_histories))
        .route("/point/:user_id/charge", patch(charge))
        .route("/point/:user_id/use", patch(use_points))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

// =========================================================================
// GET /point/:user_id
// =========================================================================

async fn get_point(
    State(service): State<PointService>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserPoint>, AppError> {
    let Path(user_id) = user_id?;
    let user_id = UserId::new(user_id)?;
    Ok(Json(service.get_balance(user_id).await?))
}

// =========================================================================
// GET /point/:user_id/histories
// =========================================================================

async fn get_histories(
    State(service): State<PointService>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<PointHistory>>, AppError> {
    let Path(user_id) = user_id?;
    let user_id = UserId::new(user_id)?;
    Ok(Json(service.get_history(user_id).await?))
}

// =========================================================================
// PATCH /point/:user_id/charge
// =========================================================================

async fn charge(
    State(service): State<PointService>,
    user_id: Result<Path<i64>, PathRejection>,
    request: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<UserPoint>, AppError> {
    let Path(user_id) = user_id?;
    let user_id = UserId::new(user_id)?;
    let Json(request) = request?;
    let amount = Amount::new(request.amount)?;
    Ok(Json(service.charge(user_id, amount).await?))
}

// =========================================================================
// PATCH /point/:user_id/use
// =========================================================================

async fn use_points(
    State(service): State<PointService>,
    user_id: Result<Path<i64>, PathRejection>,
    request: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<UserPoint>, AppError> {
    let Path(user_id) = user_id?;
    let user_id = UserId::new(user_id)?;
    let Json(request) = request?;
    let amount = Amount::new(request.amount)?;
    Ok(Json(service.use_points(user_id, amount).await?))
}
