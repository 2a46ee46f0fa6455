//! API Routes
//!
//! Endpoints mounted at the application root.

use axum::{
    extract::State,
    http::{header, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Path of the health check endpoint
pub const HEALTH_PATH: &str = "/api/healthchecker";

/// Path the schema document is served from
pub const OPENAPI_PATH: &str = "/openapi.json";

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Routes documented in the schema that live outside any route group
#[derive(OpenApi)]
#[openapi(paths(health_checker))]
pub struct RootApi;

/// Create the root router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(HEALTH_PATH, get(health_checker))
        .route(OPENAPI_PATH, get(openapi_schema))
}

// =========================================================================
// GET /api/healthchecker
// =========================================================================

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/healthchecker",
    responses(
        (status = 200, description = "Service is accepting requests", body = HealthResponse)
    )
)]
pub async fn health_checker() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Hello World".to_string(),
    })
}

// =========================================================================
// GET /openapi.json
// =========================================================================

/// Serve the cached schema document
async fn openapi_schema(State(state): State<AppState>) -> AppResult<Response> {
    let cached = state.schema.document().await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        cached.body().clone(),
    )
        .into_response())
}

// =========================================================================
// Fallback
// =========================================================================

/// Response for paths no route matches
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
