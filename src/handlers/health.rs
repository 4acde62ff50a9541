//! Liveness and connectivity probes.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::server::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    environment: String,
}

#[derive(Serialize)]
pub struct TestResponse {
    status: &'static str,
    message: &'static str,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the Chat Gateway API",
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health
///
/// Readiness probe for orchestration systems; reports the deployment label.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        environment: state.config.environment.clone(),
    })
}

/// GET /test
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        status: "success",
        message: "Backend is running correctly!",
    })
}
