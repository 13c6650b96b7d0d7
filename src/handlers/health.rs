//! Liveness check

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    environment: String,
    strategies: usize,
    timestamp: i64,
}

/// GET /api/health
pub async fn check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        strategies: state.resolver.strategy_names().len(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
