//! Service metadata handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct Endpoints {
    explain: &'static str,
    health: &'static str,
}

#[derive(Serialize)]
pub struct ServiceInfo {
    message: &'static str,
    status: &'static str,
    version: &'static str,
    environment: String,
    endpoints: Endpoints,
}

pub async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Algorithm Visualizer API",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        endpoints: Endpoints {
            explain: "/api/explain",
            health: "/api/health",
        },
    })
}
