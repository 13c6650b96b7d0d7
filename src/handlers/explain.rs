//! Explanation handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::explain::default_response;
use crate::models::{ExplanationRequest, ExplanationResponse};
use crate::{AppError, AppResult, AppState};

/// POST /api/explain
///
/// Only a malformed or invalid body fails. Once the request is valid the
/// answer is always 200: resolution runs on the blocking pool, and if that
/// task dies the templated default is returned instead.
pub async fn explain(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ExplanationResponse>> {
    let Json(body) = payload.map_err(|e| AppError::MalformedBody(e.body_text()))?;
    let request = ExplanationRequest::parse(body)?;

    tracing::info!("Explain request: {} step {}", request.algorithm, request.step);

    let resolver = state.resolver.clone();
    let job = request.clone();
    let response = match tokio::task::spawn_blocking(move || resolver.resolve(&job)).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Resolution task failed for {}: {}", request.algorithm, e);
            default_response(&request)
        }
    };

    Ok(Json(response))
}
