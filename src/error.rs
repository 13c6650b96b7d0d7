//! Error handling

use std::collections::BTreeMap;

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::ValidationErrors;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body parsed but failed field constraints
    #[error("request validation failed: {0}")]
    Validation(ValidationErrors),

    /// Request body is not usable JSON
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Flatten validator output into `field -> [messages]`, sorted by field name
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Validation(errors) => {
                tracing::debug!("Rejected request: {}", self);
                json!({
                    "error": "Request validation failed",
                    "status": status.as_u16(),
                    "fields": field_messages(errors),
                })
            }
            AppError::MalformedBody(msg) => {
                tracing::debug!("Malformed body: {}", msg);
                json!({
                    "error": msg,
                    "status": status.as_u16(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}
