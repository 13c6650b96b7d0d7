//! Algorithm Visualizer API
//!
//! Step-by-step explanations for the sorting and graph algorithms shown by
//! the visualizer frontend.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  ALGORITHM VISUALIZER API                │
//! ├──────────────────────────────────────────────────────────┤
//! │  POST /api/explain                                       │
//! │        │                                                 │
//! │        ▼                                                 │
//! │  ┌─────────────┐   ┌──────────────────────────────────┐  │
//! │  │  Request    │──▶│  ExplanationResolver             │  │
//! │  │  Contract   │   │  strategies (first match wins)   │  │
//! │  │  (validate) │   │  └─▶ default template (total)    │  │
//! │  └─────────────┘   └──────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod explain;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    http::HeaderValue,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use config::Config;
pub use error::{AppError, AppResult};
pub use explain::ExplanationResolver;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ExplanationResolver>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, resolver: ExplanationResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(handlers::root::info))
        .route("/api/health", get(handlers::health::check))
        .route("/api/explain", post(handlers::explain::explain))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for the visualizer frontend.
///
/// Credentials rule out wildcard methods/headers, so those are mirrored.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter(|o| o.as_str() != "*")
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
