//! Resolution strategies

use crate::models::{ExplanationRequest, ExplanationResponse};

use super::catalog::CatalogEntry;
use super::provider::ProviderError;

/// Generic hints attached to every templated fallback explanation
pub const DEFAULT_SUGGESTIONS: [&str; 3] = [
    "Try stepping through slowly to observe the changes",
    "Pay attention to which elements are being compared",
    "Notice how the sorted portion grows",
];

/// Fault inside a strategy. Never leaves the resolver.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("strategy produced an empty explanation")]
    EmptyExplanation,

    #[error("{0}")]
    Failed(String),
}

/// A predicate over (key, request) plus a producer.
///
/// `key` is the normalized algorithm name. A strategy that cannot answer
/// must either return `false` from `matches` or an `Err` from `produce`;
/// both make the resolver move on.
pub trait ExplanationStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn matches(&self, key: &str, request: &ExplanationRequest) -> bool;

    fn produce(&self, request: &ExplanationRequest) -> Result<ExplanationResponse, StrategyError>;
}

/// Exact-match strategy over one catalog entry
#[derive(Debug, Clone, Copy)]
pub struct TableStrategy {
    entry: &'static CatalogEntry,
}

impl TableStrategy {
    pub fn new(entry: &'static CatalogEntry) -> Self {
        Self { entry }
    }
}

impl ExplanationStrategy for TableStrategy {
    fn name(&self) -> &str {
        self.entry.key
    }

    fn matches(&self, key: &str, _request: &ExplanationRequest) -> bool {
        key == self.entry.key
    }

    fn produce(&self, _request: &ExplanationRequest) -> Result<ExplanationResponse, StrategyError> {
        Ok(self.entry.to_response())
    }
}

/// Templated answer used when no strategy claims a request.
///
/// Uses the algorithm name exactly as the caller sent it.
pub fn default_response(request: &ExplanationRequest) -> ExplanationResponse {
    ExplanationResponse::new(format!(
        "Explanation for {} at step {}",
        request.algorithm, request.step
    ))
    .with_suggestions(DEFAULT_SUGGESTIONS)
}
