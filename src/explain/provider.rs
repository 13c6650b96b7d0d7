//! Text-provider backed strategy
//!
//! No provider ships with the service. `TextProvider` is the seam a
//! generative backend plugs into; `ProviderStrategy` adapts it to the
//! resolver so any provider fault becomes a decline instead of an error.

use std::collections::HashSet;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::models::{ExplanationRequest, ExplanationResponse};

use super::resolver::normalize_key;
use super::strategy::{ExplanationStrategy, StrategyError};

/// Upper bound on a single provider call
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Suggestions attached to provider-written explanations
pub const PROVIDER_SUGGESTIONS: [&str; 2] = [
    "Try comparing this with other sorting algorithms",
    "Consider the time complexity at this step",
];

const DEFAULT_QUESTION: &str = "What is happening in this step?";

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

/// Backend that turns a prompt into explanation text.
///
/// Implementations should give up once `timeout` has elapsed. The strategy
/// stops waiting at the deadline either way; a late answer is discarded.
pub trait TextProvider: Send + Sync {
    fn complete(&self, prompt: &str, timeout: Duration) -> Result<String, ProviderError>;
}

pub struct ProviderStrategy<P> {
    provider: Arc<P>,
    timeout: Duration,
    only: Option<HashSet<String>>,
}

impl<P: TextProvider + 'static> ProviderStrategy<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            timeout: DEFAULT_PROVIDER_TIMEOUT,
            only: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Restrict the strategy to the given algorithm names
    pub fn only_for<I, S>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.only = Some(algorithms.into_iter().map(|a| normalize_key(a.as_ref())).collect());
        self
    }

    /// Run one provider call on its own thread, bounded by `self.timeout`.
    ///
    /// The worker is detached on timeout so the caller is never held past
    /// the deadline.
    fn complete_within_deadline(&self, prompt: String) -> Result<String, ProviderError> {
        let provider = Arc::clone(&self.provider);
        let timeout = self.timeout;
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("explain-provider".to_string())
            .spawn(move || {
                let _ = tx.send(provider.complete(&prompt, timeout));
            })
            .map_err(|e| ProviderError::Unavailable(format!("failed to spawn provider call: {}", e)))?;

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(ProviderError::Timeout(timeout)),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(ProviderError::Unavailable("provider call aborted".to_string()))
            }
        }
    }
}

/// Tutoring prompt for one step
pub fn build_prompt(request: &ExplanationRequest) -> String {
    let state = Value::Object(request.state.clone());
    let question = request.question.as_deref().unwrap_or(DEFAULT_QUESTION);

    format!(
        "Explain step {} of the {} algorithm.\n\
         Current state: {}\n\
         User question: {}\n\n\
         Provide a clear, concise explanation suitable for students learning algorithms.",
        request.step, request.algorithm, state, question
    )
}

impl<P: TextProvider + 'static> ExplanationStrategy for ProviderStrategy<P> {
    fn name(&self) -> &str {
        "provider"
    }

    fn matches(&self, key: &str, _request: &ExplanationRequest) -> bool {
        match &self.only {
            Some(keys) => keys.contains(key),
            None => true,
        }
    }

    fn produce(&self, request: &ExplanationRequest) -> Result<ExplanationResponse, StrategyError> {
        let text = self.complete_within_deadline(build_prompt(request))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::EmptyCompletion.into());
        }

        Ok(ExplanationResponse::new(text).with_suggestions(PROVIDER_SUGGESTIONS))
    }
}
