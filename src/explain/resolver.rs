//! Explanation resolver
//!
//! Walks the registered strategies in registration order; the first one that
//! claims the request and produces a usable response wins. Anything else
//! (no match, a strategy fault, a blank answer) ends in the templated default,
//! so `resolve` always returns a response.

use std::fmt;

use crate::models::{ExplanationRequest, ExplanationResponse};

use super::catalog::CATALOG;
use super::strategy::{default_response, ExplanationStrategy, StrategyError, TableStrategy};

/// Lookup key for an algorithm name: trimmed, case-folded
pub fn normalize_key(algorithm: &str) -> String {
    algorithm.trim().to_lowercase()
}

pub struct ExplanationResolver {
    strategies: Vec<Box<dyn ExplanationStrategy>>,
}

impl fmt::Debug for ExplanationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplanationResolver")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

impl ExplanationResolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Resolver with one table strategy per catalog entry, in catalog order
    pub fn standard() -> Self {
        Self::builder().with_catalog().build()
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn resolve(&self, request: &ExplanationRequest) -> ExplanationResponse {
        let key = normalize_key(&request.algorithm);

        for strategy in &self.strategies {
            if !strategy.matches(&key, request) {
                continue;
            }

            match strategy.produce(request) {
                Ok(response) if response.is_usable() => {
                    tracing::debug!(
                        "Resolved {} step {} via '{}'",
                        request.algorithm,
                        request.step,
                        strategy.name()
                    );
                    return response;
                }
                Ok(_) => {
                    tracing::warn!(
                        "Strategy '{}' declined {}: {}",
                        strategy.name(),
                        key,
                        StrategyError::EmptyExplanation
                    );
                }
                Err(e) => {
                    tracing::warn!("Strategy '{}' declined {}: {}", strategy.name(), key, e);
                }
            }
        }

        tracing::debug!("No strategy for '{}', using default template", request.algorithm);
        default_response(request)
    }
}

#[derive(Default)]
pub struct ResolverBuilder {
    strategies: Vec<Box<dyn ExplanationStrategy>>,
}

impl ResolverBuilder {
    /// Append a strategy; earlier registrations take precedence
    pub fn register<S>(mut self, strategy: S) -> Self
    where
        S: ExplanationStrategy + 'static,
    {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn with_catalog(mut self) -> Self {
        for entry in CATALOG {
            self = self.register(TableStrategy::new(entry));
        }
        self
    }

    pub fn build(self) -> ExplanationResolver {
        ExplanationResolver {
            strategies: self.strategies,
        }
    }
}
