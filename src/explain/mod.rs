//! Explanation resolution: catalog lookups, pluggable strategies and the
//! templated fallback.

pub mod catalog;
pub mod provider;
pub mod resolver;
pub mod strategy;

pub use catalog::{CatalogEntry, CATALOG};
pub use provider::{ProviderError, ProviderStrategy, TextProvider};
pub use resolver::{normalize_key, ExplanationResolver, ResolverBuilder};
pub use strategy::{default_response, ExplanationStrategy, StrategyError, TableStrategy, DEFAULT_SUGGESTIONS};
