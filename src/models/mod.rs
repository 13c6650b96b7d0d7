//! Data models

pub mod explanation;

pub use explanation::*;
