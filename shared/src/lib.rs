//! Shared types, classifiers and models for the AETHER Maharashtra monitor
//!
//! This crate holds the pure risk core: the district registry, the rule-based
//! classifiers and the advisory generator. It is used by the backend and,
//! via WASM, by the dashboard.

pub mod models;
pub mod registry;
pub mod season;
pub mod types;
pub mod validation;

pub use models::*;
pub use registry::*;
pub use season::*;
pub use types::*;
pub use validation::*;
