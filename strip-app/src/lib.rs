//! Variant Strip Application Library
//!
//! This crate contains the configuration, orchestration and reporting
//! for the variant-strip tool.

pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod runner;
pub mod settings;

// Optionally re-export key types if needed elsewhere
pub use config::AppConfig;
pub use error::AppError;

// Re-export the entry point so it can be called from the root crate
pub use crate::runner::run;
