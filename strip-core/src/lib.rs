//! Core variant-stripping logic.
//! Defines the candidate-variant data structure and the pure filtering
//! algorithm that decides which compiled variants survive a build.

/// The filtering algorithm and its whole-call outcomes.
pub mod filter;
/// Candidate-variant data structures.
pub mod variant;

// Re-export core public items

/// The filtering entry point.
pub use crate::filter::filter_variants;
/// Whole-call outcome of one filter invocation.
pub use crate::filter::FilterOutcome;
/// Retained variants plus the whole-call outcome.
pub use crate::filter::FilterResult;
/// One candidate compiled variant.
pub use crate::variant::ShaderVariant;
