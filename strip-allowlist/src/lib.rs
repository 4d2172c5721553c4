//! Allow-list model for shader variant stripping.
//! Defines the hierarchical table (shader -> pass -> keyword combinations),
//! compile-log ingestion and loading of persisted allow-lists.

use thiserror::Error;

pub mod formats;
pub mod loader;
pub mod log_format;
pub mod resolver;
pub mod types;

pub use crate::resolver::{ResolveAll, ShaderCatalog, ShaderResolver};
pub use crate::types::{
    AllowList, AllowListEntry, KeywordCombination, KeywordSet, PassRule, ShaderId, NO_KEYWORDS,
    UNNAMED_PASS,
};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error reading file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse allow-list format (e.g., RON): {0}")]
    ParseError(String),
    #[error("Invalid allow-list data: {0}")]
    InvalidData(String),
    #[error("Unsupported allow-list format: {0}")]
    UnsupportedFormat(String),
}
