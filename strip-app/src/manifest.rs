//! The variant manifest: the file-based stand-in for the host build
//! pipeline's per-shader stripping callback. Each batch carries what one
//! callback invocation would: a shader, a pass name and the candidate
//! variants with their active keywords.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strip_core::ShaderVariant;

/// One candidate variant: the keywords active for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestVariant {
    pub keywords: Vec<String>,
}

impl ManifestVariant {
    /// Converts into the core variant type consumed by the filter.
    pub fn to_variant(&self) -> ShaderVariant {
        ShaderVariant::new(self.keywords.iter().cloned())
    }

    /// Builds a manifest record from a retained core variant.
    pub fn from_variant(variant: &ShaderVariant) -> Self {
        Self {
            keywords: variant.keywords().to_vec(),
        }
    }
}

/// One (shader, pass) batch of candidate variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantBatch {
    pub shader: String,
    pub pass: String,
    pub variants: Vec<ManifestVariant>,
}

/// A full manifest: every batch the build pipeline would hand to the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantManifest {
    pub batches: Vec<VariantBatch>,
}

/// Loads a variant manifest from a RON file.
pub fn load_manifest(path: &Path) -> Result<VariantManifest, AppError> {
    let content = fs::read_to_string(path)?;
    ron::from_str(&content)
        .map_err(|e| AppError::Manifest(format!("RON deserialization failed: {e}")))
}

/// Writes a variant manifest to a RON file.
pub fn save_manifest(manifest: &VariantManifest, path: &Path) -> Result<(), AppError> {
    let content = ron::ser::to_string_pretty(manifest, ron::ser::PrettyConfig::default())
        .map_err(|e| AppError::Manifest(format!("RON serialization failed: {e}")))?;
    fs::write(path, content)?;
    Ok(())
}
