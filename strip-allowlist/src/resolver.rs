//! Shader-name resolution at the log ingestion boundary.

use crate::types::ShaderId;
use std::collections::HashSet;

/// Resolves shader names found in compile-log text to shader identities.
///
/// Stands in for the engine-side lookup that turns a logged shader name into
/// a real shader handle; names that do not resolve cause their records to be
/// skipped during ingestion.
pub trait ShaderResolver {
    /// Resolves `name` to a shader identity, or `None` if the name is
    /// unknown.
    fn resolve(&self, name: &str) -> Option<ShaderId>;
}

/// Resolver backed by an explicit catalog of known shader names.
#[derive(Debug, Clone, Default)]
pub struct ShaderCatalog {
    names: HashSet<String>,
}

impl ShaderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from an iterator of shader names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Registers one shader name.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ShaderResolver for ShaderCatalog {
    fn resolve(&self, name: &str) -> Option<ShaderId> {
        if self.names.contains(name) {
            Some(ShaderId::new(name))
        } else {
            None
        }
    }
}

/// Resolver that accepts every name. Used when no catalog is available and
/// the log is trusted to name real shaders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveAll;

impl ShaderResolver for ResolveAll {
    fn resolve(&self, name: &str) -> Option<ShaderId> {
        Some(ShaderId::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_resolves_only_known_names() {
        let catalog = ShaderCatalog::from_names(["Custom/Water", "Custom/Glass"]);
        assert_eq!(
            catalog.resolve("Custom/Water"),
            Some(ShaderId::new("Custom/Water"))
        );
        assert_eq!(catalog.resolve("Custom/Missing"), None);
    }

    #[test]
    fn resolve_all_accepts_anything() {
        assert_eq!(ResolveAll.resolve("whatever"), Some(ShaderId::new("whatever")));
    }
}
