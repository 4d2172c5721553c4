use crate::types::AllowList;
use crate::LoadError;

pub mod ron_format;

/// Trait defining the interface for format-specific allow-list parsers.
///
/// Implementors parse a persisted allow-list document from a particular
/// on-disk format (currently RON; others can be added at this seam).
pub trait FormatParser {
    /// Parses persisted content into an allow-list model.
    ///
    /// # Arguments
    ///
    /// * `content` - A string slice containing the document content
    ///
    /// # Returns
    ///
    /// * `Ok(AllowList)` - Successfully parsed model
    /// * `Err(LoadError)` - Error encountered during parsing
    fn parse(&self, content: &str) -> Result<AllowList, LoadError>;

    /// Returns a descriptive name for this parser format.
    ///
    /// Used for logging and user-facing error messages.
    fn format_name(&self) -> &'static str;
}
