use crate::formats::ron_format::RonFormatParser;
use crate::formats::FormatParser;
use crate::types::AllowList;
use crate::LoadError;
use std::fs;
use std::path::Path;

/// Loads a persisted allow-list from a file.
///
/// The format is chosen by file extension (currently only `.ron`).
///
/// # Arguments
///
/// * `path` - The path to the persisted allow-list document.
///
/// # Returns
///
/// A `Result` containing the loaded `AllowList` on success, or a
/// `LoadError` on failure.
pub fn load_from_file(path: &Path) -> Result<AllowList, LoadError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parser: &dyn FormatParser = match extension {
        "ron" => &RonFormatParser,
        other => {
            return Err(LoadError::UnsupportedFormat(format!(
                "no parser registered for extension '{other}'"
            )))
        }
    };

    let content = fs::read_to_string(path)?;
    log::debug!("Parsing allow-list at {path:?} as {}", parser.format_name());
    parser.parse(&content)
}
