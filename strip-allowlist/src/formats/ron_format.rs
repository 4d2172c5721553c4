use crate::formats::FormatParser;
use crate::types::{AllowList, AllowListEntry, KeywordCombination, PassRule, ShaderId};
use crate::LoadError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A parser implementation for allow-lists persisted as RON
/// (Rusty Object Notation).
pub struct RonFormatParser;

impl Default for RonFormatParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RonFormatParser {
    /// Creates a new RON format parser
    pub fn new() -> Self {
        Self
    }
}

// --- Structs mirroring the RON document ---

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RonAllowList {
    /// One entry per shader, in document order.
    shaders: Vec<RonShaderEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RonShaderEntry {
    /// The shader name this entry applies to.
    shader: String,
    /// The pass rules for this shader.
    passes: Vec<RonPassRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RonPassRule {
    /// The pass name, or the `<unnamed>` sentinel.
    pass: String,
    /// The accepted keyword combinations for this pass.
    combinations: Vec<Vec<String>>,
}

impl FormatParser for RonFormatParser {
    fn format_name(&self) -> &'static str {
        "Rusty Object Notation (RON)"
    }

    fn parse(&self, content: &str) -> Result<AllowList, LoadError> {
        let document: RonAllowList = ron::from_str(content)
            .map_err(|e| LoadError::ParseError(format!("RON deserialization failed: {e}")))?;

        // The document is validated against the invariants the filter
        // assumes: shader names and per-shader pass names must be unique.
        let mut allowlist = AllowList::new();
        for shader_entry in document.shaders {
            let shader = ShaderId::new(shader_entry.shader.clone());
            if allowlist.lookup(&shader).is_some() {
                return Err(LoadError::InvalidData(format!(
                    "Duplicate shader name: {}",
                    shader_entry.shader
                )));
            }

            let mut entry = AllowListEntry::new();
            let mut seen_passes = HashSet::new();
            for pass_rule in shader_entry.passes {
                if !seen_passes.insert(pass_rule.pass.clone()) {
                    return Err(LoadError::InvalidData(format!(
                        "Duplicate pass name '{}' for shader '{}'",
                        pass_rule.pass, shader_entry.shader
                    )));
                }
                let mut rule = PassRule::new(pass_rule.pass);
                for combination in pass_rule.combinations {
                    rule.keyword_set.push(KeywordCombination::new(combination));
                }
                entry.push_pass(rule);
            }
            allowlist.insert(shader, entry);
        }
        Ok(allowlist)
    }
}

/// Serializes a model into the RON document format accepted by
/// [`RonFormatParser`]. Shaders are ordered by name so output is stable.
pub fn to_ron_string(allowlist: &AllowList) -> Result<String, LoadError> {
    let mut shaders: Vec<RonShaderEntry> = allowlist
        .iter()
        .map(|(shader, entry)| RonShaderEntry {
            shader: shader.name().to_string(),
            passes: entry
                .passes()
                .iter()
                .map(|rule| RonPassRule {
                    pass: rule.name.clone(),
                    combinations: rule
                        .keyword_set
                        .combinations()
                        .iter()
                        .map(|combination| combination.keywords().to_vec())
                        .collect(),
                })
                .collect(),
        })
        .collect();
    shaders.sort_by(|a, b| a.shader.cmp(&b.shader));

    let document = RonAllowList { shaders };
    ron::ser::to_string_pretty(&document, ron::ser::PrettyConfig::default())
        .map_err(|e| LoadError::ParseError(format!("RON serialization failed: {e}")))
}
