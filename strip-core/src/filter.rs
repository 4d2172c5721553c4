//! The variant filter: given a shader, a pass name and a batch of candidate
//! variants, decides which candidates survive stripping by consulting the
//! allow-list model.
//!
//! Each invocation is a pure function of (enabled flag, model snapshot,
//! inputs); nothing persists across calls and the model is never mutated.

use crate::variant::ShaderVariant;
use std::fmt;
use strip_allowlist::{AllowList, KeywordCombination, KeywordSet, ShaderId};

/// Whole-call outcome of one filter invocation, for logging and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Filtering is globally disabled; every candidate passed through.
    Disabled,
    /// The shader has no allow-list entry; every candidate was discarded.
    UnknownShader,
    /// The shader's entry carries the `<unnamed>` pass sentinel; its passes
    /// cannot be told apart, so every candidate was kept.
    UnnamedPass,
    /// The entry has no rule for the requested pass; every candidate was
    /// discarded.
    UnknownPass,
    /// Candidates were matched against the pass's keyword combinations.
    Matched,
}

impl fmt::Display for FilterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Disabled => "disabled, pass-through",
            Self::UnknownShader => "unknown shader, discard-all",
            Self::UnnamedPass => "unnamed pass, keep-all",
            Self::UnknownPass => "unknown pass, discard-all",
            Self::Matched => "matched",
        };
        write!(f, "{text}")
    }
}

/// Result of one filter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// The surviving variants, in input order.
    pub retained: Vec<ShaderVariant>,
    /// How the whole call was decided.
    pub outcome: FilterOutcome,
}

impl FilterResult {
    fn new(retained: Vec<ShaderVariant>, outcome: FilterOutcome) -> Self {
        Self { retained, outcome }
    }
}

/// Filters `variants` for one (shader, pass) batch against the allow-list.
///
/// Decision order:
/// 1. `enabled == false`: all candidates pass through unchanged.
/// 2. `shader` not in the model: all candidates are discarded.
/// 3. The entry carries the `<unnamed>` pass sentinel: all candidates are
///    kept, since stripping cannot distinguish this shader's passes.
/// 4. No rule named `pass_name`: all candidates are discarded.
/// 5. Otherwise each candidate is kept iff its active keyword set matches at
///    least one accepted combination (see [`combination_matches`] semantics).
///
/// The filter is stable (surviving variants keep their input order), never
/// errors and never mutates the model.
pub fn filter_variants(
    allowlist: &AllowList,
    enabled: bool,
    shader: &ShaderId,
    pass_name: &str,
    variants: &[ShaderVariant],
) -> FilterResult {
    if !enabled {
        return FilterResult::new(variants.to_vec(), FilterOutcome::Disabled);
    }

    let entry = match allowlist.lookup(shader) {
        Some(entry) => entry,
        None => {
            log::debug!(
                "Shader '{shader}' has no allow-list entry, discarding {} variants",
                variants.len()
            );
            return FilterResult::new(Vec::new(), FilterOutcome::UnknownShader);
        }
    };

    if entry.has_unnamed_pass() {
        log::debug!("Shader '{shader}' has unnamed passes, keeping all variants");
        return FilterResult::new(variants.to_vec(), FilterOutcome::UnnamedPass);
    }

    let rule = match entry.pass_rule(pass_name) {
        Some(rule) => rule,
        None => {
            log::debug!(
                "Shader '{shader}' has no rule for pass '{pass_name}', discarding {} variants",
                variants.len()
            );
            return FilterResult::new(Vec::new(), FilterOutcome::UnknownPass);
        }
    };

    let retained: Vec<ShaderVariant> = variants
        .iter()
        .filter(|variant| variant_matches(&rule.keyword_set, variant))
        .cloned()
        .collect();
    log::debug!(
        "Shader '{shader}' pass '{pass_name}': {} total - {} retained",
        variants.len(),
        retained.len()
    );
    FilterResult::new(retained, FilterOutcome::Matched)
}

/// Whether the variant's active keyword set matches at least one accepted
/// combination.
fn variant_matches(keyword_set: &KeywordSet, variant: &ShaderVariant) -> bool {
    keyword_set
        .combinations()
        .iter()
        .any(|combination| combination_matches(combination, variant.keywords()))
}

/// Matches one accepted combination against the active keyword names.
///
/// An empty active set matches a combination carrying the `<no keywords>`
/// sentinel. A non-empty active set matches when every active keyword is
/// present in the combination; keywords present in the combination but not
/// active do not invalidate the match.
fn combination_matches(combination: &KeywordCombination, active: &[String]) -> bool {
    if active.is_empty() {
        return combination.allows_empty();
    }
    let found = active
        .iter()
        .filter(|keyword| combination.contains(keyword.as_str()))
        .count();
    found == active.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combination(keywords: &[&str]) -> KeywordCombination {
        KeywordCombination::new(keywords.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn empty_active_set_needs_the_sentinel() {
        assert!(combination_matches(&KeywordCombination::no_keywords(), &[]));
        assert!(!combination_matches(&combination(&["FOG_EXP2"]), &[]));
    }

    #[test]
    fn every_active_keyword_must_be_present() {
        let stored = combination(&["A", "B", "C"]);
        assert!(combination_matches(&stored, &["A".to_string(), "B".to_string()]));
        assert!(!combination_matches(&stored, &["A".to_string(), "D".to_string()]));
    }

    #[test]
    fn extra_stored_keywords_do_not_invalidate() {
        let stored = combination(&["A", "B", "C"]);
        assert!(combination_matches(&stored, &["C".to_string()]));
    }
}
