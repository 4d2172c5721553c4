//! Ingestion of shader-compiler log text into an [`AllowList`].
//!
//! Each log record is one line of `", "`-separated fields. Keyed fields are
//! `key: value` pairs (`Compiled shader`, `pass`, `stage`); the single bare
//! field is either the literal `<no keywords>` sentinel or a space-separated
//! list whose leading label token is discarded. Only records whose stage is
//! `fragment` contribute to the model; fragment keyword sets are taken as
//! representative of whole-variant keyword sets.

use crate::resolver::ShaderResolver;
use crate::types::{AllowList, KeywordCombination, NO_KEYWORDS};
use crate::LoadError;
use std::fs;
use std::path::Path;

/// Options controlling log ingestion.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Drop exact-duplicate keyword combinations instead of accumulating
    /// them. Matching behavior is unchanged either way.
    pub dedupe_combinations: bool,
}

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Fragment-stage records folded into the model.
    pub ingested: usize,
    /// Records skipped as malformed or naming an unresolved shader.
    pub skipped: usize,
    /// Records ignored because their stage is not `fragment`.
    pub ignored: usize,
}

/// Fields of a single log record, as parsed. Repeated fields keep the last
/// occurrence.
#[derive(Debug, Default)]
struct LogRecord<'a> {
    shader_name: Option<&'a str>,
    pass_name: Option<&'a str>,
    stage_name: Option<&'a str>,
    keywords: Option<Vec<String>>,
}

/// Splits one line into its fields. Returns `None` for a malformed record
/// (a keyed field with the wrong segment count).
fn parse_record(line: &str) -> Option<LogRecord<'_>> {
    let mut record = LogRecord::default();
    for section in line.split(", ") {
        let parts: Vec<&str> = section.split(": ").collect();
        match parts.len() {
            2 => match parts[0] {
                "Compiled shader" => record.shader_name = Some(parts[1]),
                "pass" => record.pass_name = Some(parts[1]),
                "stage" => record.stage_name = Some(parts[1]),
                // Unknown keys carry engine details we do not consume.
                _ => {}
            },
            1 => {
                if parts[0].contains(NO_KEYWORDS) {
                    record.keywords = Some(vec![NO_KEYWORDS.to_string()]);
                } else {
                    let mut tokens = parts[0].split(' ');
                    // Leading label token ("keywords").
                    tokens.next();
                    record.keywords = Some(
                        tokens
                            .filter(|token| !token.is_empty())
                            .map(str::to_string)
                            .collect(),
                    );
                }
            }
            _ => return None,
        }
    }
    Some(record)
}

/// Folds compile-log text into `allowlist`, one keyword combination per
/// fragment-stage record.
///
/// Per-record failures are never fatal: malformed records and unresolved
/// shader names are skipped with a warning and counted in the returned
/// stats. Text with no valid record at all is not an error.
pub fn ingest_log<R: ShaderResolver>(
    allowlist: &mut AllowList,
    text: &str,
    resolver: &R,
    options: IngestOptions,
) -> IngestStats {
    let mut stats = IngestStats::default();

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let record = match parse_record(line) {
            Some(record) => record,
            None => {
                log::warn!("Skipping malformed log record: {line}");
                stats.skipped += 1;
                continue;
            }
        };

        if record.stage_name != Some("fragment") {
            stats.ignored += 1;
            continue;
        }

        let shader = match record.shader_name.and_then(|name| resolver.resolve(name)) {
            Some(shader) => shader,
            None => {
                log::warn!(
                    "Skipping record with missing or unresolved shader name: {line}"
                );
                stats.skipped += 1;
                continue;
            }
        };

        let (pass_name, keywords) = match (record.pass_name, record.keywords) {
            (Some(pass_name), Some(keywords)) => (pass_name, keywords),
            _ => {
                log::warn!("Skipping record without pass or keyword field: {line}");
                stats.skipped += 1;
                continue;
            }
        };

        let rule = allowlist.entry_mut(shader).pass_rule_mut(pass_name);
        let combination = KeywordCombination::new(keywords);
        if options.dedupe_combinations {
            rule.keyword_set.push_dedup(combination);
        } else {
            rule.keyword_set.push(combination);
        }
        stats.ingested += 1;
    }

    log::debug!(
        "Log ingestion finished: {} ingested, {} skipped, {} ignored",
        stats.ingested,
        stats.skipped,
        stats.ignored
    );
    stats
}

/// Reads a compile log from disk and folds it into `allowlist`.
pub fn ingest_log_file<R: ShaderResolver>(
    allowlist: &mut AllowList,
    path: &Path,
    resolver: &R,
    options: IngestOptions,
) -> Result<IngestStats, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(ingest_log(allowlist, &text, resolver, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ResolveAll, ShaderCatalog};
    use crate::types::ShaderId;

    const SAMPLE_LOG: &str = "\
Compiled shader: Custom/Water, pass: FORWARD, stage: fragment, keywords FOG_EXP2 SHADOWS_SOFT
Compiled shader: Custom/Water, pass: FORWARD, stage: fragment, <no keywords>
Compiled shader: Custom/Water, pass: SHADOWCASTER, stage: fragment, keywords SHADOWS_DEPTH
Compiled shader: Custom/Water, pass: FORWARD, stage: vertex, keywords FOG_EXP2 SHADOWS_SOFT
Compiled shader: Custom/Glass, pass: <unnamed>, stage: fragment, <no keywords>
";

    #[test]
    fn fragment_records_build_the_hierarchy() {
        let mut allowlist = AllowList::new();
        let stats = ingest_log(&mut allowlist, SAMPLE_LOG, &ResolveAll, IngestOptions::default());

        assert_eq!(stats.ingested, 4);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.ignored, 1); // the vertex-stage record

        let water = allowlist.lookup(&ShaderId::new("Custom/Water")).unwrap();
        assert_eq!(water.passes().len(), 2);
        let forward = water.pass_rule("FORWARD").unwrap();
        assert_eq!(forward.keyword_set.len(), 2);
        assert!(forward.keyword_set.combinations()[0].contains("FOG_EXP2"));
        assert!(forward.keyword_set.combinations()[1].allows_empty());

        let glass = allowlist.lookup(&ShaderId::new("Custom/Glass")).unwrap();
        assert!(glass.has_unnamed_pass());
    }

    #[test]
    fn label_token_is_discarded_from_keyword_field() {
        let mut allowlist = AllowList::new();
        ingest_log(
            &mut allowlist,
            "Compiled shader: S, pass: P, stage: fragment, keywords A B",
            &ResolveAll,
            IngestOptions::default(),
        );
        let rule = allowlist
            .lookup(&ShaderId::new("S"))
            .unwrap()
            .pass_rule("P")
            .unwrap();
        let combination = &rule.keyword_set.combinations()[0];
        assert_eq!(combination.keywords(), ["A", "B"]);
        assert!(!combination.contains("keywords"));
    }

    #[test]
    fn unresolved_shader_names_are_skipped() {
        let catalog = ShaderCatalog::from_names(["Custom/Water"]);
        let mut allowlist = AllowList::new();
        let stats = ingest_log(&mut allowlist, SAMPLE_LOG, &catalog, IngestOptions::default());

        assert_eq!(stats.ingested, 3);
        assert_eq!(stats.skipped, 1); // Custom/Glass is not in the catalog
        assert!(allowlist.lookup(&ShaderId::new("Custom/Glass")).is_none());
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let text = "\
Compiled shader: S, pass: P: extra, stage: fragment, keywords A
Compiled shader: S, pass: P, stage: fragment, keywords A
";
        let mut allowlist = AllowList::new();
        let stats = ingest_log(&mut allowlist, text, &ResolveAll, IngestOptions::default());
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.ingested, 1);
        assert_eq!(allowlist.len(), 1);
    }

    #[test]
    fn fragment_record_without_keyword_field_is_skipped() {
        let mut allowlist = AllowList::new();
        let stats = ingest_log(
            &mut allowlist,
            "Compiled shader: S, pass: P, stage: fragment",
            &ResolveAll,
            IngestOptions::default(),
        );
        assert_eq!(stats.skipped, 1);
        assert!(allowlist.is_empty());
    }

    #[test]
    fn duplicate_combinations_accumulate_by_default() {
        let text = "\
Compiled shader: S, pass: P, stage: fragment, keywords A
Compiled shader: S, pass: P, stage: fragment, keywords A
";
        let mut allowlist = AllowList::new();
        ingest_log(&mut allowlist, text, &ResolveAll, IngestOptions::default());
        let rule = allowlist
            .lookup(&ShaderId::new("S"))
            .unwrap()
            .pass_rule("P")
            .unwrap();
        assert_eq!(rule.keyword_set.len(), 2);
    }

    #[test]
    fn dedupe_option_collapses_duplicates() {
        let text = "\
Compiled shader: S, pass: P, stage: fragment, keywords A
Compiled shader: S, pass: P, stage: fragment, keywords A
";
        let mut allowlist = AllowList::new();
        let options = IngestOptions {
            dedupe_combinations: true,
        };
        ingest_log(&mut allowlist, text, &ResolveAll, options);
        let rule = allowlist
            .lookup(&ShaderId::new("S"))
            .unwrap()
            .pass_rule("P")
            .unwrap();
        assert_eq!(rule.keyword_set.len(), 1);
    }

    #[test]
    fn empty_text_yields_empty_model_without_error() {
        let mut allowlist = AllowList::new();
        let stats = ingest_log(&mut allowlist, "", &ResolveAll, IngestOptions::default());
        assert_eq!(stats, IngestStats::default());
        assert!(allowlist.is_empty());
    }
}
