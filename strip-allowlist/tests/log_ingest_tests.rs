use proptest::prelude::*;
use strip_allowlist::log_format::{ingest_log, ingest_log_file, IngestOptions};
use strip_allowlist::{AllowList, LoadError, ResolveAll, ShaderId};

#[test]
fn ingest_log_file_reads_from_disk() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("compile.log");
    std::fs::write(
        &path,
        "Compiled shader: Custom/Water, pass: FORWARD, stage: fragment, keywords FOG_EXP2\n",
    )?;

    let mut allowlist = AllowList::new();
    let stats = ingest_log_file(&mut allowlist, &path, &ResolveAll, IngestOptions::default())?;
    assert_eq!(stats.ingested, 1);
    assert!(allowlist.lookup(&ShaderId::new("Custom/Water")).is_some());
    Ok(())
}

#[test]
fn ingest_log_file_missing_file_is_io_error() {
    let mut allowlist = AllowList::new();
    let result = ingest_log_file(
        &mut allowlist,
        std::path::Path::new("no_such_compile.log"),
        &ResolveAll,
        IngestOptions::default(),
    );
    match result {
        Err(LoadError::Io(_)) => { /* Expected */ }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn windows_line_endings_are_accepted() {
    let text = "Compiled shader: S, pass: P, stage: fragment, keywords A\r\n";
    let mut allowlist = AllowList::new();
    let stats = ingest_log(&mut allowlist, text, &ResolveAll, IngestOptions::default());
    assert_eq!(stats.ingested, 1);
    let rule = allowlist
        .lookup(&ShaderId::new("S"))
        .unwrap()
        .pass_rule("P")
        .unwrap();
    assert_eq!(rule.keyword_set.combinations()[0].keywords(), ["A"]);
}

proptest! {
    // Ingestion must degrade record-by-record, never panic, whatever the text.
    #[test]
    fn arbitrary_text_never_panics(lines in proptest::collection::vec("[^\n]{0,60}", 0..12)) {
        let text = lines.join("\n");
        let mut allowlist = AllowList::new();
        let stats = ingest_log(&mut allowlist, &text, &ResolveAll, IngestOptions::default());
        let line_count = text.lines().count();
        prop_assert!(stats.ingested + stats.skipped + stats.ignored <= line_count);
    }

    #[test]
    fn well_formed_records_always_ingest(
        shader in "[A-Za-z][A-Za-z0-9/_]{0,16}",
        pass in "[A-Z][A-Z_]{0,12}",
        keywords in proptest::collection::vec("[A-Z][A-Z0-9_]{0,10}", 1..4),
    ) {
        let line = format!(
            "Compiled shader: {shader}, pass: {pass}, stage: fragment, keywords {}",
            keywords.join(" ")
        );
        let mut allowlist = AllowList::new();
        let stats = ingest_log(&mut allowlist, &line, &ResolveAll, IngestOptions::default());
        prop_assert_eq!(stats.ingested, 1);
        let entry = allowlist.lookup(&ShaderId::new(shader.as_str())).unwrap();
        let rule = entry.pass_rule(&pass).unwrap();
        prop_assert_eq!(rule.keyword_set.combinations()[0].keywords(), keywords.as_slice());
    }
}
