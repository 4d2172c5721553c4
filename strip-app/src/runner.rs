//! Application orchestration: owns the single allow-list model for the run
//! and drives the filter over every manifest batch.
//!
//! The model is built once, before any filtering starts, and is read-only
//! from then on; only one model is consulted per run.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::logging;
use crate::manifest::{self, ManifestVariant, VariantBatch, VariantManifest};
use crate::report::{self, BatchReport, StripReport};
use crate::settings::{self, StripSettings};
use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::Path;
use strip_allowlist::formats::ron_format;
use strip_allowlist::log_format::{self, IngestOptions};
use strip_allowlist::{loader, AllowList, ResolveAll, ShaderCatalog, ShaderId};
use strip_core::filter_variants;

/// Entry point for the variant-strip tool.
pub fn run() -> Result<()> {
    let config = AppConfig::parse();
    logging::init_logger(&config);

    log::info!("Variant Strip starting");
    log::debug!("Loaded Config: {:?}", config);

    let strip_settings = settings::load_settings(config.settings.as_deref())?;
    log::debug!("Loaded Settings: {:?}", strip_settings);
    let enabled = strip_settings.enabled && !config.disabled;
    if !enabled {
        log::warn!("Stripping is disabled; all variants will pass through");
    }

    let allowlist = build_allowlist(&config, &strip_settings)?;
    log::info!("Allow-list ready: {} shaders", allowlist.len());

    if let Some(path) = &config.save_allowlist {
        let content = ron_format::to_ron_string(&allowlist).map_err(AppError::from)?;
        fs::write(path, content).map_err(AppError::Io)?;
        log::info!("Saved allow-list to {:?}", path);
    }

    let input = manifest::load_manifest(&config.manifest)?;
    log::info!(
        "Manifest loaded: {} batches from {:?}",
        input.batches.len(),
        config.manifest
    );

    let mut retained_manifest = VariantManifest::default();
    let mut strip_report = StripReport::default();

    for batch in &input.batches {
        let shader = ShaderId::new(batch.shader.clone());
        let candidates: Vec<_> = batch
            .variants
            .iter()
            .map(ManifestVariant::to_variant)
            .collect();
        let result = filter_variants(&allowlist, enabled, &shader, &batch.pass, &candidates);

        strip_report.push(BatchReport {
            shader: batch.shader.clone(),
            pass: batch.pass.clone(),
            outcome: result.outcome,
            input_count: candidates.len(),
            retained_count: result.retained.len(),
        });

        // The host pipeline would replace the batch contents in place; here
        // the retained subset goes into the output manifest instead.
        retained_manifest.batches.push(VariantBatch {
            shader: batch.shader.clone(),
            pass: batch.pass.clone(),
            variants: result
                .retained
                .iter()
                .map(ManifestVariant::from_variant)
                .collect(),
        });
    }

    manifest::save_manifest(&retained_manifest, &config.output)?;
    log::info!("Retained manifest written to {:?}", config.output);

    if let Some(path) = &config.report_csv {
        report::write_report_csv(&strip_report, path)?;
        log::info!("Report written to {:?}", path);
    }

    report::print_summary(&strip_report);
    log::info!("Variant stripping completed successfully.");
    Ok(())
}

/// Builds the run's single allow-list model, either loading a persisted one
/// or ingesting a shader-compiler log.
fn build_allowlist(
    config: &AppConfig,
    strip_settings: &StripSettings,
) -> Result<AllowList, AppError> {
    if let Some(path) = &config.allowlist {
        log::info!("Loading allow-list from {:?}", path);
        return Ok(loader::load_from_file(path)?);
    }

    if let Some(path) = &config.compile_log {
        log::info!("Building allow-list from compile log {:?}", path);
        let mut allowlist = AllowList::new();
        let options = IngestOptions {
            dedupe_combinations: strip_settings.dedupe_combinations,
        };
        let stats = match &config.shader_catalog {
            Some(catalog_path) => {
                let catalog = load_catalog(catalog_path)?;
                log::info!("Shader catalog loaded: {} names", catalog.len());
                log_format::ingest_log_file(&mut allowlist, path, &catalog, options)?
            }
            None => log_format::ingest_log_file(&mut allowlist, path, &ResolveAll, options)?,
        };
        log::info!(
            "Compile log ingested: {} records, {} skipped, {} non-fragment",
            stats.ingested,
            stats.skipped,
            stats.ignored
        );
        return Ok(allowlist);
    }

    // clap enforces one of the two sources; this is the non-CLI path.
    Err(AppError::Config(
        "either an allow-list file or a compile log must be given".to_string(),
    ))
}

/// Reads a newline-separated shader-name catalog.
fn load_catalog(path: &Path) -> Result<ShaderCatalog, AppError> {
    let content = fs::read_to_string(path)?;
    Ok(ShaderCatalog::from_names(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    ))
}
