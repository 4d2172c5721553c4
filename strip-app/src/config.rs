use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Global log level selectable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum GlobalLogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Configuration for the variant-strip tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Path to a persisted allow-list (RON).
    #[arg(long, value_name = "FILE", conflicts_with = "compile_log")]
    pub allowlist: Option<PathBuf>,

    /// Path to a shader-compiler log to build the allow-list from.
    #[arg(long, value_name = "FILE", required_unless_present = "allowlist")]
    pub compile_log: Option<PathBuf>,

    /// Optional catalog of known shader names (one per line). Log records
    /// naming shaders outside the catalog are skipped.
    #[arg(long, value_name = "FILE")]
    pub shader_catalog: Option<PathBuf>,

    /// Path to the variant manifest to filter (RON).
    #[arg(short, long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Path to write the retained manifest to.
    #[arg(short, long, value_name = "FILE", default_value = "retained.ron")]
    pub output: PathBuf,

    /// Optional: save the populated allow-list to a RON file.
    #[arg(long, value_name = "FILE")]
    pub save_allowlist: Option<PathBuf>,

    /// Optional: write the per-batch stripping report as a CSV file.
    #[arg(long, value_name = "CSV_FILE")]
    pub report_csv: Option<PathBuf>,

    /// Disable stripping entirely; every candidate passes through.
    #[arg(long, default_value_t = false)]
    pub disabled: bool,

    /// Optional settings file (TOML), layered under environment overrides.
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Global log level. RUST_LOG, when set, takes precedence per module.
    #[arg(long, value_enum, default_value_t = GlobalLogLevel::Info)]
    pub global_log_level: GlobalLogLevel,
}
