//! Logging setup for the application.

use crate::config::{AppConfig, GlobalLogLevel};
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the logger based on the application configuration.
///
/// The global level comes from `--global-log-level`; if RUST_LOG is set it
/// is respected for per-module overrides.
pub fn init_logger(config: &AppConfig) {
    // Convert GlobalLogLevel to log::LevelFilter
    let global_level = match config.global_log_level {
        GlobalLogLevel::Trace => LevelFilter::Trace,
        GlobalLogLevel::Debug => LevelFilter::Debug,
        GlobalLogLevel::Info => LevelFilter::Info,
        GlobalLogLevel::Warn => LevelFilter::Warn,
        GlobalLogLevel::Error => LevelFilter::Error,
    };

    // Start with the environment configuration, but allow for override
    let env = Env::default().filter_or("RUST_LOG", "info");

    let mut builder = Builder::from_env(env);
    builder.filter_level(global_level);
    builder.init();

    log::debug!(
        "Logger initialized with global log level: {:?}",
        config.global_log_level
    );
}
