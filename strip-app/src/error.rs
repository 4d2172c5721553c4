use strip_allowlist::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Allow-list Error: {0}")]
    AllowList(#[from] LoadError),

    #[error("Manifest Error: {0}")]
    Manifest(String),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}
