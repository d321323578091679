use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Ts2DateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid record on line {line}: {message}")]
    Record { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Ts2DateError>;
