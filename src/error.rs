//! Error types for rpc-allocator

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Endpoint pool errors
    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Endpoint pool errors
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Invalid {transport} endpoint (wrong scheme): {url}")]
    InvalidScheme { transport: &'static str, url: String },

    #[error("Empty endpoint URL")]
    EmptyUrl,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    InvalidFile(String),

    #[error("Invalid RPC document: {0}")]
    InvalidDocument(String),

    #[error("Config file parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
