#![forbid(unsafe_code)]

//! Common error type for Proton crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtonError {
    /// I/O related failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsing failures.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but is not usable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenient alias for results throughout Proton crates.
pub type ProtonResult<T> = Result<T, ProtonError>;
