#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::{ProtonConfig, SaslConfig};
pub use error::{ProtonError, ProtonResult};
