use thiserror::Error;

use crate::SaslOutcome;

/// Result type for SASL operations
pub type SaslResult<T> = Result<T, SaslError>;

/// SASL error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaslError {
    /// A mechanism could not compute a response.
    #[error("SASL-{mechanism}: {reason}")]
    Mechanism { mechanism: &'static str, reason: String },

    /// None of the offered mechanisms is supported, allowed and applicable.
    #[error("No matching SASL mechanism among {offered:?}")]
    NoMatchingMechanism { offered: Vec<String> },

    /// The peer reported a non-ok outcome.
    #[error("Authentication failed: {0:?}")]
    Authentication(SaslOutcome),

    #[error("Mechanism {0} already registered")]
    DuplicateMechanism(String),

    #[error("Unexpected SASL event: {0}")]
    UnexpectedState(&'static str),
}
