#![forbid(unsafe_code)]

//! Proton configuration handling. Parses a TOML file into a strongly-typed structure consumed by
//! the SASL layer when it authenticates a connection.

use serde::Deserialize;
use std::{collections::HashSet, fmt, fs, path::Path};
use tracing::debug;

use crate::{ProtonError, ProtonResult};

/// Primary configuration structure shared across Proton components.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProtonConfig {
    /// Logging verbosity (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,

    /// Client-side SASL settings.
    pub sasl: SaslConfig,
}

impl Default for ProtonConfig {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            sasl: SaslConfig::default(),
        }
    }
}

/// Credentials and mechanism policy used during the SASL handshake.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SaslConfig {
    pub username: Option<String>,
    pub password: Option<String>,

    /// Hostname sent in the SASL-INIT frame, if any.
    pub hostname: Option<String>,

    /// Restriction set. When non-empty only these mechanisms may be selected.
    pub mechanisms: Vec<String>,
}

// Password stays out of logs.
impl fmt::Debug for SaslConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaslConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("hostname", &self.hostname)
            .field("mechanisms", &self.mechanisms)
            .finish()
    }
}

impl SaslConfig {
    /// Mechanism restriction set; empty means every offered mechanism is eligible.
    pub fn restrictions(&self) -> HashSet<String> {
        self.mechanisms.iter().cloned().collect()
    }

    /// Reject configurations the handshake could never use.
    pub fn validate(&self) -> ProtonResult<()> {
        if self.password.is_some() && self.username.is_none() {
            return Err(ProtonError::InvalidConfig("password given without username".into()));
        }
        if let Some(bad) = self.mechanisms.iter().find(|m| m.trim().is_empty()) {
            return Err(ProtonError::InvalidConfig(format!("blank mechanism name {bad:?}")));
        }
        Ok(())
    }
}

impl ProtonConfig {
    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml_str(data: &str) -> ProtonResult<Self> {
        let cfg = toml::from_str::<ProtonConfig>(data)?;
        cfg.sasl.validate()?;
        Ok(cfg)
    }

    /// Load a configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ProtonResult<Self> {
        let data = fs::read_to_string(&path)?;
        let cfg = Self::from_toml_str(&data)?;
        debug!(path = %path.as_ref().display(), "loaded proton config");
        Ok(cfg)
    }

    /// Load config alias version
    pub fn load<P: AsRef<Path>>(path: P) -> ProtonResult<Self> {
        Self::from_file(path)
    }
}
