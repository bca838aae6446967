#![forbid(unsafe_code)]

//! SASL mechanism contract and the built-in mechanisms.
//!
//! A mechanism has a well-known name, a [`Priority`] used to rank it against
//! the others a peer offers, an applicability predicate over the credentials
//! at hand, and the initial-response / challenge-response exchange itself.

mod anonymous;
mod external;
mod plain;

pub use anonymous::Anonymous;
pub use external::External;
pub use plain::Plain;

use std::{cmp::Ordering, fmt};
use zeroize::Zeroizing;

use crate::SaslResult;

/// Relative priority used to rank mechanisms; the level of security
/// generally defines the preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Lowest,
    Lower,
    Low,
    Medium,
    High,
    Higher,
    Highest,
}

impl Priority {
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Identity of the local end of the transport (e.g. the TLS client certificate subject).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalPrincipal {
    name: String,
}

impl LocalPrincipal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Username/password slots carried by a mechanism instance.
#[derive(Clone, Default)]
pub struct Credentials {
    username: Option<String>,
    password: Option<Zeroizing<String>>,
}

impl Credentials {
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.as_str())
    }

    pub fn set_username(&mut self, username: Option<&str>) {
        self.username = username.map(str::to_owned);
    }

    pub fn set_password(&mut self, password: Option<&str>) {
        self.password = password.map(|p| Zeroizing::new(p.to_owned()));
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// A SASL authentication strategy.
pub trait Mechanism: fmt::Debug + Send {
    /// Well-known name as it appears on the wire, e.g. `PLAIN`.
    fn name(&self) -> &'static str;

    fn priority(&self) -> Priority;

    /// Whether the mechanism has enough material to proceed.
    fn is_applicable(&self, username: Option<&str>, password: Option<&str>, local_principal: Option<&LocalPrincipal>) -> bool;

    /// Payload of the SASL-INIT frame; `None` when the mechanism sends none.
    fn initial_response(&mut self) -> SaslResult<Option<Vec<u8>>>;

    /// Answer a challenge from the peer.
    fn challenge_response(&mut self, challenge: &[u8]) -> SaslResult<Vec<u8>>;

    fn credentials(&self) -> &Credentials;

    fn credentials_mut(&mut self) -> &mut Credentials;

    fn username(&self) -> Option<&str> {
        self.credentials().username()
    }

    fn set_username(&mut self, username: Option<&str>) {
        self.credentials_mut().set_username(username);
    }

    fn password(&self) -> Option<&str> {
        self.credentials().password()
    }

    fn set_password(&mut self, password: Option<&str>) {
        self.credentials_mut().set_password(password);
    }

    /// Mechanisms order by priority only.
    fn cmp_priority(&self, other: &dyn Mechanism) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl fmt::Display for dyn Mechanism + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SASL-{}", self.name())
    }
}
