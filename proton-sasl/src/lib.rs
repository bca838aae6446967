#![forbid(unsafe_code)]

//! Proton SASL layer.
//!
//! This crate provides:
//! 1. The [`Mechanism`] contract plus the built-in `PLAIN`, `ANONYMOUS` and
//!    `EXTERNAL` mechanisms (see [`mechanism`]).
//! 2. A name→factory [`MechanismRegistry`].
//! 3. [`find_matching_mechanism`], which picks the single best mechanism out
//!    of the list a peer offers.
//! 4. [`SaslClientAuthenticator`], a synchronous client-side handshake driver.

pub mod authenticator;
pub mod error;
pub mod finder;
pub mod mechanism;
pub mod registry;

pub use authenticator::{SaslClientAuthenticator, SaslInit, SaslOutcome, SaslState};
pub use error::{SaslError, SaslResult};
pub use finder::{find_matching_mechanism, find_matching_mechanism_in};
pub use mechanism::{Credentials, LocalPrincipal, Mechanism, Priority};
pub use registry::{default_registry, factory, MechanismFactory, MechanismRegistry};
