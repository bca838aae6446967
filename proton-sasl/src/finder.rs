#![forbid(unsafe_code)]

//! Best-mechanism selection for the client side of the SASL handshake.
//!
//! Stateless: every call builds fresh mechanism instances, so independent
//! connections may negotiate concurrently.

use std::collections::HashSet;
use tracing::trace;

use crate::mechanism::{LocalPrincipal, Mechanism};
use crate::registry::{default_registry, MechanismRegistry};

/// [`find_matching_mechanism_in`] against the [`default_registry`].
pub fn find_matching_mechanism<S: AsRef<str>>(
    username: Option<&str>,
    password: Option<&str>,
    local_principal: Option<&LocalPrincipal>,
    restrictions: &HashSet<String>,
    remote_mechanisms: &[S],
) -> Option<Box<dyn Mechanism>> {
    find_matching_mechanism_in(default_registry(), username, password, local_principal, restrictions, remote_mechanisms)
}

/// Pick the best mechanism the peer offers.
///
/// * `restrictions` – allow-list; empty means no restriction. Applied before
///   applicability, so the allow-list wins over whatever credentials exist.
/// * `remote_mechanisms` – names in the order the peer offered them. Names
///   without a local implementation are skipped.
///
/// Returns the applicable candidate with the highest [`Priority`](crate::Priority);
/// among equal priorities the first one offered wins. `None` when nothing
/// qualifies, which the caller must treat as an authentication failure.
pub fn find_matching_mechanism_in<S: AsRef<str>>(
    registry: &MechanismRegistry,
    username: Option<&str>,
    password: Option<&str>,
    local_principal: Option<&LocalPrincipal>,
    restrictions: &HashSet<String>,
    remote_mechanisms: &[S],
) -> Option<Box<dyn Mechanism>> {
    let mut found: Vec<Box<dyn Mechanism>> = Vec::new();

    for remote in remote_mechanisms.iter().map(AsRef::as_ref) {
        let Some(factory) = registry.find_factory(remote) else {
            continue;
        };
        if !restrictions.is_empty() && !restrictions.contains(remote) {
            trace!(mechanism = remote, "skipping SASL mechanism not in the configured restriction set");
            continue;
        }
        let mech = factory();
        if mech.is_applicable(username, password, local_principal) {
            found.push(mech);
        } else {
            trace!(mechanism = remote, "skipping SASL mechanism, available credentials are not sufficient");
        }
    }

    // Strict comparison keeps the earliest offered mechanism on ties.
    let best = found
        .into_iter()
        .reduce(|best, next| if next.priority() > best.priority() { next } else { best });

    trace!(best = ?best.as_ref().map(|m| m.name()), "best match for SASL auth");
    best
}
