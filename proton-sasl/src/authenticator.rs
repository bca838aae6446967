#![forbid(unsafe_code)]

//! Client-side SASL handshake driver.
//!
//! The connection layer feeds decoded SASL frames in and writes the returned
//! payloads out; framing itself happens elsewhere. Sequence:
//!
//! 1. `sasl-mechanisms` → [`SaslClientAuthenticator::on_mechanisms`] → `sasl-init`
//! 2. `sasl-challenge` → [`SaslClientAuthenticator::on_challenge`] → `sasl-response` (zero or more times)
//! 3. `sasl-outcome` → [`SaslClientAuthenticator::on_outcome`]

use proton_core::SaslConfig;
use std::{collections::HashSet, fmt};
use tracing::debug;

use crate::finder::find_matching_mechanism_in;
use crate::mechanism::{LocalPrincipal, Mechanism};
use crate::registry::{default_registry, MechanismRegistry};
use crate::{SaslError, SaslResult};

/// AMQP 1.0 `sasl-code` values carried by the outcome frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SaslOutcome {
    Ok = 0,
    Auth = 1,
    Sys = 2,
    SysPerm = 3,
    SysTemp = 4,
}

impl SaslOutcome {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::Auth),
            2 => Some(Self::Sys),
            3 => Some(Self::SysPerm),
            4 => Some(Self::SysTemp),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

/// Content of the `sasl-init` frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaslInit {
    pub mechanism: &'static str,
    pub initial_response: Option<Vec<u8>>,
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaslState {
    AwaitingMechanisms,
    Negotiating,
    Succeeded,
    Failed,
}

/// Drives one client handshake. Not reusable across connections.
pub struct SaslClientAuthenticator<'r> {
    registry: &'r MechanismRegistry,
    username: Option<String>,
    password: Option<zeroize::Zeroizing<String>>,
    hostname: Option<String>,
    restrictions: HashSet<String>,
    local_principal: Option<LocalPrincipal>,
    mechanism: Option<Box<dyn Mechanism>>,
    state: SaslState,
}

impl fmt::Debug for SaslClientAuthenticator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaslClientAuthenticator")
            .field("username", &self.username)
            .field("hostname", &self.hostname)
            .field("restrictions", &self.restrictions)
            .field("local_principal", &self.local_principal)
            .field("mechanism", &self.mechanism.as_ref().map(|m| m.name()))
            .field("state", &self.state)
            .finish()
    }
}

impl SaslClientAuthenticator<'static> {
    pub fn new(config: &SaslConfig, local_principal: Option<LocalPrincipal>) -> Self {
        Self::with_registry(default_registry(), config, local_principal)
    }
}

impl<'r> SaslClientAuthenticator<'r> {
    pub fn with_registry(registry: &'r MechanismRegistry, config: &SaslConfig, local_principal: Option<LocalPrincipal>) -> Self {
        Self {
            registry,
            username: config.username.clone(),
            password: config.password.clone().map(zeroize::Zeroizing::new),
            hostname: config.hostname.clone(),
            restrictions: config.restrictions(),
            local_principal,
            mechanism: None,
            state: SaslState::AwaitingMechanisms,
        }
    }

    pub fn state(&self) -> SaslState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, SaslState::Succeeded | SaslState::Failed)
    }

    pub fn succeeded(&self) -> bool {
        self.state == SaslState::Succeeded
    }

    /// Mechanism chosen by [`on_mechanisms`](Self::on_mechanisms), if any.
    pub fn mechanism(&self) -> Option<&dyn Mechanism> {
        self.mechanism.as_deref()
    }

    fn expect_state(&self, expected: SaslState, event: &'static str) -> SaslResult<()> {
        if self.state != expected {
            return Err(SaslError::UnexpectedState(event));
        }
        Ok(())
    }

    /// Choose a mechanism from the peer's offer and build the `sasl-init` frame.
    pub fn on_mechanisms<S: AsRef<str>>(&mut self, offered: &[S]) -> SaslResult<SaslInit> {
        self.expect_state(SaslState::AwaitingMechanisms, "sasl-mechanisms")?;

        let username = self.username.as_deref();
        let password = self.password.as_ref().map(|p| p.as_str());
        let Some(mut mech) = find_matching_mechanism_in(
            self.registry,
            username,
            password,
            self.local_principal.as_ref(),
            &self.restrictions,
            offered,
        ) else {
            self.state = SaslState::Failed;
            let offered = offered.iter().map(|s| s.as_ref().to_owned()).collect();
            return Err(SaslError::NoMatchingMechanism { offered });
        };

        mech.set_username(username);
        mech.set_password(password);
        let initial_response = match mech.initial_response() {
            Ok(r) => r,
            Err(e) => {
                self.state = SaslState::Failed;
                return Err(e);
            }
        };

        debug!(mechanism = mech.name(), "sending sasl-init");
        let init = SaslInit { mechanism: mech.name(), initial_response, hostname: self.hostname.clone() };
        self.mechanism = Some(mech);
        self.state = SaslState::Negotiating;
        Ok(init)
    }

    /// Answer a `sasl-challenge`.
    pub fn on_challenge(&mut self, challenge: &[u8]) -> SaslResult<Vec<u8>> {
        self.expect_state(SaslState::Negotiating, "sasl-challenge")?;
        let mech = self.mechanism.as_mut().ok_or(SaslError::UnexpectedState("sasl-challenge"))?;
        debug!(mechanism = mech.name(), len = challenge.len(), "answering sasl-challenge");
        mech.challenge_response(challenge).map_err(|e| {
            self.state = SaslState::Failed;
            e
        })
    }

    /// Apply the `sasl-outcome`; any code but `ok` is an authentication failure.
    pub fn on_outcome(&mut self, outcome: SaslOutcome) -> SaslResult<()> {
        self.expect_state(SaslState::Negotiating, "sasl-outcome")?;
        if outcome.is_ok() {
            debug!("SASL authentication succeeded");
            self.state = SaslState::Succeeded;
            Ok(())
        } else {
            debug!(code = outcome.code(), "SASL authentication failed");
            self.state = SaslState::Failed;
            Err(SaslError::Authentication(outcome))
        }
    }
}
