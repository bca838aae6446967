use super::{Credentials, LocalPrincipal, Mechanism, Priority};
use crate::SaslResult;

/// `ANONYMOUS` (RFC 4505). Always applicable, lowest preference.
#[derive(Debug, Default)]
pub struct Anonymous {
    credentials: Credentials,
}

impl Anonymous {
    pub const NAME: &'static str = "ANONYMOUS";
}

impl Mechanism for Anonymous {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> Priority {
        Priority::Lowest
    }

    fn is_applicable(&self, _username: Option<&str>, _password: Option<&str>, _local_principal: Option<&LocalPrincipal>) -> bool {
        true
    }

    fn initial_response(&mut self) -> SaslResult<Option<Vec<u8>>> {
        Ok(Some(Vec::new()))
    }

    fn challenge_response(&mut self, _challenge: &[u8]) -> SaslResult<Vec<u8>> {
        Ok(Vec::new())
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }
}
