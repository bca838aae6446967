use super::{Credentials, LocalPrincipal, Mechanism, Priority};
use crate::SaslResult;

/// `EXTERNAL` (RFC 4422 appendix A). Authenticates with the identity already
/// established by the transport, so it needs a local principal.
#[derive(Debug, Default)]
pub struct External {
    credentials: Credentials,
}

impl External {
    pub const NAME: &'static str = "EXTERNAL";
}

impl Mechanism for External {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> Priority {
        Priority::Higher
    }

    fn is_applicable(&self, _username: Option<&str>, _password: Option<&str>, local_principal: Option<&LocalPrincipal>) -> bool {
        local_principal.is_some()
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
