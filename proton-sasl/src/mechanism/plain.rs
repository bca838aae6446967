use super::{Credentials, LocalPrincipal, Mechanism, Priority};
use crate::SaslResult;

/// `PLAIN` (RFC 4616): `[authzid] NUL authcid NUL passwd`, sent with an empty authzid.
#[derive(Debug, Default)]
pub struct Plain {
    credentials: Credentials,
}

impl Plain {
    pub const NAME: &'static str = "PLAIN";
}

impl Mechanism for Plain {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> Priority {
        Priority::Lower
    }

    fn is_applicable(&self, username: Option<&str>, password: Option<&str>, _local_principal: Option<&LocalPrincipal>) -> bool {
        username.is_some_and(|u| !u.is_empty()) && password.is_some_and(|p| !p.is_empty())
    }

    fn initial_response(&mut self) -> SaslResult<Option<Vec<u8>>> {
        let username = self.username().unwrap_or_default().as_bytes();
        let password = self.password().unwrap_or_default().as_bytes();
        let mut data = Vec::with_capacity(username.len() + password.len() + 2);
        data.push(0);
        data.extend_from_slice(username);
        data.push(0);
        data.extend_from_slice(password);
        Ok(Some(data))
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
