//! Channel credential issuance for the Chorus gateway.
//!
//! Wraps the token signing primitive behind a small issuer that applies the
//! system-wide expiry policy. Every call produces a fresh credential; nothing
//! is cached or persisted.

pub mod error;
pub mod signer;

pub use error::TokenError;
pub use signer::{sign, ChannelRole, TOKEN_VERSION};

use chorus_types::Credential;
use std::fmt;

/// Fixed credential lifetime. Every token in this system lives one hour.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Issues time-boxed channel credentials under a deployment's app identity.
#[derive(Clone)]
pub struct CredentialIssuer {
    app_id: String,
    app_certificate: String,
}

impl fmt::Debug for CredentialIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialIssuer")
            .field("app_id", &self.app_id)
            .field("app_certificate", &"[REDACTED]")
            .finish()
    }
}

impl CredentialIssuer {
    pub fn new(app_id: impl Into<String>, app_certificate: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_certificate: app_certificate.into(),
        }
    }

    /// Issues a fresh credential for `identity` on `channel`.
    ///
    /// `expires_at` is exactly `now + ttl_seconds`. Both the token and its
    /// privileges expire at that instant.
    pub fn issue(
        &self,
        channel: &str,
        identity: &str,
        role: ChannelRole,
        ttl_seconds: u64,
    ) -> Result<Credential, TokenError> {
        let expires_at = chrono::Utc::now().timestamp() + ttl_seconds as i64;
        let token = signer::sign(
            &self.app_id,
            &self.app_certificate,
            channel,
            identity,
            role,
            expires_at,
            expires_at,
        )?;

        Ok(Credential {
            token,
            identity: identity.to_string(),
            channel: channel.to_string(),
            expires_at,
        })
    }
}
