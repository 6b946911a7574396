//! The channel-token signing primitive.
//!
//! Produces an opaque signed string binding `(channel, uid, role)` to an
//! expiry window under the deployment's app credentials. Consumers treat the
//! result as a black box; only the real-time transport verifies it.
//!
//! Token format: `<version>base64url(payload|hmac_hex)` where the payload is
//! `app_id|channel|uid|role|expire_ts|privilege_expire_ts|salt`. The random
//! salt makes every token unique, so two calls with identical inputs never
//! produce the same string.

use crate::error::TokenError;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

/// Version prefix baked into every issued token.
pub const TOKEN_VERSION: &str = "001";

/// The channel privileges a token grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRole {
    /// May publish and subscribe.
    Publisher,
    /// May subscribe only.
    Subscriber,
}

impl ChannelRole {
    /// Numeric role code carried in the signed payload.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Publisher => 1,
            Self::Subscriber => 2,
        }
    }
}

/// Signs a channel access token.
///
/// `expire_ts` bounds the token itself; `privilege_expire_ts` bounds the
/// granted role. The issuing policy in this system always sets both to the
/// same instant.
pub fn sign(
    app_id: &str,
    app_certificate: &str,
    channel: &str,
    uid: &str,
    role: ChannelRole,
    expire_ts: i64,
    privilege_expire_ts: i64,
) -> Result<String, TokenError> {
    if app_id.is_empty() {
        return Err(TokenError::MissingCredential("app_id"));
    }
    if app_certificate.is_empty() {
        return Err(TokenError::MissingCredential("app_certificate"));
    }
    if channel.is_empty() {
        return Err(TokenError::EmptyChannel);
    }

    let salt: u32 = rand::thread_rng().gen();
    let payload = format!(
        "{}|{}|{}|{}|{}|{}|{}",
        app_id,
        channel,
        uid,
        role.as_u8(),
        expire_ts,
        privilege_expire_ts,
        salt
    );

    let mut mac = Hmac::<Sha256>::new_from_slice(app_certificate.as_bytes())
        .expect("HMAC key length is valid");
    mac.update(payload.as_bytes());
    let signature = mac.finalize().into_bytes();

    let token_bytes = format!("{}|{}", payload, hex::encode(signature));
    Ok(format!(
        "{}{}",
        TOKEN_VERSION,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(token_bytes.as_bytes())
    ))
}
