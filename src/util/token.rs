//! Local inspection of the bearer token's claims.
//!
//! Nothing here checks the signature; the server does that on `/auth/me`. The
//! claims are only used to skip a doomed round trip for an expired token and
//! to show a cached identity while verification is pending. Anything that
//! cannot be decoded counts as expired.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::net::types::{Role, UserIdentity};

/// The subset of JWT claims the client reads.
///
/// Each claim is read on its own: a claim of an unexpected shape is dropped
/// without affecting the others, so a mistyped `role` never hides `exp`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch.
    pub exp: Option<f64>,
    /// Subject; the account email.
    pub sub: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
}

impl TokenClaims {
    fn from_payload(payload: &Map<String, Value>) -> Self {
        let text = |key: &str| payload.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            exp: payload.get("exp").and_then(Value::as_f64),
            sub: text("sub"),
            first_name: text("firstName"),
            last_name: text("lastName"),
            role: payload.get("role").and_then(role_claim),
        }
    }

    /// Identity implied by the claims, if they name a subject.
    #[must_use]
    pub fn cached_identity(&self) -> Option<UserIdentity> {
        let email = self.sub.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(UserIdentity {
            email: email.to_owned(),
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            role: self.role.unwrap_or_default(),
        })
    }
}

fn role_claim(value: &Value) -> Option<Role> {
    match Role::deserialize(value) {
        Ok(role) => Some(role),
        Err(e) => {
            log::debug!("ignoring role claim {value}: {e}");
            None
        }
    }
}

/// The payload segment of `token` as a JSON object.
fn decode_payload(token: &str) -> Option<Map<String, Value>> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    let bytes = match URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("token payload is not base64url: {e}");
            return None;
        }
    };
    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            log::debug!("token payload is not a claims object: {other}");
            None
        }
        Err(e) => {
            log::debug!("token payload is not JSON: {e}");
            None
        }
    }
}

/// Decode the payload segment of `token`. `None` only when the token is not
/// a three-segment token with a JSON object payload.
#[must_use]
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    decode_payload(token).map(|payload| TokenClaims::from_payload(&payload))
}

/// Whether `token` is expired at `now_secs`. Undecodable tokens and tokens
/// without a finite `exp` are expired.
#[must_use]
pub fn is_expired_at(token: &str, now_secs: i64) -> bool {
    let Some(exp) = decode_claims(token).and_then(|claims| claims.exp) else {
        return true;
    };
    #[allow(clippy::cast_precision_loss)]
    let now = now_secs as f64;
    !exp.is_finite() || now >= exp
}

/// Whether `token` is expired right now.
#[must_use]
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_secs())
}

/// Current wall-clock time in whole seconds since the Unix epoch.
#[must_use]
pub fn now_secs() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
        secs
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
