//! Signed Access Tokens
//!
//! Compact HMAC-signed tokens carrying an identity claim with an
//! expiry. Format: `base64url(claims json) . base64url(hmac)`.
//! The backend is the sole issuer and verifier; clients treat the
//! token as opaque.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::{constant_time_eq, from_base64_url, hmac_sha256, to_base64_url};

/// Token verification errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,
}

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Identity of the caller; the only claim downstream code trusts
    pub email: String,
    /// Expiry as unix milliseconds
    pub exp_ms: i64,
}

/// Issue a signed token for the given claims
pub fn issue(secret: &[u8; 32], claims: &TokenClaims) -> String {
    // Claims are a flat struct; serialization cannot fail
    let payload = serde_json::to_vec(claims).unwrap_or_default();
    let encoded = to_base64_url(&payload);
    let mac = hmac_sha256(secret, encoded.as_bytes());
    format!("{}.{}", encoded, to_base64_url(&mac))
}

/// Verify a token and return its claims
///
/// Checks the MAC in constant time before looking at the payload,
/// then rejects expired tokens against `now_ms`.
pub fn verify(secret: &[u8; 32], token: &str, now_ms: i64) -> Result<TokenClaims, TokenError> {
    let (encoded, mac_part) = token.split_once('.').ok_or(TokenError::Malformed)?;

    let presented_mac = from_base64_url(mac_part).map_err(|_| TokenError::Malformed)?;
    let expected_mac = hmac_sha256(secret, encoded.as_bytes());

    if !constant_time_eq(&expected_mac, &presented_mac) {
        return Err(TokenError::InvalidSignature);
    }

    let payload = from_base64_url(encoded).map_err(|_| TokenError::Malformed)?;
    let claims: TokenClaims =
        serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

    if claims.exp_ms < now_ms {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    fn claims(exp_ms: i64) -> TokenClaims {
        TokenClaims {
            email: "alice@example.com".to_string(),
            exp_ms,
        }
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let token = issue(&SECRET, &claims(10_000));
        let verified = verify(&SECRET, &token, 5_000).unwrap();
        assert_eq!(verified.email, "alice@example.com");
        assert_eq!(verified.exp_ms, 10_000);
    }

    #[test]
    fn test_expired_token() {
        let token = issue(&SECRET, &claims(10_000));
        assert_eq!(verify(&SECRET, &token, 10_001), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret() {
        let token = issue(&SECRET, &claims(10_000));
        let other = [8u8; 32];
        assert_eq!(
            verify(&other, &token, 0),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_payload() {
        let token = issue(&SECRET, &claims(10_000));
        let (_, mac) = token.split_once('.').unwrap();
        let forged_claims = claims(99_999_999);
        let forged_payload =
            crate::crypto::to_base64_url(&serde_json::to_vec(&forged_claims).unwrap());
        let forged = format!("{}.{}", forged_payload, mac);
        assert_eq!(
            verify(&SECRET, &forged, 0),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed_token() {
        assert_eq!(verify(&SECRET, "garbage", 0), Err(TokenError::Malformed));
        assert_eq!(verify(&SECRET, "a.b.c", 0), Err(TokenError::Malformed));
        assert_eq!(verify(&SECRET, "", 0), Err(TokenError::Malformed));
    }
}
