//! Request Identity
//!
//! Extracts the authenticated caller from the access-token cookie (or an
//! `Authorization: Bearer` header) and makes it available to handlers as
//! an explicit extractor. Handlers that take a [`Caller`] argument are
//! token-gated; handlers that do not are public.

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use platform::cookie::extract_cookie;
use platform::token;

use crate::application::config::IdentityConfig;
use crate::error::{IdentityError, IdentityResult};

/// The authenticated caller of a request
#[derive(Debug, Clone)]
pub struct Caller {
    pub email: String,
}

/// Resolve the caller from request headers
///
/// The cookie takes precedence; a bearer token is accepted as a fallback
/// for non-browser clients.
pub fn resolve_caller(headers: &HeaderMap, config: &IdentityConfig) -> IdentityResult<Caller> {
    let token = extract_cookie(headers, &config.cookie.name)
        .or_else(|| bearer_token(headers))
        .ok_or(IdentityError::MissingToken)?;

    let claims = token::verify(&config.token_secret, &token, Utc::now().timestamp_millis())?;

    Ok(Caller {
        email: claims.email,
    })
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

impl<S> FromRequestParts<S> for Caller
where
    Arc<IdentityConfig>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<IdentityConfig>::from_ref(state);
        resolve_caller(&parts.headers, &config).map_err(|e| e.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use platform::token::TokenClaims;

    fn config() -> IdentityConfig {
        IdentityConfig::with_random_secret()
    }

    fn valid_token(config: &IdentityConfig) -> String {
        token::issue(
            &config.token_secret,
            &TokenClaims {
                email: "mina@example.com".to_string(),
                exp_ms: Utc::now().timestamp_millis() + 60_000,
            },
        )
    }

    #[test]
    fn resolves_caller_from_cookie() {
        let config = config();
        let token = valid_token(&config);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("access_token={token}")).unwrap(),
        );

        let caller = resolve_caller(&headers, &config).unwrap();
        assert_eq!(caller.email, "mina@example.com");
    }

    #[test]
    fn resolves_caller_from_bearer_header() {
        let config = config();
        let token = valid_token(&config);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let caller = resolve_caller(&headers, &config).unwrap();
        assert_eq!(caller.email, "mina@example.com");
    }

    #[test]
    fn missing_token_is_rejected() {
        let config = config();
        let headers = HeaderMap::new();
        assert!(matches!(
            resolve_caller(&headers, &config),
            Err(IdentityError::MissingToken)
        ));
    }

    #[test]
    fn forged_token_is_rejected() {
        let config = config();
        let other = IdentityConfig::with_random_secret();
        let token = valid_token(&other);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("access_token={token}")).unwrap(),
        );

        assert!(matches!(
            resolve_caller(&headers, &config),
            Err(IdentityError::InvalidToken)
        ));
    }
}
