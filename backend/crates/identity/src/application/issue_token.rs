//! Issue Token Use Case
//!
//! Signs a time-limited access token for a caller identity. The token
//! carries only the email claim; roles are resolved from the store on
//! every request, never baked into the token.

use std::sync::Arc;

use chrono::Utc;
use platform::token::{self, TokenClaims};

use crate::application::config::IdentityConfig;
use crate::domain::value_object::email::Email;
use crate::error::IdentityResult;

/// Issue token use case
pub struct IssueTokenUseCase {
    config: Arc<IdentityConfig>,
}

impl IssueTokenUseCase {
    pub fn new(config: Arc<IdentityConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, email: String) -> IdentityResult<String> {
        let email = Email::new(email)?;

        let claims = TokenClaims {
            email: email.into_inner(),
            exp_ms: Utc::now().timestamp_millis() + self.config.token_ttl_ms(),
        };

        let token = token::issue(&self.config.token_secret, &claims);

        tracing::info!(email = %claims.email, "Access token issued");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_verifies() {
        let config = Arc::new(IdentityConfig::with_random_secret());
        let use_case = IssueTokenUseCase::new(config.clone());

        let token = use_case.execute("alice@example.com".to_string()).unwrap();
        let claims = token::verify(
            &config.token_secret,
            &token,
            Utc::now().timestamp_millis(),
        )
        .unwrap();
        assert_eq!(claims.email, "alice@example.com");
    }

    #[test]
    fn test_rejects_invalid_email() {
        let config = Arc::new(IdentityConfig::with_random_secret());
        let use_case = IssueTokenUseCase::new(config);
        assert!(use_case.execute("not-an-email".to_string()).is_err());
    }
}
