//! Application Configuration
//!
//! Configuration for the identity application layer.

use std::time::Duration;

pub use platform::cookie::{CookieConfig, SameSite};

/// Identity application configuration
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Cookie carrying the access token
    pub cookie: CookieConfig,
    /// HMAC secret for access tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Access token lifetime
    pub token_ttl: Duration,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::default(),
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(12 * 3600), // 12 hours
        }
    }
}

impl IdentityConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.cookie.secure = false;
        config
    }

    /// Token lifetime in milliseconds
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }
}
