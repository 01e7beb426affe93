//! Application Configuration
//!
//! Configuration for the Auth application layer. Constructed once at
//! startup and passed into services; library code never reads the
//! process environment.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC-SHA256 token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Token time-to-live; `None` issues tokens without an expiry claim
    pub token_ttl: Option<Duration>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: None,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
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

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Token TTL in seconds, if one is configured
    pub fn token_ttl_secs(&self) -> Option<i64> {
        self.token_ttl.map(|ttl| ttl.as_secs() as i64)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
