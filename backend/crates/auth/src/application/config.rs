//! Application Configuration
//!
//! Configuration for the Auth application layer. The token signing secret
//! is immutable, process-wide state fixed at startup; it is injected here
//! and never mutated or rotated at runtime.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session token cookie name
    pub token_cookie_name: String,
    /// Token signing secret for HMAC-SHA256 (32 bytes)
    pub token_secret: [u8; 32],
    /// Token validity window (7 days)
    pub token_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_cookie_name: "token".to_string(),
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(7 * 24 * 3600), // 7 days
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
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

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get token TTL in milliseconds
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Cookie settings matching the token contract: HttpOnly, Path=/,
    /// Max-Age equal to the token validity window.
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.token_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl.as_secs() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_seven_days() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_ms(), 7 * 24 * 3600 * 1000);
    }

    #[test]
    fn test_cookie_contract() {
        let config = AuthConfig::default();
        let cookie = config.cookie();
        assert_eq!(cookie.name, "token");
        assert!(cookie.http_only);
        assert_eq!(cookie.max_age_secs, Some(7 * 24 * 3600));
    }

    #[test]
    fn test_random_secret_is_not_zero() {
        let config = AuthConfig::with_random_secret();
        assert!(config.token_secret.iter().any(|&b| b != 0));
    }
}
