//! Session Token Codec
//!
//! Issues and verifies stateless bearer tokens. A token is the URL-safe
//! base64 of the JSON claims, a dot, and the URL-safe base64 of an
//! HMAC-SHA256 signature over the encoded claims:
//!
//! ```text
//! <base64url(claims JSON)>.<base64url(HMAC-SHA256(secret, encoded claims))>
//! ```
//!
//! There is no server-side session store: the claims travel inside the
//! token and possession of a validly signed, unexpired token is the sole
//! proof of identity. The validity window is fixed at issue time; tokens
//! are never renewed or revoked.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Identity claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id (internal UUID)
    pub user_id: Uuid,
    /// User name at issue time (display form)
    pub user_name: String,
    /// Role at issue time
    pub user_role: UserRole,
    /// Expiry as Unix timestamp in milliseconds
    pub expires_at_ms: i64,
}

impl TokenClaims {
    /// Build claims for a user with a validity window starting now
    pub fn for_user(user: &User, ttl: Duration) -> Self {
        Self {
            user_id: *user.user_id.as_uuid(),
            user_name: user.user_name.original().to_string(),
            user_role: user.user_role,
            expires_at_ms: (Utc::now() + ttl).timestamp_millis(),
        }
    }

    /// Check if the validity window has elapsed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}

/// Signs and verifies session tokens with the process-wide secret
pub struct TokenCodec {
    config: Arc<AuthConfig>,
}

type HmacSha256 = Hmac<Sha256>;

impl TokenCodec {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for a user, expiring `token_ttl` from now
    pub fn issue(&self, user: &User) -> String {
        let claims = TokenClaims::for_user(user, self.config.token_ttl);
        self.sign_claims(&claims)
    }

    /// Sign arbitrary claims. Signing primitive behind [`TokenCodec::issue`].
    pub fn sign_claims(&self, claims: &TokenClaims) -> String {
        let payload = serde_json::to_vec(claims).expect("claims serialize to JSON");
        let encoded = URL_SAFE_NO_PAD.encode(&payload);

        let mut mac = HmacSha256::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(encoded.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", encoded, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify a token and return the embedded claims.
    ///
    /// The signature is checked before the payload is even decoded, so an
    /// attacker-controlled payload is never parsed. Expiry is checked last.
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        let (encoded, signature_b64) = token.split_once('.').ok_or(AuthError::TokenInvalid)?;
        if encoded.is_empty() || signature_b64.contains('.') {
            return Err(AuthError::TokenInvalid);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::TokenInvalid)?;

        let mut mac = HmacSha256::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(encoded.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::TokenInvalid)?;

        let payload = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| AuthError::TokenInvalid)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::TokenInvalid)?;

        if claims.is_expired() {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, user_name::UserName};

    fn codec() -> TokenCodec {
        TokenCodec::new(Arc::new(AuthConfig::with_random_secret()))
    }

    fn test_user(role: UserRole) -> User {
        User::new(
            UserName::new("alice").unwrap(),
            Email::new("a@x.com").unwrap(),
            role,
        )
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let codec = codec();
        let user = test_user(UserRole::Admin);

        let token = codec.issue(&user);
        let claims = codec.verify(&token).unwrap();

        assert_eq!(claims.user_id, *user.user_id.as_uuid());
        assert_eq!(claims.user_name, "alice");
        assert_eq!(claims.user_role, UserRole::Admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_roundtrip_exactly() {
        let codec = codec();
        let claims = TokenClaims {
            user_id: Uuid::new_v4(),
            user_name: "Bob".to_string(),
            user_role: UserRole::User,
            expires_at_ms: Utc::now().timestamp_millis() + 60_000,
        };

        let token = codec.sign_claims(&claims);
        assert_eq!(codec.verify(&token).unwrap(), claims);
    }

    #[test]
    fn test_expiry_boundary() {
        let codec = codec();
        let now_ms = Utc::now().timestamp_millis();

        // Still inside the window one second before expiry
        let valid = TokenClaims {
            user_id: Uuid::new_v4(),
            user_name: "alice".to_string(),
            user_role: UserRole::User,
            expires_at_ms: now_ms + 1_000,
        };
        assert!(codec.verify(&codec.sign_claims(&valid)).is_ok());

        // Rejected one second after expiry
        let expired = TokenClaims {
            expires_at_ms: now_ms - 1_000,
            ..valid
        };
        let err = codec.verify(&codec.sign_claims(&expired)).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let codec = codec();
        let token = codec.issue(&test_user(UserRole::User));

        let (payload, signature) = token.split_once('.').unwrap();

        // Re-encode a modified payload under the original signature
        let mut decoded = URL_SAFE_NO_PAD.decode(payload).unwrap();
        let json = String::from_utf8(decoded.clone()).unwrap();
        decoded = json.replace("\"user\"", "\"admin\"").into_bytes();
        let forged = format!("{}.{}", URL_SAFE_NO_PAD.encode(&decoded), signature);

        assert!(matches!(
            codec.verify(&forged),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let user = test_user(UserRole::User);
        let token = codec().issue(&user);

        // A codec with a different secret must reject it
        let other = codec();
        assert!(matches!(other.verify(&token), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_garbage_tokens_rejected() {
        let codec = codec();
        for garbage in ["", "abc", "a.b.c", "..", "a.!!!", "💣.💥"] {
            assert!(
                matches!(codec.verify(garbage), Err(AuthError::TokenInvalid)),
                "expected TokenInvalid for {garbage:?}"
            );
        }
    }
}
