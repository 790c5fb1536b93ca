//! Register Use Case
//!
//! Creates a new user account and issues its first session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    /// Requested role; only the literal `"admin"` grants admin
    pub role: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user: User,
    /// Session token for the cookie
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate identity fields
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(&input.email)?;

        // Uniqueness pre-check; the unique indexes are the backstop for a
        // racing registration with the same identity
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::DuplicateIdentity);
        }
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateIdentity);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let role = input
            .role
            .as_deref()
            .map(UserRole::from_code)
            .unwrap_or_default();

        let user = User::new(user_name, email, role);
        let credentials = Credentials::new(user.user_id, password_hash);

        self.user_repo.create(&user, &credentials).await?;

        let token = TokenCodec::new(self.config.clone()).issue(&user);

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            role = %user.user_role,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}
