//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_role::UserRole,
};

/// User entity
///
/// Contains public user profile information.
/// Sensitive auth data is in the Credentials entity.
///
/// Owned articles are not tracked here; article ownership is held
/// authoritatively by `articles.author_id` and queried when needed.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique, for login and display)
    pub user_name: UserName,
    /// Email address (unique)
    pub email: Email,
    /// Role (User, Admin)
    pub user_role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, email: Email, user_role: UserRole) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            email,
            user_role,
            created_at: now,
            updated_at: now,
        }
    }
}
