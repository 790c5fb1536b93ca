//! Authorization Policy
//!
//! Pure decision functions over (identity, resource). Keeping the policy
//! here, away from handlers and SQL, makes it auditable and testable in
//! isolation.

use auth::domain::value_object::{user_id::UserId, user_role::UserRole};

use crate::domain::entity::article::Article;

/// Only admin role holders may author articles.
pub fn can_author(role: UserRole) -> bool {
    role.is_admin()
}

/// Only the owning author may mutate or delete an article.
pub fn owns(article: &Article, user_id: &UserId) -> bool {
    article.author_id == *user_id
}
