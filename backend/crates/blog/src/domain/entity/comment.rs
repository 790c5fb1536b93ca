//! Comment Entity

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::{article_id::ArticleId, comment_id::CommentId};

/// Comment entity
///
/// Always references a live article at creation time. Comments are never
/// individually edited or deleted; they go away only with the parent
/// article's cascade.
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    /// Accepted as-is, including empty
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment
    pub fn new(article_id: ArticleId, author_id: UserId, content: String) -> Self {
        Self {
            comment_id: CommentId::new(),
            article_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }
}
