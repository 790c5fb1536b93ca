//! Article Entity

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::article_id::ArticleId;

/// Article entity
///
/// `author_id` is set once at creation and never reassigned; it is the
/// authoritative ownership record. Comments are linked by `article_id`
/// on the comment side, not tracked here.
#[derive(Debug, Clone)]
pub struct Article {
    pub article_id: ArticleId,
    /// Owning author, fixed at creation
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    /// Public path of the uploaded image, if any
    pub image: Option<String>,
    /// Ordered tags; duplicates allowed
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a new article
    pub fn new(
        author_id: UserId,
        title: String,
        content: String,
        tags: Vec<String>,
        image: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            article_id: ArticleId::new(),
            author_id,
            title,
            content,
            image,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an edit.
    ///
    /// Tags are replaced wholesale from the new input. The image is
    /// replaced only when a new upload was supplied; `None` retains the
    /// existing reference.
    pub fn apply_update(
        &mut self,
        title: String,
        content: String,
        tags: Vec<String>,
        image: Option<String>,
    ) {
        self.title = title;
        self.content = content;
        self.tags = tags;
        if let Some(image) = image {
            self.image = Some(image);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::new(
            UserId::new(),
            "Hello".to_string(),
            "World".to_string(),
            vec!["a".to_string()],
            None,
        )
    }

    #[test]
    fn test_new_article() {
        let a = article();
        assert_eq!(a.created_at, a.updated_at);
        assert!(a.image.is_none());
    }

    #[test]
    fn test_apply_update_refreshes_timestamp() {
        let mut a = article();
        let before = a.updated_at;
        a.apply_update(
            "New".to_string(),
            "Body".to_string(),
            vec![],
            None,
        );
        assert!(a.updated_at >= before);
        assert_eq!(a.title, "New");
    }

    #[test]
    fn test_apply_update_replaces_tags_wholesale() {
        let mut a = article();
        a.apply_update(
            "T".to_string(),
            "C".to_string(),
            vec!["x".to_string(), "y".to_string()],
            None,
        );
        assert_eq!(a.tags, vec!["x", "y"]);
    }

    #[test]
    fn test_apply_update_retains_image_without_new_upload() {
        let mut a = article();
        a.image = Some("/uploads/old.png".to_string());

        a.apply_update("T".to_string(), "C".to_string(), vec![], None);
        assert_eq!(a.image.as_deref(), Some("/uploads/old.png"));

        a.apply_update(
            "T".to_string(),
            "C".to_string(),
            vec![],
            Some("/uploads/new.png".to_string()),
        );
        assert_eq!(a.image.as_deref(), Some("/uploads/new.png"));
    }
}
