//! Delete Article Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::policy;
use crate::domain::repository::ArticleRepository;
use crate::domain::value_object::article_id::ArticleId;
use crate::error::{BlogError, BlogResult};

/// Delete article use case
pub struct DeleteArticleUseCase<A>
where
    A: ArticleRepository,
{
    article_repo: Arc<A>,
}

impl<A> DeleteArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(article_repo: Arc<A>) -> Self {
        Self { article_repo }
    }

    /// Delete the article and cascade to its comments.
    pub async fn execute(&self, article_id: ArticleId, requester_id: &UserId) -> BlogResult<()> {
        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or(BlogError::NotFound)?;

        if !policy::owns(&article, requester_id) {
            return Err(BlogError::Forbidden(
                "You can only delete your own articles.".to_string(),
            ));
        }

        let comments_deleted = self.article_repo.delete_with_comments(article_id).await?;

        tracing::info!(
            article_id = %article_id,
            comments_deleted,
            "Article deleted"
        );

        Ok(())
    }
}
