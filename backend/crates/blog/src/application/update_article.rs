//! Update Article Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::application::require_title_and_content;
use crate::domain::entity::article::Article;
use crate::domain::policy;
use crate::domain::repository::ArticleRepository;
use crate::domain::value_object::{article_id::ArticleId, tags::parse_tags};
use crate::error::{BlogError, BlogResult};

/// Update article input
pub struct UpdateArticleInput {
    pub title: String,
    pub content: String,
    /// Raw comma-separated tag string; replaces the old tags wholesale
    pub tags: String,
    /// New image path; `None` keeps the existing image
    pub image: Option<String>,
}

/// Update article use case
pub struct UpdateArticleUseCase<A>
where
    A: ArticleRepository,
{
    article_repo: Arc<A>,
}

impl<A> UpdateArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(article_repo: Arc<A>) -> Self {
        Self { article_repo }
    }

    /// Existence is checked before ownership, so a non-owner probing a
    /// random id gets 404 for missing articles and 403 for real ones.
    pub async fn execute(
        &self,
        article_id: ArticleId,
        requester_id: &UserId,
        input: UpdateArticleInput,
    ) -> BlogResult<Article> {
        let mut article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or(BlogError::NotFound)?;

        if !policy::owns(&article, requester_id) {
            return Err(BlogError::Forbidden(
                "You can only edit your own articles.".to_string(),
            ));
        }

        require_title_and_content(&input.title, &input.content)?;

        article.apply_update(
            input.title.trim().to_string(),
            input.content,
            parse_tags(&input.tags),
            input.image,
        );

        self.article_repo.update(&article).await?;

        tracing::info!(article_id = %article.article_id, "Article updated");

        Ok(article)
    }
}
