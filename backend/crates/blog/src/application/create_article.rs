//! Create Article Use Case

use std::sync::Arc;

use auth::domain::value_object::{user_id::UserId, user_role::UserRole};

use crate::application::require_title_and_content;
use crate::domain::entity::article::Article;
use crate::domain::policy;
use crate::domain::repository::ArticleRepository;
use crate::domain::value_object::tags::parse_tags;
use crate::error::{BlogError, BlogResult};

/// Create article input
pub struct CreateArticleInput {
    pub author_id: UserId,
    pub author_role: UserRole,
    pub title: String,
    pub content: String,
    /// Raw comma-separated tag string from the form
    pub tags: String,
    /// Public path of an uploaded image, if one was attached
    pub image: Option<String>,
}

/// Create article use case
pub struct CreateArticleUseCase<A>
where
    A: ArticleRepository,
{
    article_repo: Arc<A>,
}

impl<A> CreateArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(article_repo: Arc<A>) -> Self {
        Self { article_repo }
    }

    pub async fn execute(&self, input: CreateArticleInput) -> BlogResult<Article> {
        if !policy::can_author(input.author_role) {
            return Err(BlogError::Forbidden(
                "Access denied. Admin privileges required.".to_string(),
            ));
        }

        require_title_and_content(&input.title, &input.content)?;

        let article = Article::new(
            input.author_id,
            input.title.trim().to_string(),
            input.content,
            parse_tags(&input.tags),
            input.image,
        );

        self.article_repo.create(&article).await?;

        tracing::info!(
            article_id = %article.article_id,
            author_id = %article.author_id,
            "Article created"
        );

        Ok(article)
    }
}
