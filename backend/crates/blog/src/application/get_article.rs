//! Get Article Use Case

use std::sync::Arc;

use crate::domain::repository::{ArticleDetail, ArticleRepository};
use crate::domain::value_object::article_id::ArticleId;
use crate::error::{BlogError, BlogResult};

/// Get article use case
pub struct GetArticleUseCase<A>
where
    A: ArticleRepository,
{
    article_repo: Arc<A>,
}

impl<A> GetArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(article_repo: Arc<A>) -> Self {
        Self { article_repo }
    }

    /// Single article with author and comments resolved
    pub async fn execute(&self, article_id: ArticleId) -> BlogResult<ArticleDetail> {
        self.article_repo
            .get_detail(article_id)
            .await?
            .ok_or(BlogError::NotFound)
    }
}
