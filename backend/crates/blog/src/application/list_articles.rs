//! List Articles Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::repository::{ArticleDetail, ArticleRepository};
use crate::error::BlogResult;

/// List articles use case
pub struct ListArticlesUseCase<A>
where
    A: ArticleRepository,
{
    article_repo: Arc<A>,
}

impl<A> ListArticlesUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(article_repo: Arc<A>) -> Self {
        Self { article_repo }
    }

    /// All articles, newest first
    pub async fn list_all(&self) -> BlogResult<Vec<ArticleDetail>> {
        self.article_repo.list_all().await
    }

    /// Articles owned by the given author, newest first
    pub async fn list_by_author(&self, author_id: &UserId) -> BlogResult<Vec<ArticleDetail>> {
        self.article_repo.list_by_author(author_id).await
    }
}
