//! Add Comment Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::comment::Comment;
use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::domain::value_object::article_id::ArticleId;
use crate::error::{BlogError, BlogResult};

/// Add comment use case
pub struct AddCommentUseCase<A, C>
where
    A: ArticleRepository,
    C: CommentRepository,
{
    article_repo: Arc<A>,
    comment_repo: Arc<C>,
}

impl<A, C> AddCommentUseCase<A, C>
where
    A: ArticleRepository,
    C: CommentRepository,
{
    pub fn new(article_repo: Arc<A>, comment_repo: Arc<C>) -> Self {
        Self {
            article_repo,
            comment_repo,
        }
    }

    /// Append a comment to a live article.
    ///
    /// Content is accepted as-is, empty included; any authenticated user
    /// may comment.
    pub async fn execute(
        &self,
        article_id: ArticleId,
        author_id: &UserId,
        content: String,
    ) -> BlogResult<Comment> {
        // The parent must exist at creation time
        self.article_repo
            .find_by_id(article_id)
            .await?
            .ok_or(BlogError::NotFound)?;

        let comment = Comment::new(article_id, *author_id, content);
        self.comment_repo.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            article_id = %article_id,
            "Comment added"
        );

        Ok(comment)
    }
}
