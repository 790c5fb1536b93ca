//! Application Layer
//!
//! Use cases for the article and comment lifecycle.

pub mod add_comment;
pub mod create_article;
pub mod delete_article;
pub mod get_article;
pub mod list_articles;
pub mod update_article;

// Re-exports
pub use add_comment::AddCommentUseCase;
pub use create_article::{CreateArticleInput, CreateArticleUseCase};
pub use delete_article::DeleteArticleUseCase;
pub use get_article::GetArticleUseCase;
pub use list_articles::ListArticlesUseCase;
pub use update_article::{UpdateArticleInput, UpdateArticleUseCase};

use crate::error::{BlogError, BlogResult};

/// Shared validation for article create/edit: both fields are required.
pub(crate) fn require_title_and_content(title: &str, content: &str) -> BlogResult<()> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(BlogError::Validation(
            "Title and content are required".to_string(),
        ));
    }
    Ok(())
}
