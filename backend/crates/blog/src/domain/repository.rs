//! Repository Traits
//!
//! Interfaces for data persistence and upload storage. Implementations
//! are in the infrastructure layer.

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::{article::Article, comment::Comment};
use crate::domain::value_object::{article_id::ArticleId, comment_id::CommentId};
use crate::error::BlogResult;

/// A comment resolved with its author's display name for rendering
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_name: String,
}

/// An article eagerly resolved with its author's display name and its
/// comments (each with their author), newest-article-first in listings
#[derive(Debug, Clone)]
pub struct ArticleDetail {
    pub article: Article,
    pub author_name: String,
    pub comments: Vec<CommentWithAuthor>,
}

/// Article repository trait
#[trait_variant::make(ArticleRepository: Send)]
pub trait LocalArticleRepository {
    /// Persist a new article
    async fn create(&self, article: &Article) -> BlogResult<()>;

    /// Find a bare article by ID (no joins)
    async fn find_by_id(&self, article_id: ArticleId) -> BlogResult<Option<Article>>;

    /// All articles, newest first, with authors and comments resolved
    async fn list_all(&self) -> BlogResult<Vec<ArticleDetail>>;

    /// Articles owned by one author, newest first, same shape as `list_all`
    async fn list_by_author(&self, author_id: &UserId) -> BlogResult<Vec<ArticleDetail>>;

    /// Single article with author and comments resolved
    async fn get_detail(&self, article_id: ArticleId) -> BlogResult<Option<ArticleDetail>>;

    /// Persist an edited article (wholesale column update)
    async fn update(&self, article: &Article) -> BlogResult<()>;

    /// Delete an article and all of its comments in one transaction.
    /// Returns the number of comments removed.
    async fn delete_with_comments(&self, article_id: ArticleId) -> BlogResult<u64>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Persist a new comment
    async fn create(&self, comment: &Comment) -> BlogResult<()>;

    /// Find a comment by ID
    async fn find_by_id(&self, comment_id: CommentId) -> BlogResult<Option<Comment>>;

    /// Delete every comment of an article, returning the count deleted.
    /// Only reached through the article-deletion cascade.
    async fn delete_all_for_article(&self, article_id: ArticleId) -> BlogResult<u64>;
}

/// Upload storage contract.
///
/// Implementations store the bytes and return the public path that goes
/// into the article's `image` field; the binary never touches the
/// database.
#[trait_variant::make(MediaStore: Send)]
pub trait LocalMediaStore {
    async fn save(&self, data: Vec<u8>, original_name: &str) -> BlogResult<String>;
}
