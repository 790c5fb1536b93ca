//! Blog Page Templates
//!
//! Templates take flat view models (strings, bools, vecs) so the HTML
//! stays free of domain types.

use askama::Template;
use auth::application::token::TokenClaims;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use kernel::error::app_error::AppError;

use crate::domain::repository::{ArticleDetail, CommentWithAuthor};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Who is looking at the page, for the navigation bar
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    pub authenticated: bool,
    pub user_name: String,
    pub is_admin: bool,
}

impl Viewer {
    pub fn from_claims(claims: Option<&TokenClaims>) -> Self {
        match claims {
            Some(claims) => Self {
                authenticated: true,
                user_name: claims.user_name.clone(),
                is_admin: claims.user_role.is_admin(),
            },
            None => Self::default(),
        }
    }
}

/// One article, flattened for rendering
#[derive(Debug, Clone)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub comment_count: usize,
    pub tags: Vec<String>,
    /// Served image path; empty when the article has none
    pub image: String,
}

impl ArticleCard {
    pub fn from_detail(detail: &ArticleDetail) -> Self {
        Self {
            id: detail.article.article_id.to_string(),
            title: detail.article.title.clone(),
            content: detail.article.content.clone(),
            author: detail.author_name.clone(),
            created_at: detail.article.created_at.format(DATE_FORMAT).to_string(),
            comment_count: detail.comments.len(),
            tags: detail.article.tags.clone(),
            image: detail.article.image.clone().unwrap_or_default(),
        }
    }
}

/// One comment, flattened for rendering
#[derive(Debug, Clone)]
pub struct CommentView {
    pub author: String,
    pub content: String,
    pub created_at: String,
}

impl CommentView {
    pub fn from_comment(comment: &CommentWithAuthor) -> Self {
        Self {
            author: comment.author_name.clone(),
            content: comment.comment.content.clone(),
            created_at: comment.comment.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

/// GET / - all articles
#[derive(Template)]
#[template(path = "article_list.html")]
pub struct ArticleListTemplate {
    pub title: String,
    pub viewer: Viewer,
    pub articles: Vec<ArticleCard>,
}

/// GET /my-articles - the caller's articles
#[derive(Template)]
#[template(path = "my_articles.html")]
pub struct MyArticlesTemplate {
    pub title: String,
    pub viewer: Viewer,
    pub articles: Vec<ArticleCard>,
}

/// GET /create and GET /edit/{id} - shared create/edit form
#[derive(Template)]
#[template(path = "article_form.html")]
pub struct ArticleFormTemplate {
    pub title: String,
    pub viewer: Viewer,
    pub heading: String,
    /// Form POST target (`/create` or `/edit/{id}`)
    pub action: String,
    /// Inline error message; empty when there is none
    pub error: String,
    pub title_value: String,
    pub content_value: String,
    pub tags_value: String,
    /// Currently stored image path; empty when there is none
    pub image_value: String,
}

/// GET /article/{id} - single article with comments
#[derive(Template)]
#[template(path = "article_detail.html")]
pub struct ArticleDetailTemplate {
    pub title: String,
    pub viewer: Viewer,
    pub article: ArticleCard,
    pub comments: Vec<CommentView>,
}

/// Fallback 404 page
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// Render a template to a response with the given status
pub fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::internal("Template rendering failed")
            .with_source(e)
            .into_response(),
    }
}
