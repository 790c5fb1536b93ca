//! HTTP Handlers
//!
//! Page handlers for the article and comment surface. Ownership checks
//! live in the use cases (and inline for the edit form); role and
//! authentication gating happens in the router's middleware stack.

use axum::extract::{Extension, Form, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;
use uuid::Uuid;

use auth::domain::value_object::user_id::UserId;
use auth::presentation::middleware::CurrentUser;

use crate::application::{
    AddCommentUseCase, CreateArticleInput, CreateArticleUseCase, DeleteArticleUseCase,
    GetArticleUseCase, ListArticlesUseCase, UpdateArticleInput, UpdateArticleUseCase,
};
use crate::domain::policy;
use crate::domain::repository::{ArticleRepository, CommentRepository, MediaStore};
use crate::domain::value_object::article_id::ArticleId;
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{ArticleFormData, CommentForm, parse_article_form};
use crate::presentation::templates::{
    ArticleCard, ArticleDetailTemplate, ArticleFormTemplate, ArticleListTemplate, CommentView,
    MyArticlesTemplate, NotFoundTemplate, Viewer, render,
};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R, M>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub media: Arc<M>,
}

// ============================================================================
// Listings
// ============================================================================

/// GET /
pub async fn list_articles<R, M>(
    State(state): State<BlogAppState<R, M>>,
    user: Option<Extension<CurrentUser>>,
) -> Response
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let viewer = Viewer::from_claims(user.as_ref().map(|Extension(CurrentUser(claims))| claims));

    match ListArticlesUseCase::new(state.repo.clone()).list_all().await {
        Ok(details) => render(
            StatusCode::OK,
            &ArticleListTemplate {
                title: "All Articles".to_string(),
                viewer,
                articles: details.iter().map(ArticleCard::from_detail).collect(),
            },
        ),
        Err(err) => err.into_response(),
    }
}

/// GET /my-articles
pub async fn my_articles<R, M>(
    State(state): State<BlogAppState<R, M>>,
    Extension(user): Extension<CurrentUser>,
) -> Response
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let author_id = UserId::from_uuid(user.0.user_id);

    match ListArticlesUseCase::new(state.repo.clone())
        .list_by_author(&author_id)
        .await
    {
        Ok(details) => render(
            StatusCode::OK,
            &MyArticlesTemplate {
                title: "My Articles".to_string(),
                viewer: Viewer::from_claims(Some(&user.0)),
                articles: details.iter().map(ArticleCard::from_detail).collect(),
            },
        ),
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Create
// ============================================================================

/// GET /create
pub async fn create_form(Extension(user): Extension<CurrentUser>) -> Response {
    render(
        StatusCode::OK,
        &creation_form(Viewer::from_claims(Some(&user.0)), ArticleFormData::default(), ""),
    )
}

/// POST /create
pub async fn create_article<R, M>(
    State(state): State<BlogAppState<R, M>>,
    Extension(user): Extension<CurrentUser>,
    multipart: Multipart,
) -> Response
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let form = match parse_article_form(multipart).await {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };

    let image = match store_upload(&state.media, &form).await {
        Ok(image) => image,
        Err(err) => return err.into_response(),
    };

    let input = CreateArticleInput {
        author_id: UserId::from_uuid(user.0.user_id),
        author_role: user.0.user_role,
        title: form.title.clone(),
        content: form.content.clone(),
        tags: form.tags.clone(),
        image,
    };

    match CreateArticleUseCase::new(state.repo.clone()).execute(input).await {
        Ok(_) => Redirect::to("/my-articles").into_response(),
        Err(err @ BlogError::Validation(_)) => {
            err.log();
            render(
                StatusCode::BAD_REQUEST,
                &creation_form(Viewer::from_claims(Some(&user.0)), form, &err.to_string()),
            )
        }
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Edit
// ============================================================================

/// GET /edit/{id}
pub async fn edit_form<R, M>(
    State(state): State<BlogAppState<R, M>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Response
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let article = match ArticleRepository::find_by_id(&*state.repo, ArticleId::from_uuid(id)).await
    {
        Ok(Some(article)) => article,
        Ok(None) => return BlogError::NotFound.into_response(),
        Err(err) => return err.into_response(),
    };

    let requester_id = UserId::from_uuid(user.0.user_id);
    if !policy::owns(&article, &requester_id) {
        return BlogError::Forbidden("You can only edit your own articles.".to_string())
            .into_response();
    }

    render(
        StatusCode::OK,
        &ArticleFormTemplate {
            title: "Edit Article".to_string(),
            viewer: Viewer::from_claims(Some(&user.0)),
            heading: "Edit Article".to_string(),
            action: format!("/edit/{}", article.article_id),
            error: String::new(),
            title_value: article.title,
            content_value: article.content,
            tags_value: article.tags.join(", "),
            image_value: article.image.unwrap_or_default(),
        },
    )
}

/// POST /edit/{id}
pub async fn update_article<R, M>(
    State(state): State<BlogAppState<R, M>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Response
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let form = match parse_article_form(multipart).await {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };

    let image = match store_upload(&state.media, &form).await {
        Ok(image) => image,
        Err(err) => return err.into_response(),
    };

    let requester_id = UserId::from_uuid(user.0.user_id);
    let input = UpdateArticleInput {
        title: form.title.clone(),
        content: form.content.clone(),
        tags: form.tags.clone(),
        image,
    };

    match UpdateArticleUseCase::new(state.repo.clone())
        .execute(ArticleId::from_uuid(id), &requester_id, input)
        .await
    {
        Ok(_) => Redirect::to("/my-articles").into_response(),
        Err(err @ BlogError::Validation(_)) => {
            err.log();
            render(
                StatusCode::BAD_REQUEST,
                &ArticleFormTemplate {
                    title: "Edit Article".to_string(),
                    viewer: Viewer::from_claims(Some(&user.0)),
                    heading: "Edit Article".to_string(),
                    action: format!("/edit/{id}"),
                    error: err.to_string(),
                    title_value: form.title,
                    content_value: form.content,
                    tags_value: form.tags,
                    image_value: String::new(),
                },
            )
        }
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Delete
// ============================================================================

/// POST /delete/{id}
pub async fn delete_article<R, M>(
    State(state): State<BlogAppState<R, M>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Response
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let requester_id = UserId::from_uuid(user.0.user_id);

    match DeleteArticleUseCase::new(state.repo.clone())
        .execute(ArticleId::from_uuid(id), &requester_id)
        .await
    {
        Ok(()) => Redirect::to("/my-articles").into_response(),
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Detail + comments
// ============================================================================

/// GET /article/{id}
pub async fn article_detail<R, M>(
    State(state): State<BlogAppState<R, M>>,
    user: Option<Extension<CurrentUser>>,
    Path(id): Path<Uuid>,
) -> Response
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let viewer = Viewer::from_claims(user.as_ref().map(|Extension(CurrentUser(claims))| claims));

    match GetArticleUseCase::new(state.repo.clone())
        .execute(ArticleId::from_uuid(id))
        .await
    {
        Ok(detail) => render(
            StatusCode::OK,
            &ArticleDetailTemplate {
                title: detail.article.title.clone(),
                viewer,
                article: ArticleCard::from_detail(&detail),
                comments: detail.comments.iter().map(CommentView::from_comment).collect(),
            },
        ),
        Err(err) => err.into_response(),
    }
}

/// POST /article/{id}/comment
pub async fn add_comment<R, M>(
    State(state): State<BlogAppState<R, M>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Form(form): Form<CommentForm>,
) -> Response
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let author_id = UserId::from_uuid(user.0.user_id);

    match AddCommentUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(ArticleId::from_uuid(id), &author_id, form.content)
        .await
    {
        // Back to the article either way; only a dead article 404s
        Ok(_) => Redirect::to(&format!("/article/{id}")).into_response(),
        Err(err @ BlogError::NotFound) => err.into_response(),
        Err(err) => {
            err.log();
            Redirect::to(&format!("/article/{id}")).into_response()
        }
    }
}

// ============================================================================
// Fallback
// ============================================================================

/// Fallback for every unmatched route
pub async fn not_found() -> Response {
    render(StatusCode::NOT_FOUND, &NotFoundTemplate)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Store the uploaded image, if the form carried one
async fn store_upload<M>(media: &Arc<M>, form: &ArticleFormData) -> BlogResult<Option<String>>
where
    M: MediaStore + Clone + Send + Sync + 'static,
{
    match &form.image {
        Some((name, bytes)) => Ok(Some(media.save(bytes.clone(), name).await?)),
        None => Ok(None),
    }
}

/// The creation form, optionally re-filled after a validation failure
fn creation_form(viewer: Viewer, form: ArticleFormData, error: &str) -> ArticleFormTemplate {
    ArticleFormTemplate {
        title: "Create New Article".to_string(),
        viewer,
        heading: "Create New Article".to_string(),
        action: "/create".to_string(),
        error: error.to_string(),
        title_value: form.title,
        content_value: form.content,
        tags_value: form.tags,
        image_value: String::new(),
    }
}
