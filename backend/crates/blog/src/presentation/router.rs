//! Blog Router
//!
//! Route table with per-route access gates:
//! - `/` and `/article/{id}` attach identity when present (optional auth)
//! - `/my-articles` and commenting require authentication
//! - `/create`, `/edit/{id}`, `/delete/{id}` additionally require admin
//!
//! Layer order matters: `require_auth` wraps `require_admin`, so the
//! authentication gate always runs first and the admin gate can rely on
//! an attached identity.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::presentation::middleware::{AuthGate, optional_auth, require_admin, require_auth};

use crate::domain::repository::{ArticleRepository, CommentRepository, MediaStore};
use crate::presentation::handlers::{self, BlogAppState};

/// Create the blog router for any repository/media implementation
pub fn blog_router<R, M>(repo: Arc<R>, media: Arc<M>, gate: AuthGate) -> Router
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let state = BlogAppState { repo, media };

    let public = Router::new()
        .route("/", get(handlers::list_articles::<R, M>))
        .route("/article/{id}", get(handlers::article_detail::<R, M>))
        .route_layer(middleware::from_fn_with_state(gate.clone(), optional_auth));

    let authenticated = Router::new()
        .route("/my-articles", get(handlers::my_articles::<R, M>))
        .route("/article/{id}/comment", post(handlers::add_comment::<R, M>))
        .route_layer(middleware::from_fn_with_state(gate.clone(), require_auth));

    let admin = Router::new()
        .route(
            "/create",
            get(handlers::create_form).post(handlers::create_article::<R, M>),
        )
        .route(
            "/edit/{id}",
            get(handlers::edit_form::<R, M>).post(handlers::update_article::<R, M>),
        )
        .route("/delete/{id}", post(handlers::delete_article::<R, M>))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(gate, require_auth));

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(admin)
        .with_state(state)
}
