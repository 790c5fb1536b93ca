//! HTTP Handlers
//!
//! Auth pages and form endpoints. Failures re-render the originating form
//! with an inline message; success sets the token cookie and redirects.

use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::{clear_cookie_header, set_cookie_header};

use crate::application::config::AuthConfig;
use crate::application::{RegisterInput, RegisterUseCase, SignInInput, SignInUseCase};
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::dto::{LoginForm, RegisterForm};
use crate::presentation::templates::{LoginTemplate, RegisterTemplate, render};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + CredentialsRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Pages
// ============================================================================

/// GET /auth/login
pub async fn login_page() -> Response {
    render(
        StatusCode::OK,
        &LoginTemplate {
            error: String::new(),
        },
    )
}

/// GET /auth/register
pub async fn register_page() -> Response {
    render(
        StatusCode::OK,
        &RegisterTemplate {
            error: String::new(),
        },
    )
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> Response
where
    R: UserRepository + CredentialsRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        user_name: form.username,
        email: form.email,
        password: form.password,
        role: form.role,
    };

    match use_case.execute(input).await {
        Ok(output) => redirect_with_cookie(&state.config, &output.token, "/"),
        Err(err @ (AuthError::DuplicateIdentity | AuthError::Validation(_))) => {
            err.log();
            render(
                StatusCode::BAD_REQUEST,
                &RegisterTemplate {
                    error: err.to_string(),
                },
            )
        }
        Err(err) => {
            err.log();
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                &RegisterTemplate {
                    error: "Registration failed. Please try again.".to_string(),
                },
            )
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository + CredentialsRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignInInput {
        user_name: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => redirect_with_cookie(&state.config, &output.token, "/"),
        Err(err @ AuthError::InvalidCredentials) => {
            err.log();
            render(
                StatusCode::BAD_REQUEST,
                &LoginTemplate {
                    error: err.to_string(),
                },
            )
        }
        Err(err) => {
            err.log();
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                &LoginTemplate {
                    error: "Login failed. Please try again.".to_string(),
                },
            )
        }
    }
}

// ============================================================================
// Logout
// ============================================================================

/// POST /auth/logout
///
/// Tokens are stateless, so logging out is purely clearing the cookie.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> Response
where
    R: UserRepository + CredentialsRepository + Clone + Send + Sync + 'static,
{
    let mut res = Redirect::to("/auth/login").into_response();
    res.headers_mut().insert(
        header::SET_COOKIE,
        clear_cookie_header(&state.config.cookie()),
    );
    res
}

// ============================================================================
// Helper Functions
// ============================================================================

fn redirect_with_cookie(config: &AuthConfig, token: &str, location: &str) -> Response {
    let mut res = Redirect::to(location).into_response();
    res.headers_mut().insert(
        header::SET_COOKIE,
        set_cookie_header(&config.cookie(), token),
    );
    res
}
