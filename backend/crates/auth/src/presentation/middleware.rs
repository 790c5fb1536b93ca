//! Auth Middleware
//!
//! Per-request access-control gates. Token verification is purely local
//! (signature + expiry), so none of these touch the database.
//!
//! State machine per request: `Unauthenticated -> {Anonymous,
//! Authenticated}`. Only a structurally valid, signature-valid,
//! non-expired token transitions to Authenticated; everything else is
//! Anonymous on optional paths and a login redirect on required paths.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{TokenClaims, TokenCodec};

/// Login page used as the target for unauthenticated redirects
const LOGIN_PATH: &str = "/auth/login";

/// Middleware state
#[derive(Clone)]
pub struct AuthGate {
    pub config: Arc<AuthConfig>,
}

impl AuthGate {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Verified identity attached to the request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser(pub TokenClaims);

/// Middleware that requires a valid session token.
///
/// - No cookie: redirect to the login page (not an error body)
/// - Invalid/expired token: clear the cookie, redirect to the login page
/// - Valid token: attach [`CurrentUser`] and continue
pub async fn require_auth(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = platform::cookie::extract_cookie(req.headers(), &gate.config.token_cookie_name);

    let Some(token) = token else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    match TokenCodec::new(gate.config.clone()).verify(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(CurrentUser(claims));
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session token, redirecting to login");
            let mut res = Redirect::to(LOGIN_PATH).into_response();
            res.headers_mut().insert(
                header::SET_COOKIE,
                platform::cookie::clear_cookie_header(&gate.config.cookie()),
            );
            res
        }
    }
}

/// Middleware that attaches identity when a valid token is present but
/// lets anonymous requests through.
///
/// The cookie is cleared only when a token was presented and failed
/// verification, so the client does not keep retrying a dead token.
pub async fn optional_auth(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = platform::cookie::extract_cookie(req.headers(), &gate.config.token_cookie_name);

    let mut clear_cookie = false;
    if let Some(token) = token {
        match TokenCodec::new(gate.config.clone()).verify(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(CurrentUser(claims));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Discarding invalid session token");
                clear_cookie = true;
            }
        }
    }

    let mut res = next.run(req).await;
    if clear_cookie {
        res.headers_mut().append(
            header::SET_COOKIE,
            platform::cookie::clear_cookie_header(&gate.config.cookie()),
        );
    }
    res
}

/// Middleware that requires the admin role.
///
/// Must run inside [`require_auth`]; a missing identity means the auth
/// gate was skipped and the request is bounced to login rather than
/// served.
pub async fn require_admin(req: Request, next: Next) -> Response {
    match req.extensions().get::<CurrentUser>() {
        Some(user) if user.0.user_role.is_admin() => next.run(req).await,
        Some(user) => {
            tracing::debug!(user_name = %user.0.user_name, "Non-admin denied admin route");
            AppError::forbidden("Access denied. Admin privileges required.").into_response()
        }
        None => Redirect::to(LOGIN_PATH).into_response(),
    }
}
