//! Auth Page Templates

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use kernel::error::app_error::AppError;

/// Login form page
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    /// Inline error message; empty when there is none
    pub error: String,
}

/// Registration form page
#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    /// Inline error message; empty when there is none
    pub error: String,
}

/// Render a template to a response with the given status
pub fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::internal("Template rendering failed")
            .with_source(e)
            .into_response(),
    }
}
