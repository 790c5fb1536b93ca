//! Form DTOs
//!
//! Field names match the HTML form inputs.

use serde::Deserialize;

/// Registration form
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Optional role selector; only `"admin"` grants admin
    #[serde(default)]
    pub role: Option<String>,
}

/// Login form
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
