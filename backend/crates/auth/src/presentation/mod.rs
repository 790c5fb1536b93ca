//! Presentation Layer
//!
//! HTTP handlers, form DTOs, templates, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod templates;

pub use handlers::AuthAppState;
pub use middleware::{AuthGate, CurrentUser, optional_auth, require_admin, require_auth};
pub use router::{auth_router, auth_router_generic};
