//! Presentation Layer
//!
//! HTTP handlers, form intake, templates, and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod templates;

pub use handlers::BlogAppState;
pub use router::blog_router;
