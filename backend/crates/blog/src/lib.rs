//! Blog Backend Module
//!
//! Articles and comments over the shared user identity.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, ownership policy, repository traits
//! - `application/` - Use cases (list/create/update/delete/comment)
//! - `infra/` - PostgreSQL repository and local upload storage
//! - `presentation/` - HTTP handlers, pages, router
//!
//! ## Ownership Model
//! Every article has exactly one author, fixed at creation. Only the
//! owning author may mutate or delete it; deletion cascades to the
//! article's comments inside one transaction. Comment and article lists
//! are computed by query rather than kept as denormalized id arrays.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{BlogError, BlogResult};
pub use infra::media::FsMediaStore;
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::blog_router;

#[cfg(test)]
mod tests;
