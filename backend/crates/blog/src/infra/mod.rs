//! Infrastructure Layer
//!
//! Database implementation and local upload storage.

pub mod media;
pub mod postgres;

pub use media::FsMediaStore;
pub use postgres::PgBlogRepository;
