//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod register;
pub mod sign_in;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use token::{TokenClaims, TokenCodec};
