//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, optional pepper)
//! - Cookie management

pub mod cookie;
pub mod password;
