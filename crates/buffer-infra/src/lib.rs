//! # Buffer Infrastructure
//!
//! Concrete implementations of the ports defined in `buffer-core`:
//! SeaORM-backed repositories (PostgreSQL or SQLite) and Argon2 password hashing.

pub mod auth;
pub mod database;

pub use auth::Argon2PasswordService;
pub use database::{DatabaseConfig, SqlPostRepository, SqlPostTypeRepository, SqlUserRepository};
