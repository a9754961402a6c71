//! Database connection management and repositories.

mod connections;
mod sql_base;
mod sql_repo;
mod write;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use sql_base::SqlRepository;
pub use sql_repo::{SqlPostRepository, SqlPostTypeRepository, SqlUserRepository};
pub use write::WriteModel;
