//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use buffer_core::ports::{PasswordService, PostRepository, PostTypeRepository, UserRepository};
use buffer_infra::{
    Argon2PasswordService, SqlPostRepository, SqlPostTypeRepository, SqlUserRepository,
};

/// Shared application state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub post_types: Arc<dyn PostTypeRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Wire the SQL repositories over a single connection pool.
    pub fn new(db: DbConn) -> Self {
        tracing::info!("Application state initialized");

        Self {
            users: Arc::new(SqlUserRepository::new(db.clone())),
            post_types: Arc::new(SqlPostTypeRepository::new(db.clone())),
            posts: Arc::new(SqlPostRepository::new(db)),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }
}
