//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;

pub use auth::{PasswordError, PasswordService};
pub use repository::{BaseRepository, PostRepository, PostTypeRepository, UserRepository};
