//! SeaORM entity definitions.

pub mod post;
pub mod post_type;
pub mod user;
