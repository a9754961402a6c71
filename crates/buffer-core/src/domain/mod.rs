//! Domain entities - the core business objects.

mod post;
mod post_type;
mod user;

pub use post::{NewPost, Post};
pub use post_type::{NewPostType, PostType};
pub use user::{NewUser, User};
