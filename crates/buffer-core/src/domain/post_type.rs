use serde::{Deserialize, Serialize};

/// Post type - a free-text category label attached to posts.
///
/// Names are not unique. Deleting a type deletes every post that references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostType {
    pub id: i32,
    pub name: String,
}

/// Writable fields of a post type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPostType {
    pub name: String,
}

impl NewPostType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
