use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - the primary content record.
///
/// `post_type` and `author` are foreign keys resolved by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub image: Option<String>,
    pub title: String,
    pub content: String,
    pub post_type: i32,
    pub author: i32,
    pub date_posted: DateTime<Utc>,
}

/// Writable fields of a post, used for both insert and full-replacement update.
///
/// `date_posted` is absent: it is assigned once by storage on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub image: Option<String>,
    pub title: String,
    pub content: String,
    pub post_type: i32,
    pub author: i32,
}

impl Post {
    /// The writable part of this post, as it would be re-submitted on update.
    pub fn to_new(&self) -> NewPost {
        NewPost {
            image: self.image.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            post_type: self.post_type,
            author: self.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_new_drops_server_assigned_fields() {
        let post = Post {
            id: 3,
            image: Some("posts/cover.png".into()),
            title: "Launch".into(),
            content: "We are live".into(),
            post_type: 1,
            author: 2,
            date_posted: Utc::now(),
        };

        let new = post.to_new();

        assert_eq!(new.title, "Launch");
        assert_eq!(new.image.as_deref(), Some("posts/cover.png"));
        assert_eq!((new.post_type, new.author), (1, 2));
    }
}
