use async_trait::async_trait;

use crate::domain::{NewPost, NewPostType, NewUser, Post, PostType, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `T` is the stored record, `N` its writable fields and `ID` the primary key.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync
where
    T: Send + 'static,
    N: Send + 'static,
    ID: Send + Copy + 'static,
{
    /// Fetch every record, ordered by primary key.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new record and return it with its server-assigned fields.
    async fn insert(&self, new: N) -> Result<T, RepoError>;

    /// Replace the writable fields of an existing record.
    ///
    /// Returns `RepoError::NotFound` if no record has this ID.
    async fn update(&self, id: ID, changes: N) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Returns `RepoError::NotFound` if no record has this ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Check whether a record with this ID exists.
    async fn exists(&self, id: ID) -> Result<bool, RepoError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// User repository with lookups on the unique columns.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser, i32> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by their username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Post type repository.
#[async_trait]
pub trait PostTypeRepository: BaseRepository<PostType, NewPostType, i32> {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {
    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn find_by_post_type(&self, post_type_id: i32) -> Result<Vec<Post>, RepoError>;
}
