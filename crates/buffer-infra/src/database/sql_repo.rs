//! SQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use buffer_core::domain::{Post, User};
use buffer_core::error::RepoError;
use buffer_core::ports::{PostRepository, PostTypeRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_type::Entity as PostTypeEntity;
use super::entity::user::{self, Entity as UserEntity};
use super::sql_base::{SqlRepository, map_db_err};

/// SQL user repository.
pub type SqlUserRepository = SqlRepository<UserEntity>;

/// SQL post type repository.
pub type SqlPostTypeRepository = SqlRepository<PostTypeEntity>;

/// SQL post repository.
pub type SqlPostRepository = SqlRepository<PostEntity>;

/// Mask an email for logging to avoid PII in logs.
pub(crate) fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}@{domain}")
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostTypeRepository for SqlPostTypeRepository {}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_post_type(&self, post_type_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::PostTypeId.eq(post_type_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
