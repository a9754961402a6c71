use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityName, EntityTrait,
    IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, SqlErr,
};

use buffer_core::error::RepoError;
use buffer_core::ports::BaseRepository;

use super::write::WriteModel;

/// Generic SQL repository implementation, shared by every entity.
pub struct SqlRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SqlRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Classify a SeaORM error into the repository taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => return RepoError::Constraint(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return RepoError::Constraint(msg),
        _ => {}
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl<E, T, N, ID> BaseRepository<T, N, ID> for SqlRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Copy + std::fmt::Debug + 'static,
    T: From<E::Model> + Send + Sync + 'static,
    N: WriteModel<E::ActiveModel, ID> + Send + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        let rows = query.all(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(table = E::default().table_name(), count = rows.len(), "Fetched all rows");

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new: N) -> Result<T, RepoError> {
        let model = new.into_insert().insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(table = E::default().table_name(), "Inserted row");

        Ok(model.into())
    }

    async fn update(&self, id: ID, changes: N) -> Result<T, RepoError> {
        let model = changes
            .into_update(id)
            .update(&self.db)
            .await
            .map_err(map_db_err)?;
        tracing::debug!(table = E::default().table_name(), ?id, "Updated row");

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(table = E::default().table_name(), ?id, "Deleted row");
        Ok(())
    }
}
