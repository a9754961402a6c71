//! User entity for SeaORM.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use buffer_core::domain::{NewUser, User};

use super::super::write::WriteModel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub date_joined: DateTimeWithTimeZone,
    pub last_login: DateTimeWithTimeZone,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            username: model.username,
            password_hash: model.password,
            date_joined: model.date_joined.into(),
            last_login: model.last_login.into(),
            is_admin: model.is_admin,
            is_staff: model.is_staff,
            is_active: model.is_active,
            is_superuser: model.is_superuser,
        }
    }
}

impl WriteModel<ActiveModel, i32> for NewUser {
    fn into_insert(self) -> ActiveModel {
        let now = Utc::now();
        ActiveModel {
            id: NotSet,
            email: Set(self.email),
            username: Set(self.username),
            password: Set(self.password_hash),
            date_joined: Set(now.into()),
            last_login: Set(now.into()),
            is_admin: Set(self.is_admin),
            is_staff: Set(self.is_staff),
            is_active: Set(self.is_active),
            is_superuser: Set(self.is_superuser),
        }
    }

    // date_joined is write-once; last_login moves on every save
    fn into_update(self, id: i32) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            email: Set(self.email),
            username: Set(self.username),
            password: Set(self.password_hash),
            date_joined: NotSet,
            last_login: Set(Utc::now().into()),
            is_admin: Set(self.is_admin),
            is_staff: Set(self.is_staff),
            is_active: Set(self.is_active),
            is_superuser: Set(self.is_superuser),
        }
    }
}
