//! Post entity for SeaORM.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use buffer_core::domain::{NewPost, Post};

use super::super::write::WriteModel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image: Option<String>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub post_type_id: i32,
    pub author_id: i32,
    pub date_posted: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post_type::Entity",
        from = "Column::PostTypeId",
        to = "super::post_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PostType,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::post_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostType.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            title: model.title,
            content: model.content,
            post_type: model.post_type_id,
            author: model.author_id,
            date_posted: model.date_posted.into(),
        }
    }
}

impl WriteModel<ActiveModel, i32> for NewPost {
    fn into_insert(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            image: Set(self.image),
            title: Set(self.title),
            content: Set(self.content),
            post_type_id: Set(self.post_type),
            author_id: Set(self.author),
            date_posted: Set(Utc::now().into()),
        }
    }

    // date_posted is write-once
    fn into_update(self, id: i32) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            image: Set(self.image),
            title: Set(self.title),
            content: Set(self.content),
            post_type_id: Set(self.post_type),
            author_id: Set(self.author),
            date_posted: NotSet,
        }
    }
}
