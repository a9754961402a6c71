//! Post type entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use buffer_core::domain::{NewPostType, PostType};

use super::super::write::WriteModel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
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

impl From<Model> for PostType {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl WriteModel<ActiveModel, i32> for NewPostType {
    fn into_insert(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
        }
    }

    fn into_update(self, id: i32) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(self.name),
        }
    }
}
