//! Category entity.
//!
//! Categories never reference a game directly; the association is always
//! many-to-many through `game_categories`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub slug: String,
    pub is_active: bool,

    pub created_at: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_categories::Entity")]
    GameCategories,
}

impl Related<super::game_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
