//! Game entity.
//!
//! A game is the top-level content unit of the party app. Categories are
//! attached through the `game_categories` join table, packs through a
//! direct foreign key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,

    pub created_at: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_categories::Entity")]
    GameCategories,
    #[sea_orm(has_many = "super::packs::Entity")]
    Packs,
}

impl Related<super::game_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameCategories.def()
    }
}

impl Related<super::packs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Packs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
