//! Content pack repository.

use crate::database::dto::{PackInput, PackUpdate};
use crate::entity::packs;
use crate::entity::prelude::*;
use sea_orm::*;

/// Pack data repository.
pub struct PacksRepository;

impl PacksRepository {
    // ==================== CRUD ====================

    /// Insert a pack and return the full stored record.
    pub async fn insert(db: &DatabaseConnection, pack: PackInput) -> Result<packs::Model, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let pack_active = packs::ActiveModel {
            id: NotSet,
            game_id: Set(pack.game_id),
            name: Set(pack.name),
            description: Set(pack.description),
            is_premium: Set(pack.is_premium),
            is_active: Set(pack.is_active),
            created_at: Set(Some(now)),
        };

        pack_active.insert(db).await
    }

    /// Partial update; omitted fields stay unchanged.
    pub async fn update(
        db: &DatabaseConnection,
        pack_id: i32,
        updates: PackUpdate,
    ) -> Result<packs::Model, DbErr> {
        let pack_active = packs::ActiveModel {
            id: Set(pack_id),
            game_id: updates.game_id.map_or(NotSet, Set),
            name: updates.name.map_or(NotSet, Set),
            description: updates.description.map_or(NotSet, Set),
            is_premium: updates.is_premium.map_or(NotSet, Set),
            is_active: updates.is_active.map_or(NotSet, Set),
            ..Default::default()
        };

        pack_active.update(db).await
    }

    /// Delete a pack.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Packs::delete_by_id(id).exec(db).await
    }

    // ==================== Queries ====================

    /// Find a pack by ID.
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<packs::Model>, DbErr> {
        Packs::find_by_id(id).one(db).await
    }

    /// All packs, newest first, optionally scoped to one game.
    pub async fn find_all(
        db: &DatabaseConnection,
        game_id: Option<i32>,
    ) -> Result<Vec<packs::Model>, DbErr> {
        let mut query = Packs::find();

        if let Some(game_id) = game_id {
            query = query.filter(packs::Column::GameId.eq(game_id));
        }

        query
            .order_by_desc(packs::Column::CreatedAt)
            .order_by_desc(packs::Column::Id)
            .all(db)
            .await
    }

    /// Total pack count.
    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Packs::find().count(db).await
    }
}
