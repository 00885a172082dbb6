//! Game data repository.

use crate::database::dto::{GameInput, GameUpdate};
use crate::entity::games;
use crate::entity::prelude::*;
use sea_orm::*;
use serde::{Deserialize, Serialize};

/// Active-flag filter for list views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Active,
    Inactive,
}

/// Game data repository.
pub struct GamesRepository;

impl GamesRepository {
    // ==================== CRUD ====================

    /// Insert a game and return the full stored record.
    pub async fn insert(db: &DatabaseConnection, game: GameInput) -> Result<games::Model, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let game_active = games::ActiveModel {
            id: NotSet,
            name: Set(game.name),
            description: Set(game.description),
            is_active: Set(game.is_active),
            created_at: Set(Some(now)),
        };

        game_active.insert(db).await
    }

    /// Partial update; omitted fields stay unchanged, the creation
    /// timestamp is never touched.
    pub async fn update(
        db: &DatabaseConnection,
        game_id: i32,
        updates: GameUpdate,
    ) -> Result<games::Model, DbErr> {
        let game_active = games::ActiveModel {
            id: Set(game_id),
            name: updates.name.map_or(NotSet, Set),
            description: updates.description.map_or(NotSet, Set),
            is_active: updates.is_active.map_or(NotSet, Set),
            ..Default::default()
        };

        game_active.update(db).await
    }

    /// Delete a game.
    ///
    /// Join rows pointing at the game are left in place on purpose; the
    /// category read side drops them as dangling references.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Games::delete_by_id(id).exec(db).await
    }

    // ==================== Queries ====================

    /// Find a game by ID.
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<games::Model>, DbErr> {
        Games::find_by_id(id).one(db).await
    }

    /// All games, newest first, with optional status filter and name
    /// substring search.
    pub async fn find_all(
        db: &DatabaseConnection,
        status: StatusFilter,
        search: Option<&str>,
    ) -> Result<Vec<games::Model>, DbErr> {
        let mut query = Games::find();

        query = match status {
            StatusFilter::All => query,
            StatusFilter::Active => query.filter(games::Column::IsActive.eq(true)),
            StatusFilter::Inactive => query.filter(games::Column::IsActive.eq(false)),
        };

        if let Some(term) = search {
            if !term.is_empty() {
                query = query.filter(games::Column::Name.contains(term));
            }
        }

        query
            .order_by_desc(games::Column::CreatedAt)
            .order_by_desc(games::Column::Id)
            .all(db)
            .await
    }

    /// Total game count.
    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Games::find().count(db).await
    }
}
