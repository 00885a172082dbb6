//! Category repository and the category↔game relationship pipeline.
//!
//! A category's game set is many-to-many through `game_categories` and is
//! always written as a whole: the desired set replaces whatever rows exist
//! (delete all, insert all), with no diffing. Reads assemble a denormalized
//! [`CategoryWithGames`] view from the current join-table state; the view
//! is derived on every read and never persisted.

use crate::database::dto::CategoryInput;
use crate::entity::prelude::*;
use crate::entity::{categories, game_categories, games};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A category together with its currently associated games, newest-first
/// category ordering, insertion-ordered games. `game_ids` parallels
/// `games`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithGames {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
    pub created_at: Option<i32>,
    pub games: Vec<games::Model>,
    pub game_ids: Vec<i32>,
}

impl CategoryWithGames {
    fn assemble(category: categories::Model, games: Vec<games::Model>) -> Self {
        let game_ids = games.iter().map(|g| g.id).collect();
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            is_active: category.is_active,
            created_at: category.created_at,
            games,
            game_ids,
        }
    }
}

/// Category data repository.
pub struct CategoriesRepository;

impl CategoriesRepository {
    // ==================== Category queries ====================

    /// Find a category by ID.
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<categories::Model>, DbErr> {
        Categories::find_by_id(id).one(db).await
    }

    /// All categories, newest first (ID as tiebreak within one second).
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<categories::Model>, DbErr> {
        Categories::find()
            .order_by_desc(categories::Column::CreatedAt)
            .order_by_desc(categories::Column::Id)
            .all(db)
            .await
    }

    /// Check whether a category exists.
    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        Ok(Categories::find_by_id(id).count(db).await? > 0)
    }

    /// Total category count.
    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Categories::find().count(db).await
    }

    // ==================== Read assembly ====================

    /// All categories with their associated games attached.
    ///
    /// The join rows for every category are fetched in one batched query
    /// with the game record embedded per row, so the read is a constant
    /// number of round trips regardless of category count. A join row
    /// whose game no longer exists is dropped, not an error.
    pub async fn find_all_with_games(
        db: &DatabaseConnection,
    ) -> Result<Vec<CategoryWithGames>, DbErr> {
        let categories = Categories::find()
            .order_by_desc(categories::Column::CreatedAt)
            .order_by_desc(categories::Column::Id)
            .all(db)
            .await?;

        let links = GameCategories::find()
            .find_also_related(Games)
            .order_by_asc(game_categories::Column::Id)
            .all(db)
            .await?;

        // Group embedded game records by category, skipping dangling rows.
        let mut games_by_category: HashMap<i32, Vec<games::Model>> = HashMap::new();
        for (link, game) in links {
            if let Some(game) = game {
                games_by_category
                    .entry(link.category_id)
                    .or_default()
                    .push(game);
            }
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let games = games_by_category.remove(&category.id).unwrap_or_default();
                CategoryWithGames::assemble(category, games)
            })
            .collect())
    }

    /// Assemble the view for a single, already-fetched category row.
    async fn find_one_with_games<C>(
        conn: &C,
        category: categories::Model,
    ) -> Result<CategoryWithGames, DbErr>
    where
        C: ConnectionTrait,
    {
        let links = GameCategories::find()
            .filter(game_categories::Column::CategoryId.eq(category.id))
            .find_also_related(Games)
            .order_by_asc(game_categories::Column::Id)
            .all(conn)
            .await?;

        let games = links.into_iter().filter_map(|(_, game)| game).collect();
        Ok(CategoryWithGames::assemble(category, games))
    }

    // ==================== Link synchronization ====================

    /// Replace the join rows of a category so they exactly equal
    /// `game_ids`.
    ///
    /// Full-replace: every existing row for the category is deleted, then
    /// one row per desired ID is inserted (nothing when the set is empty).
    /// The caller supplies the connection, normally a transaction, and
    /// guarantees the category exists and `game_ids` holds no duplicates
    /// (a duplicate trips the unique (game_id, category_id) index).
    pub async fn replace_game_links<C>(
        conn: &C,
        category_id: i32,
        game_ids: &[i32],
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        GameCategories::delete_many()
            .filter(game_categories::Column::CategoryId.eq(category_id))
            .exec(conn)
            .await?;

        if game_ids.is_empty() {
            return Ok(());
        }

        let now = chrono::Utc::now().timestamp() as i32;
        let links: Vec<game_categories::ActiveModel> = game_ids
            .iter()
            .map(|&game_id| game_categories::ActiveModel {
                id: NotSet,
                game_id: Set(game_id),
                category_id: Set(category_id),
                created_at: Set(Some(now)),
            })
            .collect();

        GameCategories::insert_many(links).exec(conn).await?;
        Ok(())
    }

    /// Current game IDs linked to a category, in insertion order.
    pub async fn get_game_ids(
        db: &DatabaseConnection,
        category_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        let links = GameCategories::find()
            .filter(game_categories::Column::CategoryId.eq(category_id))
            .order_by_asc(game_categories::Column::Id)
            .all(db)
            .await?;

        Ok(links.into_iter().map(|link| link.game_id).collect())
    }

    // ==================== Lifecycle ====================

    /// Create a category together with its initial game set.
    ///
    /// Category row and join rows are written in one transaction, then the
    /// assembled view is re-read from the store for the return value.
    pub async fn create_with_games(
        db: &DatabaseConnection,
        fields: CategoryInput,
        game_ids: &[i32],
    ) -> Result<CategoryWithGames, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let txn = db.begin().await?;

        let category = categories::ActiveModel {
            id: NotSet,
            name: Set(fields.name),
            slug: Set(fields.slug),
            is_active: Set(fields.is_active),
            created_at: Set(Some(now)),
        }
        .insert(&txn)
        .await?;

        Self::replace_game_links(&txn, category.id, game_ids).await?;

        txn.commit().await?;

        Self::find_one_with_games(db, category).await
    }

    /// Update a category's scalar fields and replace its entire game set.
    pub async fn update_with_games(
        db: &DatabaseConnection,
        category_id: i32,
        fields: CategoryInput,
        game_ids: &[i32],
    ) -> Result<CategoryWithGames, DbErr> {
        let txn = db.begin().await?;

        let existing = Categories::find_by_id(category_id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound("Category not found".to_string()))?;

        let mut active: categories::ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.slug = Set(fields.slug);
        active.is_active = Set(fields.is_active);
        let category = active.update(&txn).await?;

        Self::replace_game_links(&txn, category_id, game_ids).await?;

        txn.commit().await?;

        Self::find_one_with_games(db, category).await
    }

    /// Delete a category and all of its join rows.
    ///
    /// Join rows go first, inside the same transaction: the category row
    /// must never be removed while rows referencing it could remain.
    pub async fn delete_with_games(db: &DatabaseConnection, category_id: i32) -> Result<(), DbErr> {
        let txn = db.begin().await?;

        GameCategories::delete_many()
            .filter(game_categories::Column::CategoryId.eq(category_id))
            .exec(&txn)
            .await?;

        Categories::delete_by_id(category_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
