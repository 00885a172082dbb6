//! Service facade consumed by the dashboard layer.
//!
//! Thin wrappers over the repositories: they convert persistence errors
//! into [`AdminError`] and add log statements on mutations. No validation
//! happens here; field values arrive already validated by the form layer.

use sea_orm::DatabaseConnection;

use crate::database::dto::{
    CategoryInput, DashboardStats, GameInput, GameUpdate, ImportOutcome, PackInput, PackUpdate,
    QuestionImportRow, QuestionInput, QuestionUpdate,
};
use crate::database::repository::{
    categories_repository::{CategoriesRepository, CategoryWithGames},
    games_repository::{GamesRepository, StatusFilter},
    packs_repository::PacksRepository,
    questions_repository::QuestionsRepository,
};
use crate::entity::{games, packs, questions};
use crate::error::AdminError;

// ==================== Dashboard ====================

/// Collection counts for the landing page. The four counts are independent
/// reads and are issued concurrently.
pub async fn get_dashboard_stats(db: &DatabaseConnection) -> Result<DashboardStats, AdminError> {
    let (games, categories, packs, questions) = tokio::try_join!(
        GamesRepository::count(db),
        CategoriesRepository::count(db),
        PacksRepository::count(db),
        QuestionsRepository::count(db),
    )?;

    Ok(DashboardStats {
        games,
        categories,
        packs,
        questions,
    })
}

// ==================== Games ====================

pub async fn list_games(
    db: &DatabaseConnection,
    status: StatusFilter,
    search: Option<&str>,
) -> Result<Vec<games::Model>, AdminError> {
    Ok(GamesRepository::find_all(db, status, search).await?)
}

pub async fn create_game(
    db: &DatabaseConnection,
    game: GameInput,
) -> Result<games::Model, AdminError> {
    let game = GamesRepository::insert(db, game).await?;
    log::info!("created game {}", game.id);
    Ok(game)
}

pub async fn update_game(
    db: &DatabaseConnection,
    game_id: i32,
    updates: GameUpdate,
) -> Result<games::Model, AdminError> {
    Ok(GamesRepository::update(db, game_id, updates).await?)
}

pub async fn delete_game(db: &DatabaseConnection, game_id: i32) -> Result<u64, AdminError> {
    let result = GamesRepository::delete(db, game_id).await?;
    log::info!("deleted game {}", game_id);
    Ok(result.rows_affected)
}

// ==================== Categories ====================

/// All categories with their associated games, newest first.
pub async fn list_categories_with_games(
    db: &DatabaseConnection,
) -> Result<Vec<CategoryWithGames>, AdminError> {
    Ok(CategoriesRepository::find_all_with_games(db).await?)
}

/// Create a category together with its initial game set.
pub async fn create_category_with_games(
    db: &DatabaseConnection,
    fields: CategoryInput,
    game_ids: &[i32],
) -> Result<CategoryWithGames, AdminError> {
    let category = CategoriesRepository::create_with_games(db, fields, game_ids).await?;
    log::info!(
        "created category {} with {} game link(s)",
        category.id,
        category.game_ids.len()
    );
    Ok(category)
}

/// Update a category's fields and replace its entire game set.
pub async fn update_category_with_games(
    db: &DatabaseConnection,
    category_id: i32,
    fields: CategoryInput,
    game_ids: &[i32],
) -> Result<CategoryWithGames, AdminError> {
    Ok(CategoriesRepository::update_with_games(db, category_id, fields, game_ids).await?)
}

/// Delete a category and all of its game links.
pub async fn delete_category_with_games(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<(), AdminError> {
    CategoriesRepository::delete_with_games(db, category_id).await?;
    log::info!("deleted category {}", category_id);
    Ok(())
}

// ==================== Packs ====================

pub async fn list_packs(
    db: &DatabaseConnection,
    game_id: Option<i32>,
) -> Result<Vec<packs::Model>, AdminError> {
    Ok(PacksRepository::find_all(db, game_id).await?)
}

pub async fn create_pack(
    db: &DatabaseConnection,
    pack: PackInput,
) -> Result<packs::Model, AdminError> {
    let pack = PacksRepository::insert(db, pack).await?;
    log::info!("created pack {}", pack.id);
    Ok(pack)
}

pub async fn update_pack(
    db: &DatabaseConnection,
    pack_id: i32,
    updates: PackUpdate,
) -> Result<packs::Model, AdminError> {
    Ok(PacksRepository::update(db, pack_id, updates).await?)
}

pub async fn delete_pack(db: &DatabaseConnection, pack_id: i32) -> Result<u64, AdminError> {
    let result = PacksRepository::delete(db, pack_id).await?;
    log::info!("deleted pack {}", pack_id);
    Ok(result.rows_affected)
}

// ==================== Questions ====================

pub async fn list_questions(
    db: &DatabaseConnection,
    pack_id: Option<i32>,
    category_id: Option<i32>,
) -> Result<Vec<questions::Model>, AdminError> {
    Ok(QuestionsRepository::find_all(db, pack_id, category_id).await?)
}

pub async fn create_question(
    db: &DatabaseConnection,
    question: QuestionInput,
) -> Result<questions::Model, AdminError> {
    Ok(QuestionsRepository::insert(db, question).await?)
}

pub async fn update_question(
    db: &DatabaseConnection,
    question_id: i32,
    updates: QuestionUpdate,
) -> Result<questions::Model, AdminError> {
    Ok(QuestionsRepository::update(db, question_id, updates).await?)
}

pub async fn delete_question(db: &DatabaseConnection, question_id: i32) -> Result<u64, AdminError> {
    let result = QuestionsRepository::delete(db, question_id).await?;
    Ok(result.rows_affected)
}

/// Bulk-import validated spreadsheet rows; all-or-nothing per batch.
pub async fn import_questions(
    db: &DatabaseConnection,
    rows: Vec<QuestionImportRow>,
) -> Result<ImportOutcome, AdminError> {
    let outcome = QuestionsRepository::import_rows(db, rows).await?;
    if outcome.errors.is_empty() {
        log::info!("imported {} question(s)", outcome.inserted);
    } else {
        log::warn!("question import rejected, {} bad row(s)", outcome.errors.len());
    }
    Ok(outcome)
}

/// Export all questions in the spreadsheet row shape.
pub async fn export_questions(
    db: &DatabaseConnection,
) -> Result<Vec<QuestionImportRow>, AdminError> {
    Ok(QuestionsRepository::export_rows(db).await?)
}
