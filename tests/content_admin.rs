//! Integration tests for game/pack/question CRUD, the spreadsheet import
//! contract and the dashboard stats.

mod common;

use common::{category_fields, seed_game, setup_db};
use ssp_admin_lib::database::dto::{
    GameUpdate, PackInput, PackUpdate, QuestionImportRow, QuestionInput,
};
use ssp_admin_lib::database::repository::categories_repository::CategoriesRepository;
use ssp_admin_lib::database::repository::games_repository::{GamesRepository, StatusFilter};
use ssp_admin_lib::database::repository::packs_repository::PacksRepository;
use ssp_admin_lib::database::repository::questions_repository::QuestionsRepository;
use ssp_admin_lib::database::service;

#[tokio::test]
async fn game_crud_roundtrip() {
    let db = setup_db().await;
    let id = seed_game(&db, "Truth or Dare").await;

    let stored = GamesRepository::find_by_id(&db, id)
        .await
        .expect("find")
        .expect("game exists");
    assert_eq!(stored.name, "Truth or Dare");
    assert!(stored.is_active);
    assert!(stored.created_at.is_some());

    // Deactivate and rename via partial update; description set to null.
    let updated = GamesRepository::update(
        &db,
        id,
        GameUpdate {
            name: Some("Truth".to_string()),
            description: Some(None),
            is_active: Some(false),
        },
    )
    .await
    .expect("update");
    assert_eq!(updated.name, "Truth");
    assert!(!updated.is_active);
    assert!(updated.description.is_none());

    let result = GamesRepository::delete(&db, id).await.expect("delete");
    assert_eq!(result.rows_affected, 1);
    assert!(
        GamesRepository::find_by_id(&db, id)
            .await
            .expect("find")
            .is_none()
    );
}

#[tokio::test]
async fn game_list_filters_by_status_and_name() {
    let db = setup_db().await;
    let active = seed_game(&db, "Hot Seat").await;
    let inactive = seed_game(&db, "Cold Seat").await;
    GamesRepository::update(
        &db,
        inactive,
        GameUpdate {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .expect("deactivate");

    let all = GamesRepository::find_all(&db, StatusFilter::All, None)
        .await
        .expect("list all");
    assert_eq!(all.len(), 2);

    let actives = GamesRepository::find_all(&db, StatusFilter::Active, None)
        .await
        .expect("list active");
    assert_eq!(actives.len(), 1);
    assert_eq!(actives[0].id, active);

    let hits = GamesRepository::find_all(&db, StatusFilter::All, Some("Cold"))
        .await
        .expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, inactive);
}

#[tokio::test]
async fn pack_crud_and_game_scope() {
    let db = setup_db().await;
    let g1 = seed_game(&db, "Truth or Dare").await;
    let g2 = seed_game(&db, "Never Have I Ever").await;

    let pack = PacksRepository::insert(
        &db,
        PackInput {
            game_id: g1,
            name: "Starter".to_string(),
            description: Some("free starter pack".to_string()),
            is_premium: false,
            is_active: true,
        },
    )
    .await
    .expect("insert pack");
    PacksRepository::insert(
        &db,
        PackInput {
            game_id: g2,
            name: "Spicy".to_string(),
            description: None,
            is_premium: true,
            is_active: true,
        },
    )
    .await
    .expect("insert second pack");

    let scoped = PacksRepository::find_all(&db, Some(g1)).await.expect("scoped list");
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].id, pack.id);

    let updated = PacksRepository::update(
        &db,
        pack.id,
        PackUpdate {
            is_premium: Some(true),
            ..Default::default()
        },
    )
    .await
    .expect("update pack");
    assert!(updated.is_premium);
    assert_eq!(updated.name, "Starter");

    PacksRepository::delete(&db, pack.id).await.expect("delete pack");
    assert!(
        PacksRepository::find_by_id(&db, pack.id)
            .await
            .expect("find")
            .is_none()
    );
}

#[tokio::test]
async fn question_crud_and_filters() {
    let db = setup_db().await;
    let game = seed_game(&db, "Truth or Dare").await;
    let pack = PacksRepository::insert(
        &db,
        PackInput {
            game_id: game,
            name: "Starter".to_string(),
            description: None,
            is_premium: false,
            is_active: true,
        },
    )
    .await
    .expect("insert pack");
    let category =
        CategoriesRepository::create_with_games(&db, category_fields("Party", "party"), &[game])
            .await
            .expect("create category");

    let in_pack = QuestionsRepository::insert(
        &db,
        QuestionInput {
            pack_id: Some(pack.id),
            category_id: None,
            content: "Have you ever lied to your best friend?".to_string(),
            is_active: true,
        },
    )
    .await
    .expect("insert question");
    assert_eq!(in_pack.likes, 0);
    assert_eq!(in_pack.dislikes, 0);

    let in_category = QuestionsRepository::insert(
        &db,
        QuestionInput {
            pack_id: None,
            category_id: Some(category.id),
            content: "Tell us about your first crush".to_string(),
            is_active: true,
        },
    )
    .await
    .expect("insert second question");

    let by_pack = QuestionsRepository::find_all(&db, Some(pack.id), None)
        .await
        .expect("filter by pack");
    assert_eq!(by_pack.len(), 1);
    assert_eq!(by_pack[0].id, in_pack.id);

    let by_category = QuestionsRepository::find_all(&db, None, Some(category.id))
        .await
        .expect("filter by category");
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id, in_category.id);
}

#[tokio::test]
async fn import_rejects_bad_rows_and_inserts_nothing() {
    let db = setup_db().await;

    let rows = vec![
        QuestionImportRow {
            content: "A valid question".to_string(),
            pack_id: None,
            category_id: None,
            is_active: true,
        },
        QuestionImportRow {
            content: "   ".to_string(),
            pack_id: None,
            category_id: None,
            is_active: true,
        },
        QuestionImportRow {
            content: "Points at a missing pack".to_string(),
            pack_id: Some(42),
            category_id: None,
            is_active: true,
        },
    ];

    let outcome = QuestionsRepository::import_rows(&db, rows)
        .await
        .expect("import call");
    assert_eq!(outcome.inserted, 0);
    assert_eq!(outcome.errors.len(), 2);
    // Spreadsheet row numbers: data starts at row 2 below the header.
    assert_eq!(outcome.errors[0].row, 3);
    assert_eq!(outcome.errors[1].row, 4);

    // All-or-nothing: the valid first row was not written either.
    assert_eq!(QuestionsRepository::count(&db).await.expect("count"), 0);
}

#[tokio::test]
async fn import_then_export_roundtrip() {
    let db = setup_db().await;
    let game = seed_game(&db, "Truth or Dare").await;
    let pack = PacksRepository::insert(
        &db,
        PackInput {
            game_id: game,
            name: "Starter".to_string(),
            description: None,
            is_premium: false,
            is_active: true,
        },
    )
    .await
    .expect("insert pack");

    let rows = vec![
        QuestionImportRow {
            content: "  Needs trimming  ".to_string(),
            pack_id: Some(pack.id),
            category_id: None,
            is_active: true,
        },
        QuestionImportRow {
            content: "Plain question".to_string(),
            pack_id: None,
            category_id: None,
            is_active: false,
        },
    ];

    let outcome = QuestionsRepository::import_rows(&db, rows)
        .await
        .expect("import");
    assert_eq!(outcome.inserted, 2);
    assert!(outcome.errors.is_empty());

    let exported = QuestionsRepository::export_rows(&db).await.expect("export");
    assert_eq!(exported.len(), 2);
    assert!(exported.iter().any(|r| r.content == "Needs trimming"));
    assert!(
        exported
            .iter()
            .any(|r| r.content == "Plain question" && !r.is_active)
    );
}

#[tokio::test]
async fn dashboard_stats_count_all_collections() {
    let db = setup_db().await;
    let game = seed_game(&db, "Truth or Dare").await;
    CategoriesRepository::create_with_games(&db, category_fields("Party", "party"), &[game])
        .await
        .expect("create category");
    PacksRepository::insert(
        &db,
        PackInput {
            game_id: game,
            name: "Starter".to_string(),
            description: None,
            is_premium: false,
            is_active: true,
        },
    )
    .await
    .expect("insert pack");

    let stats = service::get_dashboard_stats(&db).await.expect("stats");
    assert_eq!(stats.games, 1);
    assert_eq!(stats.categories, 1);
    assert_eq!(stats.packs, 1);
    assert_eq!(stats.questions, 0);
}
