#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use ssp_admin_lib::database::db;
use ssp_admin_lib::database::dto::{CategoryInput, GameInput};
use ssp_admin_lib::database::repository::games_repository::GamesRepository;

/// Fresh in-memory database with the full schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let conn = db::connect("sqlite::memory:")
        .await
        .expect("connect in-memory db");
    Migrator::up(&conn, None).await.expect("run migrations");
    conn
}

pub async fn seed_game(db: &DatabaseConnection, name: &str) -> i32 {
    GamesRepository::insert(
        db,
        GameInput {
            name: name.to_string(),
            description: None,
            is_active: true,
        },
    )
    .await
    .expect("insert game")
    .id
}

pub fn category_fields(name: &str, slug: &str) -> CategoryInput {
    CategoryInput {
        name: name.to_string(),
        slug: slug.to_string(),
        is_active: true,
    }
}
