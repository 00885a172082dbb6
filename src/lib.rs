//! Data layer of the SSP party-game admin dashboard.
//!
//! Manages games, categories, content packs and questions in a local
//! SQLite store, including the many-to-many category↔game pipeline and the
//! question spreadsheet import/export contract. The UI layer sits on top
//! of [`database::service`].

pub mod auth;
pub mod database;
pub mod entity;
pub mod error;
pub mod utils;

pub use error::AdminError;

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Connect to the default database location and bring the schema up to
/// date.
pub async fn init() -> Result<DatabaseConnection, AdminError> {
    let conn = database::db::establish_connection().await?;
    log::info!("database connection established");

    migration::Migrator::up(&conn, None).await?;
    log::info!("database migrations complete");

    Ok(conn)
}
