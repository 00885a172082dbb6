use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr};
use std::fs;
use std::time::Duration;
use url::Url;

/// Establish a SeaORM connection to the default database location.
///
/// The SQLite file lives under the platform data directory (resolved by
/// `ssp-path`); the directory is created on first start.
pub async fn establish_connection() -> Result<DatabaseConnection, DbErr> {
    // 1. Resolve the database file path.
    let db_path = ssp_path::get_db_path().map_err(|e| DbErr::Conn(RuntimeErr::Internal(e)))?;

    // 2. Make sure the parent directory exists.
    if !db_path.exists() {
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DbErr::Conn(RuntimeErr::Internal(format!(
                    "unable to create database directory: {}",
                    e
                )))
            })?;
        }
        log::info!("first start, creating database: {}", db_path.display());
    } else {
        log::info!("using database: {}", db_path.display());
    }

    // 3. Build the connection string safely with the `url` crate.
    let db_url = Url::from_file_path(&db_path).map_err(|_| {
        DbErr::Conn(RuntimeErr::Internal(format!(
            "Invalid database path: {}",
            db_path.display()
        )))
    })?;

    connect(&format!("sqlite:{}?mode=rwc", db_url.path())).await
}

/// Connect to an explicit database URL.
///
/// Used by tests and tooling (for example `sqlite::memory:`). The pool is
/// capped at a single connection: the dashboard is single-operator and a
/// lone connection keeps in-memory databases coherent.
pub async fn connect(connection_string: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(connection_string.to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Close the database connection.
pub async fn close_connection(conn: DatabaseConnection) -> Result<(), DbErr> {
    conn.close().await?;
    Ok(())
}
