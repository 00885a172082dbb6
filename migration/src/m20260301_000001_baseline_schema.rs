//! Baseline schema.
//!
//! Creates the four content tables, the game↔category join table and the
//! single-row admin settings table. All statements run inside one
//! transaction so a half-created schema can never be observed.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend, Statement, TransactionTrait};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        let txn = conn.begin().await?;
        create_baseline_schema(&txn).await?;
        txn.commit().await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        for table in [
            "questions",
            "packs",
            "game_categories",
            "categories",
            "games",
            "admin_user",
        ] {
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                format!(r#"DROP TABLE IF EXISTS "{}""#, table),
            ))
            .await?;
        }

        Ok(())
    }
}

async fn create_baseline_schema<C>(conn: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    // 1. Games.
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "games" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "name" TEXT NOT NULL,
            "description" TEXT,
            "is_active" INTEGER NOT NULL DEFAULT 1,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now'))
        )"#,
    ))
    .await?;

    // 2. Categories. Slug uniqueness is a convention of the form layer,
    // not a schema constraint.
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "categories" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "name" TEXT NOT NULL,
            "slug" TEXT NOT NULL,
            "is_active" INTEGER NOT NULL DEFAULT 1,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now'))
        )"#,
    ))
    .await?;

    // 3. Game↔category join table. Deliberately no FOREIGN KEY clauses:
    // a deleted game may leave dangling rows, which the read side drops.
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "game_categories" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "game_id" INTEGER NOT NULL,
            "category_id" INTEGER NOT NULL,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now'))
        )"#,
    ))
    .await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE UNIQUE INDEX "idx_game_categories_pair"
            ON "game_categories" ("game_id", "category_id")"#,
    ))
    .await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE INDEX "idx_game_categories_category"
            ON "game_categories" ("category_id")"#,
    ))
    .await?;

    // 4. Content packs.
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "packs" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "game_id" INTEGER NOT NULL,
            "name" TEXT NOT NULL,
            "description" TEXT,
            "is_premium" INTEGER NOT NULL DEFAULT 0,
            "is_active" INTEGER NOT NULL DEFAULT 1,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now'))
        )"#,
    ))
    .await?;

    // 5. Questions. pack_id and category_id are both optional.
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "questions" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "pack_id" INTEGER,
            "category_id" INTEGER,
            "content" TEXT NOT NULL,
            "likes" INTEGER NOT NULL DEFAULT 0,
            "dislikes" INTEGER NOT NULL DEFAULT 0,
            "is_active" INTEGER NOT NULL DEFAULT 1,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now'))
        )"#,
    ))
    .await?;

    // 6. Admin settings, fixed single row (id = 1).
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "admin_user" (
            "id" INTEGER NOT NULL PRIMARY KEY,
            "saved_username" TEXT,
            "remember_me" INTEGER NOT NULL DEFAULT 0
        )"#,
    ))
    .await?;

    Ok(())
}
