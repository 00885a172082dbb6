//! Login gate.
//!
//! A single hardcoded credential pair with a persisted "remember me" flag.
//! There is no multi-user model, no roles and no server-side session; a
//! failed comparison is an `Ok(false)`, not an error.

use crate::database::repository::settings_repository::SettingsRepository;
use sea_orm::{DatabaseConnection, DbErr};

const VALID_USERNAME: &str = "iaoht.dev";
const VALID_PASSWORD: &str = "123123";

/// Check the credential pair. On success the username is remembered (or
/// forgotten) according to `remember`.
pub async fn login(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    remember: bool,
) -> Result<bool, DbErr> {
    if username != VALID_USERNAME || password != VALID_PASSWORD {
        return Ok(false);
    }

    if remember {
        SettingsRepository::set_remembered(db, username).await?;
    } else {
        SettingsRepository::clear_remembered(db).await?;
    }

    Ok(true)
}

/// The remembered username from a previous "remember me" login, if any.
pub async fn remembered_user(db: &DatabaseConnection) -> Result<Option<String>, DbErr> {
    SettingsRepository::get_remembered(db).await
}

/// Log out and forget any remembered username.
pub async fn logout(db: &DatabaseConnection) -> Result<(), DbErr> {
    SettingsRepository::clear_remembered(db).await
}
