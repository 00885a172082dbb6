//! Admin settings repository.
//!
//! Backs the "remember me" flag of the login gate. The table holds exactly
//! one row with a fixed ID of 1.

use crate::entity::admin_user;
use crate::entity::prelude::*;
use sea_orm::*;

/// Admin settings repository.
pub struct SettingsRepository;

impl SettingsRepository {
    /// Make sure the settings row exists (ID fixed at 1).
    async fn ensure_admin_exists(db: &DatabaseConnection) -> Result<(), DbErr> {
        let existing = AdminUser::find_by_id(1).one(db).await?;

        if existing.is_none() {
            let admin = admin_user::ActiveModel {
                id: Set(1),
                saved_username: Set(None),
                remember_me: Set(false),
            };

            admin.insert(db).await?;
        }

        Ok(())
    }

    /// The remembered username, or `None` when the flag is off.
    pub async fn get_remembered(db: &DatabaseConnection) -> Result<Option<String>, DbErr> {
        Self::ensure_admin_exists(db).await?;

        let admin = AdminUser::find_by_id(1)
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound("Admin record not found".to_string()))?;

        if admin.remember_me {
            Ok(admin.saved_username)
        } else {
            Ok(None)
        }
    }

    /// Persist the username and set the remember flag.
    pub async fn set_remembered(db: &DatabaseConnection, username: &str) -> Result<(), DbErr> {
        Self::ensure_admin_exists(db).await?;

        let admin = AdminUser::find_by_id(1)
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound("Admin record not found".to_string()))?;

        let mut active: admin_user::ActiveModel = admin.into();
        active.saved_username = Set(Some(username.to_string()));
        active.remember_me = Set(true);

        active.update(db).await?;
        Ok(())
    }

    /// Clear the remembered username and flag.
    pub async fn clear_remembered(db: &DatabaseConnection) -> Result<(), DbErr> {
        Self::ensure_admin_exists(db).await?;

        let admin = AdminUser::find_by_id(1)
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound("Admin record not found".to_string()))?;

        let mut active: admin_user::ActiveModel = admin.into();
        active.saved_username = Set(None);
        active.remember_me = Set(false);

        active.update(db).await?;
        Ok(())
    }
}
