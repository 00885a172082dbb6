//! Question repository, including the spreadsheet import/export contract.

use crate::database::dto::{
    ImportOutcome, ImportRowError, QuestionImportRow, QuestionInput, QuestionUpdate,
};
use crate::entity::prelude::*;
use crate::entity::questions;
use sea_orm::*;
use std::collections::HashSet;

/// Question data repository.
pub struct QuestionsRepository;

impl QuestionsRepository {
    // ==================== CRUD ====================

    /// Insert a question and return the full stored record. Like counters
    /// start at zero.
    pub async fn insert(
        db: &DatabaseConnection,
        question: QuestionInput,
    ) -> Result<questions::Model, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let question_active = questions::ActiveModel {
            id: NotSet,
            pack_id: Set(question.pack_id),
            category_id: Set(question.category_id),
            content: Set(question.content),
            likes: Set(0),
            dislikes: Set(0),
            is_active: Set(question.is_active),
            created_at: Set(Some(now)),
        };

        question_active.insert(db).await
    }

    /// Partial update; omitted fields stay unchanged.
    pub async fn update(
        db: &DatabaseConnection,
        question_id: i32,
        updates: QuestionUpdate,
    ) -> Result<questions::Model, DbErr> {
        let question_active = questions::ActiveModel {
            id: Set(question_id),
            pack_id: updates.pack_id.map_or(NotSet, Set),
            category_id: updates.category_id.map_or(NotSet, Set),
            content: updates.content.map_or(NotSet, Set),
            likes: updates.likes.map_or(NotSet, Set),
            dislikes: updates.dislikes.map_or(NotSet, Set),
            is_active: updates.is_active.map_or(NotSet, Set),
            ..Default::default()
        };

        question_active.update(db).await
    }

    /// Delete a question.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Questions::delete_by_id(id).exec(db).await
    }

    // ==================== Queries ====================

    /// Find a question by ID.
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<questions::Model>, DbErr> {
        Questions::find_by_id(id).one(db).await
    }

    /// All questions, newest first, optionally filtered by pack and/or
    /// category.
    pub async fn find_all(
        db: &DatabaseConnection,
        pack_id: Option<i32>,
        category_id: Option<i32>,
    ) -> Result<Vec<questions::Model>, DbErr> {
        let mut query = Questions::find();

        if let Some(pack_id) = pack_id {
            query = query.filter(questions::Column::PackId.eq(pack_id));
        }
        if let Some(category_id) = category_id {
            query = query.filter(questions::Column::CategoryId.eq(category_id));
        }

        query
            .order_by_desc(questions::Column::CreatedAt)
            .order_by_desc(questions::Column::Id)
            .all(db)
            .await
    }

    /// Total question count.
    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Questions::find().count(db).await
    }

    // ==================== Spreadsheet import/export ====================

    /// Bulk-import spreadsheet rows.
    ///
    /// Every row is validated first: content must be non-empty after
    /// trimming, referenced pack and category IDs must exist. Row numbers
    /// in the report are spreadsheet rows (1-based, data starts below the
    /// header at row 2). If any row is invalid nothing is inserted;
    /// otherwise all rows go in through one batched insert in a single
    /// transaction.
    pub async fn import_rows(
        db: &DatabaseConnection,
        rows: Vec<QuestionImportRow>,
    ) -> Result<ImportOutcome, DbErr> {
        let pack_ids: HashSet<i32> = Packs::find()
            .all(db)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        let category_ids: HashSet<i32> = Categories::find()
            .all(db)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        let now = chrono::Utc::now().timestamp() as i32;
        let mut errors = Vec::new();
        let mut valid = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 2;

            let content = row.content.trim();
            if content.is_empty() {
                errors.push(ImportRowError {
                    row: row_number,
                    message: "question content must not be empty".to_string(),
                });
                continue;
            }

            if let Some(pack_id) = row.pack_id {
                if !pack_ids.contains(&pack_id) {
                    errors.push(ImportRowError {
                        row: row_number,
                        message: format!("pack id {} does not exist", pack_id),
                    });
                    continue;
                }
            }

            if let Some(category_id) = row.category_id {
                if !category_ids.contains(&category_id) {
                    errors.push(ImportRowError {
                        row: row_number,
                        message: format!("category id {} does not exist", category_id),
                    });
                    continue;
                }
            }

            valid.push(questions::ActiveModel {
                id: NotSet,
                pack_id: Set(row.pack_id),
                category_id: Set(row.category_id),
                content: Set(content.to_string()),
                likes: Set(0),
                dislikes: Set(0),
                is_active: Set(row.is_active),
                created_at: Set(Some(now)),
            });
        }

        if !errors.is_empty() {
            return Ok(ImportOutcome {
                inserted: 0,
                errors,
            });
        }
        if valid.is_empty() {
            return Ok(ImportOutcome {
                inserted: 0,
                errors: Vec::new(),
            });
        }

        let inserted = valid.len();
        let txn = db.begin().await?;
        Questions::insert_many(valid).exec(&txn).await?;
        txn.commit().await?;

        Ok(ImportOutcome {
            inserted,
            errors: Vec::new(),
        })
    }

    /// Export all questions in the spreadsheet row shape, newest first.
    pub async fn export_rows(db: &DatabaseConnection) -> Result<Vec<QuestionImportRow>, DbErr> {
        let questions = Self::find_all(db, None, None).await?;

        Ok(questions
            .into_iter()
            .map(|q| QuestionImportRow {
                content: q.content,
                pack_id: q.pack_id,
                category_id: q.category_id,
                is_active: q.is_active,
            })
            .collect())
    }
}
