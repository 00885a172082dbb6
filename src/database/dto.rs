//! Data transfer objects.
//!
//! Structures exchanged with the (external) dashboard layer. Update DTOs
//! use `Option<Option<T>>` for nullable columns to distinguish "field not
//! provided" from "explicitly set to null".

use serde::{Deserialize, Deserializer, Serialize};

/// Helper: deserialize into `Option<Option<T>>`, so a present-but-null
/// field becomes `Some(None)` instead of `None`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

// ==================== Games ====================

/// Fields for inserting a game. Identifier and timestamp are assigned by
/// the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Partial update of a game. Omitted fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameUpdate {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

// ==================== Categories ====================

/// Scalar fields of a category. The desired game set travels separately;
/// a category row never references games directly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

// ==================== Packs ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackInput {
    pub game_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_premium: bool,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PackUpdate {
    pub game_id: Option<i32>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub is_premium: Option<bool>,
    pub is_active: Option<bool>,
}

// ==================== Questions ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestionInput {
    pub pack_id: Option<i32>,
    pub category_id: Option<i32>,
    pub content: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QuestionUpdate {
    #[serde(default, deserialize_with = "double_option")]
    pub pack_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<i32>>,
    pub content: Option<String>,
    pub likes: Option<i32>,
    pub dislikes: Option<i32>,
    pub is_active: Option<bool>,
}

// ==================== Spreadsheet import/export contract ====================

/// One spreadsheet row of the question import/export contract. Parsing the
/// workbook itself is the caller's job; this layer only sees rows.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestionImportRow {
    pub content: String,
    pub pack_id: Option<i32>,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub is_active: bool,
}

/// A rejected import row. `row` is the 1-based spreadsheet row number,
/// header included (data starts at row 2).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportRowError {
    pub row: usize,
    pub message: String,
}

/// Result of a question import. All-or-nothing: when `errors` is
/// non-empty, `inserted` is zero and no rows were written.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub inserted: usize,
    pub errors: Vec<ImportRowError>,
}

// ==================== Dashboard ====================

/// Collection counts shown on the dashboard landing page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DashboardStats {
    pub games: u64,
    pub categories: u64,
    pub packs: u64,
    pub questions: u64,
}
