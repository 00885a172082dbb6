//! Crate error type.

use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the service facade.
///
/// There is a single persistence kind wrapping whatever the store reports
/// (connection failure, constraint violation, not-found). Field validation
/// happens in the form layer before this crate is called, so no validation
/// variant exists here; import-row problems are reported as data, not as
/// errors.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("persistence failure: {0}")]
    Persistence(#[from] DbErr),
}
