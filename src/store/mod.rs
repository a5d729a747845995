//! Persistence operations over the case-management schema.
//!
//! Every function takes an explicit `&mut PgConnection` handle; there is no
//! shared session object. Callers own transaction boundaries unless a
//! function documents otherwise.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

pub mod cases;
pub mod documents;
pub mod events;
pub mod files;
pub mod groups;
pub mod parties;
pub mod profiles;
pub mod users;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} already exists")]
    Conflict(&'static str),
    #[error("record not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] DieselError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Maps a unique-constraint rejection to `Conflict`, naming the entity.
pub(crate) fn on_unique_violation(err: DieselError, what: &'static str) -> StoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            StoreError::Conflict(what)
        }
        other => StoreError::Database(other),
    }
}
