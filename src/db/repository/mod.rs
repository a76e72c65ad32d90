pub mod clinician;
pub mod entry;
pub mod patient;
pub mod share;

pub use clinician::*;
pub use entry::*;
pub use patient::*;
pub use share::*;

use super::DatabaseError;

/// Surface unique-index violations as `ConstraintViolation` so the API
/// layer can report them as a client error instead of a server fault.
pub(crate) fn map_insert_err(err: rusqlite::Error) -> DatabaseError {
    match err {
        rusqlite::Error::SqliteFailure(e, msg)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DatabaseError::ConstraintViolation(msg.unwrap_or_else(|| e.to_string()))
        }
        other => other.into(),
    }
}
