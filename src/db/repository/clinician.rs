use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::AccountRecord;
use crate::db::DatabaseError;
use crate::models::NewClinician;

use super::map_insert_err;

/// Insert a clinician row, returning the generated id.
pub fn insert_clinician(conn: &Connection, new: &NewClinician) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO clinicians (first_name, last_name, email, username, credential)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            new.first_name,
            new.last_name,
            new.email,
            new.username,
            new.credential_hash,
        ],
    )
    .map_err(map_insert_err)?;
    Ok(conn.last_insert_rowid())
}

/// At most one clinician whose email or username equals `identifier`,
/// case-insensitively.
pub fn find_clinician_by_identifier(
    conn: &Connection,
    identifier: &str,
) -> Result<Option<AccountRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, credential FROM clinicians
         WHERE LOWER(email) = LOWER(?1) OR LOWER(username) = LOWER(?1)
         LIMIT 1",
    )?;
    let record = stmt
        .query_row(params![identifier], |row| {
            Ok(AccountRecord {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                credential_hash: row.get(3)?,
            })
        })
        .optional()?;
    Ok(record)
}

/// True if either identifier is already registered to a clinician.
pub fn clinician_identifier_taken(
    conn: &Connection,
    email: &str,
    username: &str,
) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM clinicians
         WHERE LOWER(email) = LOWER(?1) OR LOWER(username) = LOWER(?2)",
        params![email, username],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn clinician_exists(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM clinicians WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
