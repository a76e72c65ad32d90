use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::AccountRecord;
use crate::db::DatabaseError;
use crate::models::NewPatient;

use super::map_insert_err;

/// Insert a patient row, returning the generated id.
pub fn insert_patient(conn: &Connection, new: &NewPatient) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (first_name, last_name, phone, email, username, credential)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            new.first_name,
            new.last_name,
            new.phone,
            new.email,
            new.username,
            new.credential_hash,
        ],
    )
    .map_err(map_insert_err)?;
    Ok(conn.last_insert_rowid())
}

/// At most one patient whose email or username equals `identifier`,
/// case-insensitively.
pub fn find_patient_by_identifier(
    conn: &Connection,
    identifier: &str,
) -> Result<Option<AccountRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, credential FROM patients
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

pub fn patient_email_taken(conn: &Connection, email: &str) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM patients WHERE LOWER(email) = LOWER(?1)",
        params![email],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn patient_username_taken(conn: &Connection, username: &str) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM patients WHERE LOWER(username) = LOWER(?1)",
        params![username],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn patient_exists(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM patients WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
