use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::SharedPatient;

use super::map_insert_err;

/// Insert a sharing grant, returning the generated id. Callers verify
/// both accounts exist first; the UNIQUE pair index catches races.
pub fn insert_share(
    conn: &Connection,
    patient_id: i64,
    clinician_id: i64,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO shares (patient_id, clinician_id) VALUES (?1, ?2)",
        params![patient_id, clinician_id],
    )
    .map_err(map_insert_err)?;
    Ok(conn.last_insert_rowid())
}

pub fn share_exists(
    conn: &Connection,
    patient_id: i64,
    clinician_id: i64,
) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM shares WHERE patient_id = ?1 AND clinician_id = ?2",
        params![patient_id, clinician_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Patients who have shared their entries with the given clinician.
pub fn patients_shared_with(
    conn: &Connection,
    clinician_id: i64,
) -> Result<Vec<SharedPatient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT p.id, p.first_name, p.last_name, s.created_at
         FROM shares s
         JOIN patients p ON s.patient_id = p.id
         WHERE s.clinician_id = ?1
         ORDER BY p.last_name, p.first_name",
    )?;

    let rows = stmt.query_map(params![clinician_id], |row| {
        Ok(SharedPatient {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            shared_at: row.get(3)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
