use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::{NewSymptomEntry, SymptomEntry};

use super::map_insert_err;

/// Insert a symptom entry, returning the generated id. Input is
/// validated upstream; the intensity CHECK is the last line of defense.
pub fn insert_entry(conn: &Connection, new: &NewSymptomEntry) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO symptom_entries (patient_id, symptom_name, intensity, entry_date, entry_time, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            new.patient_id,
            new.symptom_name,
            new.intensity,
            new.entry_date,
            new.entry_time,
            new.notes,
        ],
    )
    .map_err(map_insert_err)?;
    Ok(conn.last_insert_rowid())
}

/// Entries for one patient, newest first (`entry_date DESC, id DESC`),
/// optionally bounded by an inclusive `from`/`to` date range.
pub fn entries_for_patient(
    conn: &Connection,
    patient_id: i64,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Vec<SymptomEntry>, DatabaseError> {
    let mut sql = String::from(
        "SELECT id, patient_id, symptom_name, intensity, entry_date, entry_time, notes, created_at
         FROM symptom_entries WHERE patient_id = ?1",
    );

    let mut params_vec: Vec<Box<dyn rusqlite::types::ToSql>> = vec![Box::new(patient_id)];
    let mut param_idx = 2u32;

    if let Some(from) = from {
        sql.push_str(&format!(" AND entry_date >= ?{param_idx}"));
        params_vec.push(Box::new(from.to_string()));
        param_idx += 1;
    }
    if let Some(to) = to {
        sql.push_str(&format!(" AND entry_date <= ?{param_idx}"));
        params_vec.push(Box::new(to.to_string()));
        param_idx += 1;
    }
    let _ = param_idx;

    sql.push_str(" ORDER BY entry_date DESC, id DESC");

    let param_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(param_refs.as_slice(), |row| {
        Ok(SymptomEntry {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            symptom_name: row.get(2)?,
            intensity: row.get(3)?,
            entry_date: row.get(4)?,
            entry_time: row.get(5)?,
            notes: row.get(6)?,
            created_at: row.get(7)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
