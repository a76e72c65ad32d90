use std::path::Path;

use rusqlite::Connection;
use tracing;

use super::DatabaseError;

/// Open a SQLite connection to the given path and run migrations
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(())
}

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_current_version(conn);

    let migrations: Vec<(i64, &str)> = vec![(
        1,
        include_str!("../../resources/migrations/001_initial.sql"),
    )];

    for (version, sql) in migrations {
        if version > current_version {
            tracing::info!("Running migration v{version}");
            conn.execute_batch(sql)
                .map_err(|e| DatabaseError::MigrationFailed {
                    version,
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(())
}

/// Get the current schema version (0 if no schema exists yet)
fn get_current_version(conn: &Connection) -> i64 {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, i64>(0)
    })
    .unwrap_or(0)
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;

    #[test]
    fn database_initializes_all_tables() {
        let conn = open_memory_database().unwrap();
        // patients + clinicians + symptom_entries + shares + schema_version
        let count = count_tables(&conn).unwrap();
        assert_eq!(count, 5, "Expected 5 tables, got {count}");
    }

    #[test]
    fn schema_version_is_current() {
        let conn = open_memory_database().unwrap();
        let version: i64 = conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(version, 1);
    }

    #[test]
    fn migration_idempotent() {
        let conn = open_memory_database().unwrap();
        // Run migrations again — should not error
        let result = run_migrations(&conn);
        assert!(result.is_ok());
    }

    #[test]
    fn foreign_keys_enabled() {
        let conn = open_memory_database().unwrap();
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn patient_email_unique_case_insensitive() {
        let conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO patients (first_name, last_name, phone, email, credential)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params!["Ana", "Diaz", "5551234", "ana@example.com", "h"],
        )
        .unwrap();
        let dup = conn.execute(
            "INSERT INTO patients (first_name, last_name, phone, email, credential)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params!["Ana", "Diaz", "5551234", "ANA@EXAMPLE.COM", "h"],
        );
        assert!(dup.is_err());
    }

    #[test]
    fn clinician_username_unique_case_insensitive() {
        let conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO clinicians (first_name, last_name, email, username, credential)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params!["Gregory", "House", "house@example.com", "drhouse", "h"],
        )
        .unwrap();
        let dup = conn.execute(
            "INSERT INTO clinicians (first_name, last_name, email, username, credential)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params!["Other", "House", "other@example.com", "DrHouse", "h"],
        );
        assert!(dup.is_err());
    }

    #[test]
    fn entry_intensity_range_enforced() {
        let conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO patients (first_name, last_name, phone, username, credential)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params!["Ana", "Diaz", "5551234", "anadiaz", "h"],
        )
        .unwrap();
        let bad = conn.execute(
            "INSERT INTO symptom_entries (patient_id, symptom_name, intensity, entry_date)
             VALUES (1, 'Headache', 11, '2025-06-01')",
            [],
        );
        assert!(bad.is_err());
    }
}
