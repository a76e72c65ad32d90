//! Shared state and response envelope for the API layer.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Json;
use rusqlite::Connection;
use serde::Serialize;
use serde_json::{json, Value};

use crate::auth::CredentialVerifier;
use crate::db::{self, DatabaseError};

/// Shared context for all API routes.
///
/// Holds no open connection: each request opens its own, so any number
/// of requests can run in parallel under SQLite's own locking.
#[derive(Clone)]
pub struct ApiContext {
    db_path: PathBuf,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl ApiContext {
    pub fn new(db_path: PathBuf, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { db_path, verifier }
    }

    /// Open a request-scoped database connection.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::open_database(&self.db_path)
    }
}

/// Success envelope: `{ok: true, data: ...}`.
pub fn envelope<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "ok": true, "data": data }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_wraps_data() {
        let Json(body) = envelope(json!({ "id": 3 }));
        assert_eq!(body["ok"], true);
        assert_eq!(body["data"]["id"], 3);
        assert!(body.get("error").is_none());
    }
}
