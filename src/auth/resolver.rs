//! Identity resolution for login.
//!
//! Given an identifier (email or username) and a credential, find the
//! matching account among patients and clinicians. When no role is
//! requested, patients are tried before clinicians; that ordering is
//! observable on identifier collisions and must hold.

use rusqlite::Connection;
use serde::Serialize;

use crate::db::{self, DatabaseError};
use crate::models::{Role, RoleFilter};

use super::{AuthError, CredentialVerifier};

/// Minimal account row the resolver works with.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub credential_hash: String,
}

/// Read-only account lookup, injected into the resolver.
pub trait AccountStore {
    /// At most one patient whose email or username equals `identifier`,
    /// case-insensitively.
    fn find_patient(&self, identifier: &str) -> Result<Option<AccountRecord>, DatabaseError>;

    /// Same against clinicians.
    fn find_clinician(&self, identifier: &str) -> Result<Option<AccountRecord>, DatabaseError>;
}

/// `AccountStore` backed by the SQLite repositories.
pub struct SqliteAccountStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteAccountStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl AccountStore for SqliteAccountStore<'_> {
    fn find_patient(&self, identifier: &str) -> Result<Option<AccountRecord>, DatabaseError> {
        db::find_patient_by_identifier(self.conn, identifier)
    }

    fn find_clinician(&self, identifier: &str) -> Result<Option<AccountRecord>, DatabaseError> {
        db::find_clinician_by_identifier(self.conn, identifier)
    }
}

/// Successful resolution: which account class matched, and who.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedIdentity {
    pub role: Role,
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Resolve a login attempt to an identity.
///
/// Pure read: no account state is touched. All "no match" outcomes
/// collapse into [`AuthError::InvalidCredentials`].
pub fn resolve_identity(
    store: &dyn AccountStore,
    verifier: &dyn CredentialVerifier,
    identifier: &str,
    credential: &str,
    role: RoleFilter,
) -> Result<ResolvedIdentity, AuthError> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(AuthError::InvalidRequest("identifier is required"));
    }
    if credential.is_empty() {
        return Err(AuthError::InvalidRequest("password is required"));
    }

    match role {
        RoleFilter::Patient => try_class(store, verifier, identifier, credential, Role::Patient)?
            .ok_or(AuthError::InvalidCredentials),
        RoleFilter::Clinician => {
            try_class(store, verifier, identifier, credential, Role::Clinician)?
                .ok_or(AuthError::InvalidCredentials)
        }
        RoleFilter::Unspecified => {
            // Patients take priority over clinicians when an identifier
            // (and credential) collides across both tables.
            if let Some(identity) =
                try_class(store, verifier, identifier, credential, Role::Patient)?
            {
                return Ok(identity);
            }
            try_class(store, verifier, identifier, credential, Role::Clinician)?
                .ok_or(AuthError::InvalidCredentials)
        }
    }
}

/// Look up one account class and verify the credential. `Ok(None)`
/// covers both "no such account" and "wrong credential"; the no-account
/// path still pays for one verification so the two are not
/// distinguishable by timing either.
fn try_class(
    store: &dyn AccountStore,
    verifier: &dyn CredentialVerifier,
    identifier: &str,
    credential: &str,
    role: Role,
) -> Result<Option<ResolvedIdentity>, AuthError> {
    let record = match role {
        Role::Patient => store.find_patient(identifier),
        Role::Clinician => store.find_clinician(identifier),
    }
    .map_err(|e| {
        tracing::error!("{} account lookup failed: {e}", role.as_str());
        AuthError::Internal
    })?;

    match record {
        Some(record) if verifier.verify(credential, &record.credential_hash) => {
            Ok(Some(ResolvedIdentity {
                role,
                id: record.id,
                first_name: record.first_name,
                last_name: record.last_name,
            }))
        }
        Some(_) => Ok(None),
        None => {
            let _ = verifier.verify(credential, verifier.decoy_hash());
            Ok(None)
        }
    }
}
