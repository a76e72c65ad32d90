//! Identity resolution and credential verification.
//!
//! The resolver answers one question: given a login identifier and a
//! credential, which account (patient or clinician) does it belong to?
//! Storage access and credential verification are both injected so the
//! resolution logic can be tested against in-memory fixtures and stays
//! agnostic to the hashing scheme.

pub mod credential;
pub mod identifier;
pub mod resolver;

pub use credential::{CredentialVerifier, Pbkdf2Verifier};
pub use identifier::LoginIdentifier;
pub use resolver::{
    resolve_identity, AccountRecord, AccountStore, ResolvedIdentity, SqliteAccountStore,
};

use thiserror::Error;

/// Failures of a login attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input; reported to the caller verbatim.
    #[error("{0}")]
    InvalidRequest(&'static str),
    /// No matching account or wrong credential. Deliberately carries no
    /// detail: the caller cannot learn whether the identifier exists.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Storage failure. Detail is logged server-side, never returned.
    #[error("internal error")]
    Internal,
}
