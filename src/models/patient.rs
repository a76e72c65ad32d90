use serde::{Deserialize, Serialize};

/// A registered patient account. The credential hash stays in the
/// database layer and is never part of this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// Input for creating a patient row. Exactly one of email/username is
/// set, decided by identifier classification at registration.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub username: Option<String>,
    pub credential_hash: String,
}
