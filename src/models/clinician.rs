use serde::{Deserialize, Serialize};

/// A registered clinician account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clinician {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

/// Input for creating a clinician row.
#[derive(Debug, Clone)]
pub struct NewClinician {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub credential_hash: String,
}
