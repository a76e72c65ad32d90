use serde::{Deserialize, Serialize};

/// Patient summary as listed for a clinician they share with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedPatient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub shared_at: String,
}
