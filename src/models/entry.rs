use serde::{Deserialize, Serialize};

/// A stored symptom entry as returned to clients. Dates are
/// `YYYY-MM-DD` strings, times `HH:MM:SS`; both validated on the way
/// in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: i64,
    pub patient_id: i64,
    pub symptom_name: String,
    pub intensity: u8,
    pub entry_date: String,
    pub entry_time: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Input for inserting a new entry (validated upstream).
#[derive(Debug, Clone)]
pub struct NewSymptomEntry {
    pub patient_id: i64,
    pub symptom_name: String,
    pub intensity: u8,
    pub entry_date: String,
    pub entry_time: Option<String>,
    pub notes: Option<String>,
}
