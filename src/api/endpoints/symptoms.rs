//! Symptom entry endpoints.
//!
//! `POST /symptoms` — record an entry
//! `GET /patients/{id}/symptoms` — entries for a patient, newest first

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::api::types::{envelope, ApiContext};
use crate::db;
use crate::models::NewSymptomEntry;

use super::require;

/// Inclusive upper bound of the intensity scale.
pub const INTENSITY_MAX: u8 = 10;

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub symptom_name: String,
    pub intensity: Option<i64>,
    #[serde(default)]
    pub entry_date: String,
    #[serde(default)]
    pub entry_time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// `POST /symptoms` — record a new entry.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let patient_id = req
        .patient_id
        .ok_or_else(|| ApiError::BadRequest("patient_id is required".into()))?;
    let symptom_name = req.symptom_name.trim().to_string();
    require(&symptom_name, "symptom_name")?;

    let intensity = req
        .intensity
        .ok_or_else(|| ApiError::BadRequest("intensity is required".into()))?;
    if !(0..=i64::from(INTENSITY_MAX)).contains(&intensity) {
        return Err(ApiError::BadRequest(format!(
            "intensity must be between 0 and {INTENSITY_MAX}"
        )));
    }

    let entry_date = req.entry_date.trim();
    if NaiveDate::parse_from_str(entry_date, "%Y-%m-%d").is_err() {
        return Err(ApiError::BadRequest(
            "invalid entry_date format (expected YYYY-MM-DD)".into(),
        ));
    }

    let entry_time = match req
        .entry_time
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        Some(raw) => Some(normalize_time(raw)?),
        None => None,
    };

    let conn = ctx.open_db()?;
    if !db::patient_exists(&conn, patient_id)? {
        return Err(ApiError::BadRequest("unknown patient_id".into()));
    }

    let new = NewSymptomEntry {
        patient_id,
        symptom_name,
        intensity: intensity as u8,
        entry_date: entry_date.to_string(),
        entry_time,
        notes: req.notes,
    };
    let id = db::insert_entry(&conn, &new)?;
    tracing::debug!(id, patient_id, "symptom entry recorded");

    Ok((StatusCode::CREATED, envelope(json!({ "id": id }))))
}

/// Accept `HH:MM` or `HH:MM:SS`, store as `HH:MM:SS`.
fn normalize_time(raw: &str) -> Result<String, ApiError> {
    let parsed = NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| {
            ApiError::BadRequest("invalid entry_time format (expected HH:MM or HH:MM:SS)".into())
        })?;
    Ok(parsed.format("%H:%M:%S").to_string())
}

#[derive(Debug, Deserialize)]
pub struct EntryRangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// `GET /patients/{id}/symptoms` — entries for a patient, optionally
/// bounded by an inclusive date range.
pub async fn list_for_patient(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<i64>,
    Query(query): Query<EntryRangeQuery>,
) -> Result<Json<Value>, ApiError> {
    let from = parse_bound(query.from.as_deref(), "from")?;
    let to = parse_bound(query.to.as_deref(), "to")?;

    let conn = ctx.open_db()?;
    if !db::patient_exists(&conn, patient_id)? {
        return Err(ApiError::NotFound(format!("patient {patient_id} not found")));
    }

    let entries = db::entries_for_patient(&conn, patient_id, from, to)?;
    Ok(envelope(entries))
}

fn parse_bound<'a>(raw: Option<&'a str>, name: &str) -> Result<Option<&'a str>, ApiError> {
    match raw {
        Some(raw) => {
            if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_err() {
                return Err(ApiError::BadRequest(format!(
                    "invalid {name} date (expected YYYY-MM-DD)"
                )));
            }
            Ok(Some(raw))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_time_accepts_both_formats() {
        assert_eq!(normalize_time("08:30").unwrap(), "08:30:00");
        assert_eq!(normalize_time("08:30:45").unwrap(), "08:30:45");
    }

    #[test]
    fn normalize_time_rejects_garbage() {
        assert!(normalize_time("8 o'clock").is_err());
        assert!(normalize_time("25:00").is_err());
        assert!(normalize_time("08:61").is_err());
    }

    #[test]
    fn parse_bound_passes_valid_dates_through() {
        assert_eq!(
            parse_bound(Some("2025-06-01"), "from").unwrap(),
            Some("2025-06-01")
        );
        assert_eq!(parse_bound(None, "from").unwrap(), None);
    }

    #[test]
    fn parse_bound_rejects_non_dates() {
        assert!(parse_bound(Some("yesterday"), "from").is_err());
        assert!(parse_bound(Some("2025-13-01"), "to").is_err());
    }
}
