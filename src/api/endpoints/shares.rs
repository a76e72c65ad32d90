//! Clinician/patient sharing endpoints.
//!
//! `POST /shares` — grant a clinician access to a patient's entries
//! `GET /clinicians/{id}/patients` — patients shared with a clinician

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::api::types::{envelope, ApiContext};
use crate::db;

#[derive(Debug, Deserialize)]
pub struct CreateShareRequest {
    pub patient_id: Option<i64>,
    pub clinician_id: Option<i64>,
}

/// `POST /shares` — one insert guarded by two existence checks.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(req): Json<CreateShareRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let patient_id = req
        .patient_id
        .ok_or_else(|| ApiError::BadRequest("patient_id is required".into()))?;
    let clinician_id = req
        .clinician_id
        .ok_or_else(|| ApiError::BadRequest("clinician_id is required".into()))?;

    let conn = ctx.open_db()?;
    if !db::patient_exists(&conn, patient_id)? {
        return Err(ApiError::BadRequest("unknown patient_id".into()));
    }
    if !db::clinician_exists(&conn, clinician_id)? {
        return Err(ApiError::BadRequest("unknown clinician_id".into()));
    }
    if db::share_exists(&conn, patient_id, clinician_id)? {
        return Err(ApiError::BadRequest(
            "already shared with this clinician".into(),
        ));
    }

    let id = db::insert_share(&conn, patient_id, clinician_id)?;
    tracing::info!(id, patient_id, clinician_id, "share created");

    Ok((StatusCode::CREATED, envelope(json!({ "id": id }))))
}

/// `GET /clinicians/{id}/patients` — patients shared with a clinician.
pub async fn patients_for_clinician(
    State(ctx): State<ApiContext>,
    Path(clinician_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let conn = ctx.open_db()?;
    if !db::clinician_exists(&conn, clinician_id)? {
        return Err(ApiError::NotFound(format!(
            "clinician {clinician_id} not found"
        )));
    }

    let patients = db::patients_shared_with(&conn, clinician_id)?;
    Ok(envelope(patients))
}
