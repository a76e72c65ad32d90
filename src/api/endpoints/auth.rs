//! Account registration and login endpoints.
//!
//! `POST /auth/register/patient` — patient account, email-or-username
//! `POST /auth/register/clinician` — clinician account
//! `POST /auth/login` — identity resolution across both account classes

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::{envelope, ApiContext};
use crate::auth::{
    identifier, resolve_identity, CredentialVerifier, LoginIdentifier, SqliteAccountStore,
};
use crate::db;
use crate::models::{Clinician, NewClinician, NewPatient, Patient, RoleFilter};

use super::require;

#[derive(Debug, Deserialize)]
pub struct RegisterPatientRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    /// Email or username; classified server-side.
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /auth/register/patient`
pub async fn register_patient(
    State(ctx): State<ApiContext>,
    Json(req): Json<RegisterPatientRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let first_name = req.first_name.trim().to_string();
    let last_name = req.last_name.trim().to_string();
    let phone = req.phone.trim().to_string();

    require(&first_name, "first_name")?;
    require(&last_name, "last_name")?;
    require(&phone, "phone")?;
    require(&req.identifier, "identifier")?;
    require(&req.password, "password")?;

    let (email, username) = match LoginIdentifier::classify(&req.identifier) {
        LoginIdentifier::Email(email) => (Some(email), None),
        LoginIdentifier::Username(username) => {
            if username.chars().count() < identifier::MIN_USERNAME_LEN {
                return Err(ApiError::BadRequest(format!(
                    "username must be at least {} characters",
                    identifier::MIN_USERNAME_LEN
                )));
            }
            (None, Some(username))
        }
    };
    if !identifier::is_valid_phone(&phone) {
        return Err(ApiError::BadRequest("phone must be 7-20 digits".into()));
    }

    let conn = ctx.open_db()?;
    if let Some(ref email) = email {
        if db::patient_email_taken(&conn, email)? {
            return Err(ApiError::BadRequest("email already registered".into()));
        }
    }
    if let Some(ref username) = username {
        if db::patient_username_taken(&conn, username)? {
            return Err(ApiError::BadRequest("username already registered".into()));
        }
    }

    let new = NewPatient {
        first_name,
        last_name,
        phone,
        email,
        username,
        credential_hash: ctx.verifier.hash(&req.password),
    };
    let id = db::insert_patient(&conn, &new)?;
    tracing::info!(id, "patient registered");

    Ok((
        StatusCode::CREATED,
        envelope(Patient {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            phone: new.phone,
            email: new.email,
            username: new.username,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct RegisterClinicianRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /auth/register/clinician`
pub async fn register_clinician(
    State(ctx): State<ApiContext>,
    Json(req): Json<RegisterClinicianRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let first_name = req.first_name.trim().to_string();
    let last_name = req.last_name.trim().to_string();
    let email = req.email.trim().to_lowercase();
    let username = req.username.trim().to_string();

    require(&first_name, "first_name")?;
    require(&last_name, "last_name")?;
    require(&email, "email")?;
    require(&username, "username")?;
    require(&req.password, "password")?;

    if !matches!(LoginIdentifier::classify(&email), LoginIdentifier::Email(_)) {
        return Err(ApiError::BadRequest("email is not valid".into()));
    }

    let conn = ctx.open_db()?;
    if db::clinician_identifier_taken(&conn, &email, &username)? {
        return Err(ApiError::BadRequest(
            "email or username already registered".into(),
        ));
    }

    let new = NewClinician {
        first_name,
        last_name,
        email,
        username,
        credential_hash: ctx.verifier.hash(&req.password),
    };
    let id = db::insert_clinician(&conn, &new)?;
    tracing::info!(id, "clinician registered");

    Ok((
        StatusCode::CREATED,
        envelope(Clinician {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            username: new.username,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
    /// `"patient"`, `"clinician"`, or anything else for "try both".
    #[serde(default)]
    pub role: Option<String>,
}

/// `POST /auth/login` — resolve identifier + password to an identity.
pub async fn login(
    State(ctx): State<ApiContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let conn = ctx.open_db()?;
    let store = SqliteAccountStore::new(&conn);

    let identity = resolve_identity(
        &store,
        ctx.verifier.as_ref(),
        &req.identifier,
        &req.password,
        RoleFilter::from_param(req.role.as_deref()),
    )?;

    tracing::debug!(id = identity.id, role = identity.role.as_str(), "login ok");
    Ok(envelope(identity))
}
