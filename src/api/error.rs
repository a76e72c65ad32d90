//! API error type and its HTTP mapping.
//!
//! Every failure renders as the `{ok: false, error}` envelope.
//! Internal detail is logged server-side, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::auth::AuthError;
use crate::db::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::InvalidCredentials => {
                // One message for "no such account" and "wrong
                // credential" alike.
                (StatusCode::UNAUTHORIZED, "invalid credentials".to_string())
            }
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        let body = Json(json!({ "ok": false, "error": message }));
        (status, body).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::ConstraintViolation(detail) => ApiError::BadRequest(detail),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidRequest(msg) => ApiError::BadRequest(msg.to_string()),
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::Internal => ApiError::Internal("identity resolution failed".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn bad_request_returns_400_envelope() {
        let response = ApiError::BadRequest("phone must be 7-20 digits".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "phone must be 7-20 digits");
    }

    #[tokio::test]
    async fn invalid_credentials_returns_401_without_detail() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "invalid credentials");
    }

    #[tokio::test]
    async fn not_found_returns_404() {
        let response = ApiError::NotFound("patient 9 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn internal_returns_500_and_hides_detail() {
        let response = ApiError::Internal("disk on fire".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "internal error");
    }

    #[test]
    fn constraint_violation_maps_to_bad_request() {
        let err: ApiError = DatabaseError::ConstraintViolation("UNIQUE failed".into()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn other_database_errors_map_to_internal() {
        let err: ApiError = DatabaseError::MigrationFailed {
            version: 1,
            reason: "syntax".into(),
        }
        .into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn auth_errors_map_onto_api_errors() {
        assert!(matches!(
            ApiError::from(AuthError::InvalidRequest("identifier is required")),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::InvalidCredentials
        ));
        assert!(matches!(
            ApiError::from(AuthError::Internal),
            ApiError::Internal(_)
        ));
    }
}
