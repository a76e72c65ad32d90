//! API endpoint handlers, one module per resource.

pub mod auth;
pub mod health;
pub mod shares;
pub mod symptoms;

use crate::api::error::ApiError;

/// Reject empty or whitespace-only required fields. Absent string
/// fields deserialize to `""` and land here too.
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}
