use serde::{Deserialize, Serialize};

/// Account class an identity can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Clinician,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Clinician => "clinician",
        }
    }
}

/// Which account classes a login attempt may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFilter {
    Patient,
    Clinician,
    /// Try patients first, then clinicians.
    Unspecified,
}

impl RoleFilter {
    /// Parse the optional `role` field of a login request. Unknown
    /// values are treated as absent rather than rejected.
    pub fn from_param(role: Option<&str>) -> Self {
        match role.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("patient") => RoleFilter::Patient,
            Some("clinician") => RoleFilter::Clinician,
            _ => RoleFilter::Unspecified,
        }
    }
}
