//! Login identifier classification.
//!
//! A registration or login identifier is either an email address or a
//! username. Emails are lowercased before storage so the
//! case-insensitive uniqueness of the account tables holds on the
//! canonical form.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{7,20}$").unwrap());

/// Minimum length for a username identifier.
pub const MIN_USERNAME_LEN: usize = 4;

/// A classified login identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIdentifier {
    /// Anything shaped like an email, lowercased.
    Email(String),
    /// Everything else, kept verbatim.
    Username(String),
}

impl LoginIdentifier {
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        if EMAIL_RE.is_match(raw) {
            LoginIdentifier::Email(raw.to_lowercase())
        } else {
            LoginIdentifier::Username(raw.to_string())
        }
    }
}

/// A phone number is 7 to 20 digits, nothing else.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}
