//! Salted credential hashing.
//!
//! Stored format: `pbkdf2-sha256$<iterations>$<salt-b64>$<digest-b64>`.
//! Verification recomputes the digest with the stored parameters and
//! compares in constant time. Malformed stored values never verify.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub const PBKDF2_ITERATIONS: u32 = 600_000;
pub const SALT_LENGTH: usize = 16;
pub const DIGEST_LENGTH: usize = 32;

const SCHEME: &str = "pbkdf2-sha256";

/// Verification predicate the identity resolver depends on.
pub trait CredentialVerifier: Send + Sync {
    /// Hash a plaintext credential for storage.
    fn hash(&self, credential: &str) -> String;

    /// Check a plaintext credential against a stored hash string.
    fn verify(&self, credential: &str, stored: &str) -> bool;

    /// A well-formed hash that matches no issued credential. The
    /// resolver verifies against this when no account row exists, so
    /// the missing-account and wrong-credential paths do the same work.
    fn decoy_hash(&self) -> &str;
}

/// PBKDF2-HMAC-SHA256 with a random per-credential salt.
pub struct Pbkdf2Verifier {
    iterations: u32,
    decoy: String,
}

impl Pbkdf2Verifier {
    pub fn new() -> Self {
        Self::with_iterations(PBKDF2_ITERATIONS)
    }

    /// Reduced iteration count for tests; production uses `new`.
    pub fn with_iterations(iterations: u32) -> Self {
        let mut verifier = Self {
            iterations,
            decoy: String::new(),
        };
        verifier.decoy = verifier.hash("decoy-credential-never-issued");
        verifier
    }

    fn derive(&self, credential: &str, salt: &[u8], iterations: u32) -> [u8; DIGEST_LENGTH] {
        let mut digest = [0u8; DIGEST_LENGTH];
        pbkdf2_hmac::<Sha256>(credential.as_bytes(), salt, iterations, &mut digest);
        digest
    }
}

impl Default for Pbkdf2Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for Pbkdf2Verifier {
    fn hash(&self, credential: &str) -> String {
        let mut salt = [0u8; SALT_LENGTH];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = self.derive(credential, &salt, self.iterations);
        format!(
            "{SCHEME}${}${}${}",
            self.iterations,
            URL_SAFE_NO_PAD.encode(salt),
            URL_SAFE_NO_PAD.encode(digest),
        )
    }

    fn verify(&self, credential: &str, stored: &str) -> bool {
        let mut parts = stored.split('$');
        let (Some(scheme), Some(iters), Some(salt), Some(digest), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return false;
        };
        if scheme != SCHEME {
            return false;
        }
        let Ok(iterations) = iters.parse::<u32>() else {
            return false;
        };
        let (Ok(salt), Ok(expected)) =
            (URL_SAFE_NO_PAD.decode(salt), URL_SAFE_NO_PAD.decode(digest))
        else {
            return false;
        };
        if expected.len() != DIGEST_LENGTH {
            return false;
        }
        let actual = self.derive(credential, &salt, iterations);
        bool::from(actual.as_slice().ct_eq(expected.as_slice()))
    }

    fn decoy_hash(&self) -> &str {
        &self.decoy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_verifier() -> Pbkdf2Verifier {
        Pbkdf2Verifier::with_iterations(1_000)
    }

    #[test]
    fn hash_then_verify_roundtrip() {
        let verifier = fast_verifier();
        let stored = verifier.hash("correct horse battery staple");
        assert!(verifier.verify("correct horse battery staple", &stored));
    }

    #[test]
    fn wrong_credential_fails() {
        let verifier = fast_verifier();
        let stored = verifier.hash("right-password");
        assert!(!verifier.verify("wrong-password", &stored));
    }

    #[test]
    fn hashes_are_salted() {
        let verifier = fast_verifier();
        let a = verifier.hash("same-password");
        let b = verifier.hash("same-password");
        assert_ne!(a, b);
        assert!(verifier.verify("same-password", &a));
        assert!(verifier.verify("same-password", &b));
    }

    #[test]
    fn stored_format_is_self_describing() {
        let verifier = fast_verifier();
        let stored = verifier.hash("pw");
        let parts: Vec<&str> = stored.split('$').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "pbkdf2-sha256");
        assert_eq!(parts[1], "1000");
    }

    #[test]
    fn verify_honors_stored_iteration_count() {
        // A hash written with one cost verifies under a verifier
        // configured with another.
        let writer = Pbkdf2Verifier::with_iterations(2_000);
        let reader = fast_verifier();
        let stored = writer.hash("pw");
        assert!(reader.verify("pw", &stored));
    }

    #[test]
    fn malformed_stored_values_never_verify() {
        let verifier = fast_verifier();
        assert!(!verifier.verify("pw", ""));
        assert!(!verifier.verify("pw", "plaintext-password"));
        assert!(!verifier.verify("pw", "bcrypt$10$abc$def"));
        assert!(!verifier.verify("pw", "pbkdf2-sha256$notanumber$aaaa$bbbb"));
        assert!(!verifier.verify("pw", "pbkdf2-sha256$1000$!!!$bbbb"));
        assert!(!verifier.verify("pw", "pbkdf2-sha256$1000$aaaa"));
        assert!(!verifier.verify("pw", "pbkdf2-sha256$1000$aaaa$bbbb$extra"));
    }

    #[test]
    fn truncated_digest_never_verifies() {
        let verifier = fast_verifier();
        let stored = verifier.hash("pw");
        let truncated: String = stored[..stored.len() - 8].to_string();
        assert!(!verifier.verify("pw", &truncated));
    }

    #[test]
    fn decoy_hash_is_well_formed_but_matches_nothing_typical() {
        let verifier = fast_verifier();
        let decoy = verifier.decoy_hash();
        assert!(decoy.starts_with("pbkdf2-sha256$"));
        assert!(!verifier.verify("", decoy));
        assert!(!verifier.verify("password", decoy));
        assert!(!verifier.verify("0000", decoy));
    }

    #[test]
    fn production_cost_takes_meaningful_time() {
        let verifier = Pbkdf2Verifier::new();
        let start = std::time::Instant::now();
        let _stored = verifier.hash("test-credential");
        let elapsed = start.elapsed();
        assert!(
            elapsed.as_millis() > 50,
            "PBKDF2 too fast: {}ms — brute force protection insufficient",
            elapsed.as_millis()
        );
    }
}
