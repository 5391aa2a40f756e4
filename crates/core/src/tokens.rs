//! Opaque refresh-secret generation and hashing.
//!
//! Refresh tokens are random alphanumeric strings handed to the client in an
//! HTTP-only cookie. Only the SHA-256 hex digest is ever persisted, so a
//! database leak does not expose usable session secrets.

use rand::Rng;

/// Length of the generated refresh secret (alphanumeric characters).
///
/// 48 characters drawn from a 62-symbol alphabet carry roughly 286 bits of
/// entropy, comfortably above the 256-bit floor required for session secrets.
pub const REFRESH_SECRET_LENGTH: usize = 48;

/// The result of generating a new refresh secret.
pub struct GeneratedSecret {
    /// The plaintext secret (sent to the client exactly once, never stored).
    pub plaintext: String,
    /// The SHA-256 hex digest of the plaintext (stored in the database).
    pub hash: String,
}

/// Generate a new random refresh secret.
pub fn generate_refresh_secret() -> GeneratedSecret {
    let plaintext: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(REFRESH_SECRET_LENGTH)
        .map(char::from)
        .collect();

    let hash = hash_refresh_secret(&plaintext);

    GeneratedSecret { plaintext, hash }
}

/// Compute the SHA-256 hex digest of a refresh secret.
///
/// Used both at issuance (to store the hash) and at rotation (to look the
/// presented secret up by hash).
pub fn hash_refresh_secret(secret: &str) -> String {
    crate::hashing::sha256_hex(secret.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_secret_has_correct_length() {
        let secret = generate_refresh_secret();
        assert_eq!(secret.plaintext.len(), REFRESH_SECRET_LENGTH);
    }

    #[test]
    fn generated_secret_is_alphanumeric() {
        let secret = generate_refresh_secret();
        assert!(
            secret.plaintext.chars().all(|c| c.is_ascii_alphanumeric()),
            "Secret should be purely alphanumeric"
        );
    }

    #[test]
    fn hash_matches_regeneration() {
        let secret = generate_refresh_secret();
        let rehash = hash_refresh_secret(&secret.plaintext);
        assert_eq!(secret.hash, rehash);
    }

    #[test]
    fn hash_is_sha256_hex() {
        let secret = generate_refresh_secret();
        assert_eq!(secret.hash.len(), 64, "SHA-256 hex digest should be 64 chars");
        assert!(secret.hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_secrets_produce_different_hashes() {
        let a = generate_refresh_secret();
        let b = generate_refresh_secret();
        assert_ne!(a.plaintext, b.plaintext);
        assert_ne!(a.hash, b.hash);
    }
}
