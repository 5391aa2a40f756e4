//! SHA-256 hex digests.
//!
//! Refresh secrets are persisted only as these digests; a leaked ledger row
//! never yields a usable token.

use sha2::{Digest, Sha256};

/// SHA-256 digest of `data`, lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        // printf 'evermore' | sha256sum
        assert_eq!(
            sha256_hex(b"evermore"),
            "0cfd735ea3fa7a25b38d5db226a7172890ccfc939e2ec1865debb9d5c2ca683f"
        );
    }

    #[test]
    fn digest_is_deterministic_lowercase_hex() {
        let secret = b"q3zX8mKp2TvR9jW4nYcB7dHgL5sF6aUe";
        let digest = sha256_hex(secret);
        assert_eq!(digest, sha256_hex(secret));
        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
