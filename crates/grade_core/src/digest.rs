//! Password digest helper. Rosters store `hex(sha256(utf8(password)))` in lowercase,
//! so every [`Digester`] must produce exactly that encoding.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// The underlying hash primitive was unavailable or failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("digest computation failed: {0}")]
pub struct DigestError(pub String);

/// Computes the lowercase hex digest of a password.
#[allow(async_fn_in_trait)]
pub trait Digester {
    /// # Errors
    /// Returns [`DigestError`] when the hash primitive cannot run.
    async fn digest_hex(&self, text: &str) -> Result<String, DigestError>;
}

/// Pure Rust SHA-256, used natively and as the reference implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Digester;

impl Digester for Sha256Digester {
    async fn digest_hex(&self, text: &str) -> Result<String, DigestError> {
        Ok(sha256_hex(text))
    }
}

#[must_use]
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hex-encodes raw digest bytes produced by an external primitive.
///
/// # Errors
/// Returns [`DigestError`] when the primitive returned the wrong number of bytes.
pub fn encode_digest(bytes: &[u8]) -> Result<String, DigestError> {
    if bytes.len() * 2 != DIGEST_HEX_LEN {
        return Err(DigestError(format!(
            "expected {} digest bytes, got {}",
            DIGEST_HEX_LEN / 2,
            bytes.len()
        )));
    }
    Ok(hex::encode(bytes))
}

/// Whether `value` looks like a digest this crate produces.
#[must_use]
pub fn is_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn output_is_fixed_length_lowercase_hex() {
        for input in ["", "secret", "contraseña", "  spaced  ", "🔑🔑🔑"] {
            let digest = sha256_hex(input);
            assert_eq!(digest.len(), DIGEST_HEX_LEN);
            assert!(is_digest(&digest), "{digest} is not lowercase hex");
        }
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(sha256_hex("secret"), sha256_hex("secret"));
        assert_ne!(sha256_hex("secret"), sha256_hex("Secret"));
    }

    #[test]
    fn is_digest_rejects_uppercase_and_wrong_length() {
        let digest = sha256_hex("abc");
        assert!(!is_digest(&digest.to_uppercase()));
        assert!(!is_digest(&digest[..63]));
        assert!(!is_digest(&format!("{digest}0")));
        assert!(!is_digest(""));
    }

    #[test]
    fn encode_digest_checks_length() {
        assert!(encode_digest(&[0u8; 31]).is_err());
        assert_eq!(encode_digest(&[0xabu8; 32]).unwrap(), "ab".repeat(32));
    }

    #[tokio::test]
    async fn sha256_digester_matches_helper() {
        let digest = Sha256Digester.digest_hex("secret").await.unwrap();
        assert_eq!(digest, sha256_hex("secret"));
    }
}
