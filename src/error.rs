//! Error types for the classicrypt library.

use thiserror::Error;

/// Errors produced by the classicrypt library.
///
/// Only structural problems are reported: a key of the wrong shape or a
/// ciphertext that no encryption could have produced. Decrypting well-formed
/// text that was never encrypted under the same key is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The key cannot drive the selected cipher.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// The ciphertext breaks a structural precondition of the cipher.
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),
    /// The cipher name is not one of `playfair`, `railfence` or `columnar`.
    #[error("unknown cipher '{0}' (expected playfair, railfence or columnar)")]
    UnknownCipher(String),
}

impl CipherError {
    pub(crate) fn invalid_key(reason: impl Into<String>) -> Self {
        CipherError::InvalidKey(reason.into())
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        CipherError::MalformedCiphertext(reason.into())
    }
}
