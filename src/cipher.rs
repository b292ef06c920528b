//! Shared cipher contract and runtime selection.
//!
//! [`TextCipher`] is the reversible-transformation capability every cipher
//! implements. [`Cipher`] wraps the three concrete ciphers in one sum type
//! so callers can pick an algorithm at runtime from a [`CipherKind`] and a
//! key string.

use std::fmt;
use std::str::FromStr;

use crate::columnar::Columnar;
use crate::error::CipherError;
use crate::playfair::Playfair;
use crate::rail_fence::RailFence;

/// A reversible text transformation bound to a validated key.
///
/// Implementations are immutable after construction: every call allocates
/// its own working buffers and nothing is shared between calls.
pub trait TextCipher {
    /// Which algorithm this is.
    fn kind(&self) -> CipherKind;

    /// Encrypts `plaintext`.
    ///
    /// # Errors
    /// Implementations only fail on structural problems with the input.
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError>;

    /// Decrypts `ciphertext`.
    ///
    /// # Errors
    /// Returns [`CipherError::MalformedCiphertext`] if `ciphertext` breaks a
    /// structural precondition of the cipher. Well-formed text that was never
    /// encrypted under this key decrypts to some output, not an error.
    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError>;
}

/// Algorithm tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// 5×5 digraph substitution.
    Playfair,
    /// Zig-zag transposition.
    RailFence,
    /// Key-ranked column transposition.
    Columnar,
}

impl CipherKind {
    /// All kinds, in display order.
    pub const ALL: [CipherKind; 3] = [
        CipherKind::Playfair,
        CipherKind::RailFence,
        CipherKind::Columnar,
    ];

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Playfair => "playfair",
            CipherKind::RailFence => "railfence",
            CipherKind::Columnar => "columnar",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a cipher name, ignoring case and `-`/`_` separators.
impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.name() == folded)
            .ok_or_else(|| CipherError::UnknownCipher(s.to_string()))
    }
}

/// One of the three ciphers, chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    /// Playfair digraph substitution.
    Playfair(Playfair),
    /// Rail Fence zig-zag transposition.
    RailFence(RailFence),
    /// Columnar Transposition.
    Columnar(Columnar),
}

impl Cipher {
    /// Builds the cipher of `kind` from a key string.
    ///
    /// For the Rail Fence the key is the rail count in decimal.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if the key does not suit `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{Cipher, CipherKind, TextCipher};
    ///
    /// let cipher = Cipher::new(CipherKind::Columnar, "3214").unwrap();
    /// assert_eq!(cipher.encrypt("ATTACKATDAWN").unwrap(), "TAWTKAACDATN");
    ///
    /// assert!(Cipher::new(CipherKind::RailFence, "three").is_err());
    /// ```
    pub fn new(kind: CipherKind, key: &str) -> Result<Self, CipherError> {
        match kind {
            CipherKind::Playfair => Playfair::new(key).map(Cipher::Playfair),
            CipherKind::RailFence => {
                let rails = key.trim().parse::<usize>().map_err(|_| {
                    CipherError::invalid_key(format!(
                        "rail count must be a non-negative integer, got '{}'",
                        key
                    ))
                })?;
                RailFence::new(rails).map(Cipher::RailFence)
            }
            CipherKind::Columnar => Columnar::new(key).map(Cipher::Columnar),
        }
    }

    fn inner(&self) -> &dyn TextCipher {
        match self {
            Cipher::Playfair(cipher) => cipher,
            Cipher::RailFence(cipher) => cipher,
            Cipher::Columnar(cipher) => cipher,
        }
    }
}

impl TextCipher for Cipher {
    fn kind(&self) -> CipherKind {
        self.inner().kind()
    }

    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        self.inner().encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        self.inner().decrypt(ciphertext)
    }
}

impl From<Playfair> for Cipher {
    fn from(cipher: Playfair) -> Self {
        Cipher::Playfair(cipher)
    }
}

impl From<RailFence> for Cipher {
    fn from(cipher: RailFence) -> Self {
        Cipher::RailFence(cipher)
    }
}

impl From<Columnar> for Cipher {
    fn from(cipher: Columnar) -> Self {
        Cipher::Columnar(cipher)
    }
}
