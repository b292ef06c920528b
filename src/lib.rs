//! Classical cipher toolkit.
//!
//! Three pedagogical ciphers behind one reversible text contract:
//! a Playfair digraph substitution over a key-derived 5×5 matrix, a Rail
//! Fence zig-zag transposition and a Columnar Transposition ordered by key
//! ranking. None of them offers any security; they exist to be studied.
//!
//! # Architecture
//!
//! ```text
//! utils::normalize  (case folding, I/J merge, whitespace/non-letter removal)
//! utils::grid       (call-scoped 2-D buffer with empty cells)
//!     ↓
//! Playfair  ·  RailFence  ·  Columnar      (each implements TextCipher)
//!     ↓
//! Cipher    (tagged sum type selected by CipherKind)
//! ```
//!
//! Keys are validated when a cipher is constructed. A constructed cipher is
//! immutable, so the same value can be shared freely between threads.
//!
//! # Examples
//!
//! Encrypt and decrypt with a cipher chosen at runtime:
//!
//! ```
//! use classicrypt::{Cipher, CipherKind, TextCipher};
//!
//! let cipher = Cipher::new(CipherKind::RailFence, "3").unwrap();
//! let sealed = cipher.encrypt("WEAREDISCOVEREDFLEEATONCE").unwrap();
//! assert_eq!(sealed, "WECRLTEERDSOEEFEAOCAIVDEN");
//! assert_eq!(cipher.decrypt(&sealed).unwrap(), "WEAREDISCOVEREDFLEEATONCE");
//! ```
//!
//! Inspect the Playfair matrix for a key:
//!
//! ```
//! use classicrypt::Playfair;
//!
//! let playfair = Playfair::new("MONARCHY").unwrap();
//! let first_row: String = playfair.matrix().row(0).iter().collect();
//! assert_eq!(first_row, "MONAR");
//! ```

#![deny(clippy::all)]

pub mod cipher;
pub mod columnar;
pub mod error;
pub mod playfair;
pub mod rail_fence;
pub mod utils;

pub use cipher::{Cipher, CipherKind, TextCipher};
pub use columnar::Columnar;
pub use error::CipherError;
pub use playfair::{Matrix, Playfair};
pub use rail_fence::RailFence;
