//! Rail Fence: zig-zag transposition over N rails.
//!
//! Characters are written diagonally down and up across the rails and read
//! off rail by rail. The cipher works on Unicode scalar values with no
//! filtering, so whitespace, punctuation and emoji are transposed like any
//! letter.

use log::debug;

use crate::cipher::{CipherKind, TextCipher};
use crate::error::CipherError;
use crate::utils::grid::Grid;

/// Fewest rails that produce a transposition.
pub const MIN_RAILS: usize = 2;

/// Rail index of each successive column along the zig-zag.
///
/// Starts on rail 0, bounces off the first and last rail. With a single rail
/// the walk stays on rail 0.
#[derive(Debug, Clone)]
struct RailPath {
    rails: usize,
    row: usize,
    descending: bool,
    remaining: usize,
}

impl RailPath {
    fn new(len: usize, rails: usize) -> Self {
        RailPath {
            rails,
            row: 0,
            descending: true,
            remaining: len,
        }
    }
}

impl Iterator for RailPath {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.row;
        if self.rails > 1 {
            if current == 0 {
                self.descending = true;
            } else if current == self.rails - 1 {
                self.descending = false;
            }
            self.row = if self.descending {
                current + 1
            } else {
                current - 1
            };
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RailPath {}

/// Rail Fence cipher with a fixed rail count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    /// Creates a Rail Fence cipher over `rails` rails.
    ///
    /// A rail count at or above the text length is allowed: every character
    /// then sits on its own rail and the output equals the input.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `rails < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::RailFence;
    ///
    /// assert!(RailFence::new(3).is_ok());
    /// assert!(RailFence::new(1).is_err());
    /// ```
    pub fn new(rails: usize) -> Result<Self, CipherError> {
        if rails < MIN_RAILS {
            return Err(CipherError::invalid_key(format!(
                "rails must be at least {}, got {}",
                MIN_RAILS, rails
            )));
        }
        Ok(RailFence { rails })
    }

    /// Number of rails.
    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Lays `text` out on the fence: one row per rail, one column per
    /// character, each character on the rail the zig-zag reaches at its
    /// column. Rails beyond the text length are never reached and are
    /// left out.
    pub fn fence(&self, text: &str) -> Grid<char> {
        lay_out(&text.chars().collect::<Vec<_>>(), self.rails)
    }
}

/// Rails the zig-zag can reach over `len` characters.
///
/// The walk moves one rail per column, so rail `len` and beyond stay empty;
/// sizing the fence by this bound keeps huge rail counts cheap.
fn reachable_rails(rails: usize, len: usize) -> usize {
    rails.min(len.max(1))
}

fn lay_out(chars: &[char], rails: usize) -> Grid<char> {
    let rails = reachable_rails(rails, chars.len());
    let mut grid = Grid::new(rails, chars.len());
    for (col, (row, &ch)) in RailPath::new(chars.len(), rails).zip(chars).enumerate() {
        grid.set(row, col, ch);
    }
    grid
}

fn encrypt_chars(chars: &[char], rails: usize) -> String {
    lay_out(chars, rails).read_row_major().collect()
}

/// Marks the zig-zag cells, fills them rail by rail with the ciphertext,
/// then reads them back along the zig-zag.
fn decrypt_chars(chars: &[char], rails: usize) -> String {
    let len = chars.len();
    let rails = reachable_rails(rails, len);

    let mut marks = Grid::new(rails, len);
    for (col, row) in RailPath::new(len, rails).enumerate() {
        marks.set(row, col, ());
    }

    let mut fence = Grid::new(rails, len);
    for ((row, col), &ch) in marks.occupied_positions().zip(chars) {
        fence.set(row, col, ch);
    }

    RailPath::new(len, rails)
        .enumerate()
        .filter_map(|(col, row)| fence.get(row, col))
        .collect()
}

impl TextCipher for RailFence {
    fn kind(&self) -> CipherKind {
        CipherKind::RailFence
    }

    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = plaintext.chars().collect();
        debug!(
            "Rail Fence encrypting {} chars over {} rails",
            chars.len(),
            self.rails
        );
        Ok(encrypt_chars(&chars, self.rails))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = ciphertext.chars().collect();
        debug!(
            "Rail Fence decrypting {} chars over {} rails",
            chars.len(),
            self.rails
        );
        Ok(decrypt_chars(&chars, self.rails))
    }
}
