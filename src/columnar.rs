//! Columnar Transposition ordered by key ranking.
//!
//! The message fills a grid row by row, one column per key symbol, and the
//! columns are read out in the alphabetical order of their key symbols.
//! The last row is left ragged instead of padded, which keeps the transform
//! exactly invertible.

use log::debug;

use crate::cipher::{CipherKind, TextCipher};
use crate::error::CipherError;
use crate::utils::grid::Grid;
use crate::utils::normalize;

/// Ranks key symbols into a column read order.
///
/// Column indices are stably sorted by their symbol, so repeated symbols
/// keep their left-to-right order and the result is always a permutation
/// of `0..symbols.len()`.
///
/// # Examples
///
/// ```
/// use classicrypt::columnar::column_order;
///
/// let key: Vec<char> = "3214".chars().collect();
/// assert_eq!(column_order(&key), vec![2, 1, 0, 3]);
/// ```
pub fn column_order(symbols: &[char]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..symbols.len()).collect();
    order.sort_by_key(|&col| symbols[col]);
    order
}

/// Columnar Transposition cipher bound to one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columnar {
    order: Vec<usize>,
}

impl Columnar {
    /// Creates a Columnar Transposition cipher for `key`.
    ///
    /// Whitespace in the key is ignored and the remaining symbols are
    /// upper-cased; each one becomes a column. Words (`"ZEBRAS"`) and digit
    /// permutations (`"4312567"`) rank the same way.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if the key has no symbols left.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::Columnar;
    ///
    /// let columnar = Columnar::new("ZEBRAS").unwrap();
    /// assert_eq!(columnar.order(), &[4, 2, 1, 3, 5, 0]);
    /// assert!(Columnar::new(" ").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let symbols = normalize::columnar_text(key);
        if symbols.is_empty() {
            return Err(CipherError::invalid_key(
                "Columnar key needs at least one non-whitespace symbol",
            ));
        }
        Ok(Columnar {
            order: column_order(&symbols),
        })
    }

    /// Column read order: `order()[k]` is the grid column read k-th.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of grid columns.
    pub fn columns(&self) -> usize {
        self.order.len()
    }

    /// The normalized message laid out row by row, for display.
    pub fn grid(&self, message: &str) -> Grid<char> {
        let text = normalize::columnar_text(message);
        let rows = text.len().div_ceil(self.columns());
        Grid::filled_row_major(rows, self.columns(), text)
    }
}

impl TextCipher for Columnar {
    fn kind(&self) -> CipherKind {
        CipherKind::Columnar
    }

    /// Normalizes `plaintext` (whitespace removed, upper-cased) and
    /// transposes it.
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let grid = self.grid(plaintext);
        debug!(
            "Columnar encrypting {}x{} grid, column order {:?}",
            grid.rows(),
            grid.cols(),
            self.order
        );
        Ok(self
            .order
            .iter()
            .flat_map(|&col| grid.read_column(col))
            .collect())
    }

    /// Reverses [`encrypt`](TextCipher::encrypt).
    ///
    /// The ciphertext is normalized the same way as plaintext. Empty trailing
    /// cells sit at the end of the last row, so the rightmost `extra` grid
    /// columns are one row shorter than the others.
    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let text = normalize::columnar_text(ciphertext);
        let cols = self.columns();
        let rows = text.len().div_ceil(cols);
        let extra = rows * cols - text.len();
        debug!(
            "Columnar decrypting {}x{} grid, {} short columns",
            rows, cols, extra
        );

        let column_len = |col: usize| if col >= cols - extra { rows - 1 } else { rows };

        let mut grid = Grid::new(rows, cols);
        let mut symbols = text.into_iter();
        for &col in &self.order {
            for row in 0..column_len(col) {
                if let Some(symbol) = symbols.next() {
                    grid.set(row, col, symbol);
                }
            }
        }
        Ok(grid.read_row_major().collect())
    }
}
