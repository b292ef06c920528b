//! Row-major 2-D buffer with optional cells.
//!
//! Used as call-scoped scaffolding by the transposition ciphers: the Rail
//! Fence places characters along its zig-zag path, the Columnar
//! Transposition fills rows and drains columns. Cells that were never written
//! stay empty and are skipped by every read.
//!
//! Storage is a single contiguous `Vec` addressed by `row * cols + col`.

use std::fmt;

/// Fixed-size grid of optional cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
}

impl<T: Copy> Grid<T> {
    /// Creates a grid of `rows × cols` empty cells.
    ///
    /// Callers size grids from the text length, so the cell count stays
    /// proportional to the input.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("grid of {} x {} cells overflows usize", rows, cols));
        Grid {
            rows,
            cols,
            cells: vec![None; cells],
        }
    }

    /// Creates a grid and fills it left to right, top to bottom.
    ///
    /// Filling stops when `items` runs out or the grid is full, so the
    /// trailing cells of the last row stay empty when there are fewer
    /// items than cells.
    ///
    /// # Parameters
    /// - `rows`: Number of rows.
    /// - `cols`: Number of columns.
    /// - `items`: Values to place in row-major order.
    pub fn filled_row_major<I>(rows: usize, cols: usize, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut grid = Self::new(rows, cols);
        for (cell, item) in grid.cells.iter_mut().zip(items) {
            *cell = Some(item);
        }
        grid
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the value at (`row`, `col`), or `None` if the cell is empty
    /// or outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// Writes `value` at (`row`, `col`).
    ///
    /// Writes outside the grid are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = Some(value);
        }
    }

    /// Returns `true` if (`row`, `col`) holds a value.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates over the values row by row, skipping empty cells.
    pub fn read_row_major(&self) -> impl Iterator<Item = T> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Iterates down a single column, skipping empty cells.
    ///
    /// An out-of-range column yields nothing.
    pub fn read_column(&self, col: usize) -> impl Iterator<Item = T> + '_ {
        let rows = if col < self.cols { self.rows } else { 0 };
        (0..rows).filter_map(move |row| self.get(row, col))
    }

    /// Iterates over the coordinates of occupied cells in row-major order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(move |(index, _)| (index / cols, index % cols))
    }
}

/// Renders one row per line, cells separated by a space, `_` for empty cells.
impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col).unwrap_or('_'))?;
            }
        }
        Ok(())
    }
}
