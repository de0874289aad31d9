//! Fixed-shape boolean grid for expected condition rows
//!
//! Row-major storage addressed as `row * cols + col`, exposed only through
//! bounds-checked accessors.

use serde::Serialize;
use std::collections::TryReserveError;

/// Reserve exactly `len` slots and fill them with the default value.
///
/// Fails instead of aborting when the reservation cannot be satisfied.
pub(crate) fn try_zeroed<T: Clone + Default>(len: usize) -> Result<Vec<T>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, T::default());
    Ok(v)
}

/// A `rows x cols` matrix of condition values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl ConditionMatrix {
    /// Allocate an all-`false` matrix
    pub(crate) fn try_new(rows: usize, cols: usize) -> Result<Self, TryReserveError> {
        // rows * cols is checked against the cell limit by the caller
        let cells = try_zeroed(rows * cols)?;
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (conditions per row)
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow one row, or `None` past the last row
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[bool]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        self.cells.get(start..start + self.cols)
    }

    /// Read a single cell
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if col >= self.cols {
            return None;
        }
        self.row(row).map(|r| r[col])
    }

    /// Overwrite one row; the caller has already checked the width
    pub(crate) fn set_row(&mut self, index: usize, values: &[bool]) {
        debug_assert_eq!(values.len(), self.cols);
        let start = index * self.cols;
        self.cells[start..start + self.cols].copy_from_slice(values);
    }

    /// Iterate over every row in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }
}
