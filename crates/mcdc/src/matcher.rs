//! Row matching
//!
//! An observed condition vector is compared against a table's registered
//! rows for exact equality. The first (lowest index) match wins; anything
//! that matches nothing is discarded.

use crate::table::CoverageTable;
use serde::Serialize;

/// Result of offering one observation to a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckOutcome {
    /// The observation equals the expected row at `row`
    Matched {
        /// Index of the first matching expected row
        row: usize,
    },
    /// No registered row equals the observation
    NoMatch,
}

impl CheckOutcome {
    /// Whether the observation hit an expected row
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Index of the matched row, if any
    #[must_use]
    pub const fn row(self) -> Option<usize> {
        match self {
            Self::Matched { row } => Some(row),
            Self::NoMatch => None,
        }
    }
}

/// Index of the first registered row equal to `observed`.
///
/// Rows that were declared but never registered are skipped, so an all-`false`
/// observation cannot match zeroed storage.
#[must_use]
pub fn find_first_match(table: &CoverageTable, observed: &[bool]) -> Option<usize> {
    table
        .registered_row_slices()
        .position(|expected| expected == observed)
}

/// Render a condition vector as `T`/`F` letters, e.g. `TFT`
#[must_use]
pub fn format_conditions(conditions: &[bool]) -> String {
    conditions
        .iter()
        .map(|&c| if c { 'T' } else { 'F' })
        .collect()
}
