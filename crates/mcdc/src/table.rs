//! A single decision's expected rows and their observation state

use crate::matrix::{try_zeroed, ConditionMatrix};
use crate::result::{McdcError, McdcResult};
use crate::TableId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coverage verdict for one decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageStatus {
    /// Every expected row was observed
    Pass,
    /// At least one expected row was never observed
    Fail,
    /// Not all declared rows were registered, so the verdict is meaningless
    Incomplete,
}

impl CoverageStatus {
    /// Label used by the text report; incomplete tables print as failures
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail | Self::Incomplete => "FAIL",
        }
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("PASS"),
            Self::Fail => f.write_str("FAIL"),
            Self::Incomplete => f.write_str("INCOMPLETE"),
        }
    }
}

/// Expected condition rows for one decision plus per-row hit counters
#[derive(Debug, Clone)]
pub struct CoverageTable {
    id: TableId,
    name: String,
    expected: ConditionMatrix,
    hits: Vec<u64>,
    registered: usize,
}

impl CoverageTable {
    /// Reserve storage for a `rows x cols` table.
    ///
    /// Both buffers are reserved before the table exists, so a failure
    /// leaves nothing half-built.
    pub(crate) fn try_new(id: TableId, rows: usize, cols: usize, name: String) -> McdcResult<Self> {
        let alloc_failure = |name: &str, err: std::collections::TryReserveError| {
            McdcError::AllocationFailure {
                name: name.to_string(),
                rows,
                cols,
                reason: err.to_string(),
            }
        };

        let hits = try_zeroed::<u64>(rows).map_err(|e| alloc_failure(&name, e))?;
        let expected = ConditionMatrix::try_new(rows, cols).map_err(|e| alloc_failure(&name, e))?;

        Ok(Self {
            id,
            name,
            expected,
            hits,
            registered: 0,
        })
    }

    /// Table identifier
    #[must_use]
    pub const fn id(&self) -> TableId {
        self.id
    }

    /// Decision label, usually the boolean expression text
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared number of expected rows
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.expected.rows()
    }

    /// Number of atomic conditions per row
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.expected.cols()
    }

    /// The expected-row matrix (unregistered rows read as all `false`)
    #[must_use]
    pub const fn expected(&self) -> &ConditionMatrix {
        &self.expected
    }

    /// Rows registered so far
    #[must_use]
    pub const fn registered_rows(&self) -> usize {
        self.registered
    }

    /// Whether every declared row has been registered
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.registered == self.expected.rows()
    }

    /// Whether the row at `index` has been observed at least once
    #[must_use]
    pub fn is_observed(&self, index: usize) -> bool {
        self.hits.get(index).is_some_and(|&h| h > 0)
    }

    /// Number of matching observations for the row at `index`
    #[must_use]
    pub fn hits(&self, index: usize) -> u64 {
        self.hits.get(index).copied().unwrap_or(0)
    }

    /// Per-row observed flags
    #[must_use]
    pub fn observed(&self) -> Vec<bool> {
        self.hits.iter().map(|&h| h > 0).collect()
    }

    /// Number of observed rows
    #[must_use]
    pub fn checks_passed(&self) -> usize {
        self.hits.iter().filter(|&&h| h > 0).count()
    }

    /// Current coverage verdict
    #[must_use]
    pub fn status(&self) -> CoverageStatus {
        if !self.is_complete() {
            CoverageStatus::Incomplete
        } else if self.checks_passed() == self.rows() {
            CoverageStatus::Pass
        } else {
            CoverageStatus::Fail
        }
    }

    pub(crate) fn ensure_width(&self, conditions: &[bool]) -> McdcResult<()> {
        if conditions.len() == self.cols() {
            Ok(())
        } else {
            Err(McdcError::WidthMismatch {
                table: self.id,
                expected: self.cols(),
                actual: conditions.len(),
            })
        }
    }

    /// Append the next expected row and return its index
    pub(crate) fn push_row(&mut self, conditions: &[bool]) -> McdcResult<usize> {
        if self.is_complete() {
            return Err(McdcError::RowOverflow {
                table: self.id,
                rows: self.rows(),
            });
        }
        self.ensure_width(conditions)?;

        let index = self.registered;
        self.expected.set_row(index, conditions);
        self.registered += 1;
        Ok(index)
    }

    /// Registered rows only, in registration order
    pub(crate) fn registered_row_slices(&self) -> impl Iterator<Item = &[bool]> {
        self.expected.iter_rows().take(self.registered)
    }

    pub(crate) fn record_hit(&mut self, index: usize) {
        if let Some(h) = self.hits.get_mut(index) {
            *h = h.saturating_add(1);
        }
    }

    pub(crate) fn add_hits(&mut self, other: &Self) {
        for (mine, theirs) in self.hits.iter_mut().zip(&other.hits) {
            *mine = mine.saturating_add(*theirs);
        }
    }

    pub(crate) fn clear_hits(&mut self) {
        self.hits.fill(0);
    }

    /// Same name, shape, and registered rows
    pub(crate) fn same_design(&self, other: &Self) -> bool {
        self.name == other.name
            && self.registered == other.registered
            && self.expected == other.expected
    }
}
