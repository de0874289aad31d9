//! Result and error types for MC/DC tracking.

use crate::TableId;
use thiserror::Error;

/// Result type for MC/DC operations
pub type McdcResult<T> = Result<T, McdcError>;

/// Errors that can occur while building or observing decision tables
#[derive(Debug, Error)]
pub enum McdcError {
    /// A table was requested with zero rows or zero columns
    #[error("Invalid table dimensions: {rows} x {cols} (both must be > 0)")]
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Storage for a table could not be reserved
    #[error("MC/DC table allocation failed for '{name}' ({rows} x {cols}): {reason}")]
    AllocationFailure {
        /// Decision name
        name: String,
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Why the reservation failed
        reason: String,
    },

    /// The context already holds the configured maximum number of tables
    #[error("Tried to allocate more than {limit} MC/DC tables")]
    TooManyTables {
        /// Configured table limit
        limit: usize,
    },

    /// A row was registered before any table was allocated
    #[error("No MC/DC table has been allocated to register rows into")]
    NoTableAllocated,

    /// More rows were registered than the table declared
    #[error("Table {table} already holds all {rows} declared rows")]
    RowOverflow {
        /// Table being built
        table: TableId,
        /// Declared row count
        rows: usize,
    },

    /// A table index beyond the context length was referenced
    #[error("Table index {index} out of range (context holds {len} tables)")]
    TableOutOfRange {
        /// Requested index
        index: usize,
        /// Number of tables in the context
        len: usize,
    },

    /// A condition vector does not have one entry per column
    #[error("Table {table} expects {expected} conditions, got {actual}")]
    WidthMismatch {
        /// Table addressed
        table: TableId,
        /// Column count of the table
        expected: usize,
        /// Length of the supplied vector
        actual: usize,
    },

    /// A builder was finished before every declared row was registered
    #[error("Table {table} is incomplete: {registered} of {rows} rows registered")]
    IncompleteTable {
        /// Table being built
        table: TableId,
        /// Rows registered so far
        registered: usize,
        /// Declared row count
        rows: usize,
    },

    /// Two contexts with different table designs were merged
    #[error("Cannot merge observations: {message}")]
    ShapeMismatch {
        /// What differed
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McdcError {
    /// Create a shape mismatch error
    #[must_use]
    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            message: message.into(),
        }
    }

    /// Whether this error signals a broken instrumentation protocol
    /// (as opposed to a resource or I/O condition the caller can work around)
    #[must_use]
    pub const fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            Self::NoTableAllocated
                | Self::RowOverflow { .. }
                | Self::TableOutOfRange { .. }
                | Self::WidthMismatch { .. }
                | Self::IncompleteTable { .. }
        )
    }
}
