//! Context configuration
//!
//! Limits and logging switches for a [`CoverageContext`](crate::CoverageContext).

/// Default maximum number of decision tables per context
pub const DEFAULT_MAX_TABLES: usize = 1000;

/// Largest accepted table limit; table IDs are `u32`
pub const MAX_TABLES_LIMIT: usize = u32::MAX as usize;

/// Default maximum number of condition cells (`rows * cols`) per table
pub const DEFAULT_MAX_CELLS_PER_TABLE: usize = 1 << 20;

/// MC/DC context configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McdcConfig {
    /// Maximum number of tables the context accepts
    pub max_tables: usize,
    /// Maximum `rows * cols` for a single table
    pub max_cells_per_table: usize,
    /// Emit a debug event for observations that match no expected row
    pub log_unmatched: bool,
}

impl McdcConfig {
    /// The default configuration, usable in `const` contexts
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_tables: DEFAULT_MAX_TABLES,
            max_cells_per_table: DEFAULT_MAX_CELLS_PER_TABLE,
            log_unmatched: false,
        }
    }

    /// Create a builder for the configuration
    #[must_use]
    pub fn builder() -> McdcConfigBuilder {
        McdcConfigBuilder::default()
    }
}

impl Default for McdcConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`McdcConfig`]
#[derive(Debug, Default)]
pub struct McdcConfigBuilder {
    max_tables: usize,
    max_cells_per_table: usize,
    log_unmatched: bool,
}

impl McdcConfigBuilder {
    /// Set the table limit
    #[must_use]
    pub fn max_tables(mut self, max: usize) -> Self {
        self.max_tables = max;
        self
    }

    /// Set the per-table cell limit
    #[must_use]
    pub fn max_cells_per_table(mut self, max: usize) -> Self {
        self.max_cells_per_table = max;
        self
    }

    /// Log observations that match no expected row
    #[must_use]
    pub fn log_unmatched(mut self, enabled: bool) -> Self {
        self.log_unmatched = enabled;
        self
    }

    /// Build the configuration
    ///
    /// Zero limits fall back to the defaults. The table limit is capped at
    /// [`MAX_TABLES_LIMIT`].
    #[must_use]
    pub fn build(self) -> McdcConfig {
        McdcConfig {
            max_tables: if self.max_tables == 0 {
                DEFAULT_MAX_TABLES
            } else {
                self.max_tables.min(MAX_TABLES_LIMIT)
            },
            max_cells_per_table: if self.max_cells_per_table == 0 {
                DEFAULT_MAX_CELLS_PER_TABLE
            } else {
                self.max_cells_per_table
            },
            log_unmatched: self.log_unmatched,
        }
    }
}
