//! Coverage Context
//!
//! Owns every decision table of a test run, in allocation order. Tables are
//! append-only: they are never removed or reordered except by an explicit
//! [`CoverageContext::reset`].
//!
//! # Protocol
//!
//! 1. [`allocate_table`](CoverageContext::allocate_table) (or
//!    [`build_table`](CoverageContext::build_table)) for each decision
//! 2. register every expected row of that table before allocating the next
//! 3. instrumented code calls [`check_row`](CoverageContext::check_row)
//! 4. [`evaluate`](CoverageContext::evaluate) once the run is over
//!
//! Registration always targets the most recently allocated table, so rows
//! cannot land in another table's storage.

use crate::matcher::{find_first_match, format_conditions, CheckOutcome};
use crate::report::McdcReport;
use crate::result::{McdcError, McdcResult};
use crate::table::CoverageTable;
use crate::{McdcConfig, TableId};
use tracing::{debug, error, info, trace};

/// Registry of decision tables for one test run
#[derive(Debug, Default)]
pub struct CoverageContext {
    config: McdcConfig,
    tables: Vec<CoverageTable>,
}

impl CoverageContext {
    /// Create an empty context with the default configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: McdcConfig::new(),
            tables: Vec::new(),
        }
    }

    /// Create an empty context with the given configuration
    #[must_use]
    pub fn with_config(config: McdcConfig) -> Self {
        Self {
            config,
            tables: Vec::new(),
        }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &McdcConfig {
        &self.config
    }

    /// Allocate a new `rows x cols` table and return its ID.
    ///
    /// The name is copied. On failure nothing is appended and the table
    /// count is unchanged.
    pub fn allocate_table(
        &mut self,
        rows: usize,
        cols: usize,
        name: impl Into<String>,
    ) -> McdcResult<TableId> {
        let name = name.into();

        if rows == 0 || cols == 0 {
            return Err(McdcError::InvalidDimensions { rows, cols });
        }
        if self.tables.len() >= self.config.max_tables {
            return Err(McdcError::TooManyTables {
                limit: self.config.max_tables,
            });
        }

        let limit = self.config.max_cells_per_table;
        let within_limit = rows.checked_mul(cols).is_some_and(|cells| cells <= limit);
        if !within_limit {
            let err = McdcError::AllocationFailure {
                name,
                rows,
                cols,
                reason: format!("exceeds the limit of {limit} cells per table"),
            };
            error!(error = %err, "MC/DC table allocation");
            return Err(err);
        }

        let id = u32::try_from(self.tables.len())
            .map(TableId::new)
            .map_err(|_| McdcError::TooManyTables {
                limit: self.config.max_tables,
            })?;
        let reserved = self
            .tables
            .try_reserve(1)
            .map_err(|e| McdcError::AllocationFailure {
                name: name.clone(),
                rows,
                cols,
                reason: e.to_string(),
            })
            .and_then(|()| CoverageTable::try_new(id, rows, cols, name));

        match reserved {
            Ok(table) => {
                debug!(table = %id, rows, cols, name = table.name(), "allocated MC/DC table");
                self.tables.push(table);
                Ok(id)
            }
            Err(err) => {
                error!(error = %err, "MC/DC table allocation");
                Err(err)
            }
        }
    }

    /// Allocate a table and return a builder for its rows
    pub fn build_table(
        &mut self,
        rows: usize,
        cols: usize,
        name: impl Into<String>,
    ) -> McdcResult<TableBuilder<'_>> {
        let id = self.allocate_table(rows, cols, name)?;
        Ok(TableBuilder { ctx: self, id })
    }

    /// Register the next expected row of the most recently allocated table.
    ///
    /// Returns the row index the conditions were stored at.
    pub fn register_row(&mut self, conditions: &[bool]) -> McdcResult<usize> {
        let table = self
            .tables
            .last_mut()
            .ok_or(McdcError::NoTableAllocated)?;
        Self::register_into(table, conditions)
    }

    fn register_into(table: &mut CoverageTable, conditions: &[bool]) -> McdcResult<usize> {
        let index = table.push_row(conditions)?;
        trace!(
            table = %table.id(),
            row = index,
            conditions = %format_conditions(conditions),
            "registered expected row"
        );
        if table.is_complete() {
            debug!(table = %table.id(), rows = table.rows(), "MC/DC table complete");
        }
        Ok(index)
    }

    /// Offer a runtime observation to a table.
    ///
    /// The first registered row equal to `observed` is marked observed. An
    /// observation that matches nothing is discarded and reported as
    /// [`CheckOutcome::NoMatch`].
    pub fn check_row(&mut self, table: TableId, observed: &[bool]) -> McdcResult<CheckOutcome> {
        let len = self.tables.len();
        let log_unmatched = self.config.log_unmatched;
        let target = self
            .tables
            .get_mut(table.index())
            .ok_or(McdcError::TableOutOfRange {
                index: table.index(),
                len,
            })?;
        target.ensure_width(observed)?;

        match find_first_match(target, observed) {
            Some(row) => {
                target.record_hit(row);
                trace!(table = %table, row, "observation matched expected row");
                Ok(CheckOutcome::Matched { row })
            }
            None => {
                if log_unmatched {
                    debug!(
                        table = %table,
                        conditions = %format_conditions(observed),
                        "observation matched no expected row"
                    );
                }
                Ok(CheckOutcome::NoMatch)
            }
        }
    }

    /// Snapshot the coverage of every table, in allocation order.
    ///
    /// Read-only: calling it repeatedly without new observations yields the
    /// same report.
    #[must_use]
    pub fn evaluate(&self) -> McdcReport {
        let report = McdcReport::from_tables(&self.tables);
        let summary = report.summary();
        info!(
            tables = summary.total_tables,
            passed = summary.passed_tables,
            failed = summary.failed_tables,
            incomplete = summary.incomplete_tables,
            coverage = summary.coverage_percent,
            "MC/DC evaluation"
        );
        report
    }

    /// Look up a table
    #[must_use]
    pub fn table(&self, id: TableId) -> Option<&CoverageTable> {
        self.tables.get(id.index())
    }

    /// All tables in allocation order
    #[must_use]
    pub fn tables(&self) -> &[CoverageTable] {
        &self.tables
    }

    /// Number of tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table has been allocated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The table still accepting rows, if the last one is not yet complete
    #[must_use]
    pub fn table_under_construction(&self) -> Option<TableId> {
        self.tables
            .last()
            .filter(|t| !t.is_complete())
            .map(CoverageTable::id)
    }

    /// Drop every table
    pub fn reset(&mut self) {
        debug!(tables = self.tables.len(), "resetting MC/DC context");
        self.tables.clear();
    }

    /// Keep the table designs but forget every observation
    pub fn clear_observations(&mut self) {
        for table in &mut self.tables {
            table.clear_hits();
        }
    }

    /// Add the observations of `other` into this context.
    ///
    /// Both contexts must hold the same table designs (same names, shapes and
    /// registered rows, in the same order). Nothing is merged unless every
    /// table lines up.
    pub fn merge_observations(&mut self, other: &Self) -> McdcResult<()> {
        if self.tables.len() != other.tables.len() {
            return Err(McdcError::shape_mismatch(format!(
                "{} tables vs {}",
                self.tables.len(),
                other.tables.len()
            )));
        }
        if let Some(mismatch) = self
            .tables
            .iter()
            .zip(&other.tables)
            .find(|(mine, theirs)| !mine.same_design(theirs))
        {
            return Err(McdcError::shape_mismatch(format!(
                "table {} ('{}') differs",
                mismatch.0.id(),
                mismatch.0.name()
            )));
        }

        for (mine, theirs) in self.tables.iter_mut().zip(&other.tables) {
            mine.add_hits(theirs);
        }
        debug!(tables = self.tables.len(), "merged MC/DC observations");
        Ok(())
    }
}

/// Row registration handle for a freshly allocated table
///
/// Holds the context exclusively, so no other table can be allocated or
/// registered into until the builder is finished or dropped.
#[derive(Debug)]
pub struct TableBuilder<'a> {
    ctx: &'a mut CoverageContext,
    id: TableId,
}

impl TableBuilder<'_> {
    /// ID of the table being built
    #[must_use]
    pub const fn id(&self) -> TableId {
        self.id
    }

    /// Rows registered so far
    #[must_use]
    pub fn registered_rows(&self) -> usize {
        self.ctx
            .table(self.id)
            .map_or(0, CoverageTable::registered_rows)
    }

    /// Register the next expected row
    pub fn register_row(&mut self, conditions: &[bool]) -> McdcResult<&mut Self> {
        let len = self.ctx.tables.len();
        let table = self
            .ctx
            .tables
            .get_mut(self.id.index())
            .ok_or(McdcError::TableOutOfRange {
                index: self.id.index(),
                len,
            })?;
        CoverageContext::register_into(table, conditions)?;
        Ok(self)
    }

    /// Finish the table; fails unless every declared row was registered.
    ///
    /// An incomplete table stays in the context and evaluates as
    /// incomplete.
    pub fn finish(self) -> McdcResult<TableId> {
        match self.ctx.table(self.id) {
            Some(t) if t.is_complete() => Ok(self.id),
            Some(t) => Err(McdcError::IncompleteTable {
                table: self.id,
                registered: t.registered_rows(),
                rows: t.rows(),
            }),
            None => Err(McdcError::TableOutOfRange {
                index: self.id.index(),
                len: self.ctx.len(),
            }),
        }
    }
}
