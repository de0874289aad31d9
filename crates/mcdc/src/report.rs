//! Coverage Report
//!
//! Structured result of evaluating a context: one [`TableCoverage`] per
//! decision plus a [`McdcSummary`] across all of them. Renderers live in
//! [`formatters`](crate::formatters).

use crate::table::{CoverageStatus, CoverageTable};
use crate::TableId;
use serde::{Deserialize, Serialize};

/// Observation state of one expected row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCoverage {
    /// Zero-based row index
    pub index: usize,
    /// Expected condition values for this row
    pub conditions: Vec<bool>,
    /// Whether at least one observation matched this row
    pub checked: bool,
    /// Number of matching observations
    pub hits: u64,
}

/// Coverage of a single decision table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCoverage {
    /// Table identifier
    pub id: TableId,
    /// Decision label
    pub name: String,
    /// Declared row count
    pub rows: usize,
    /// Conditions per row
    pub cols: usize,
    /// Rows actually registered
    pub registered_rows: usize,
    /// Rows observed at least once
    pub checks_passed: usize,
    /// Verdict for this table
    pub status: CoverageStatus,
    /// Every declared row, registered or not
    pub entries: Vec<RowCoverage>,
}

impl TableCoverage {
    /// Snapshot a table
    #[must_use]
    pub fn from_table(table: &CoverageTable) -> Self {
        let entries = table
            .expected()
            .iter_rows()
            .enumerate()
            .map(|(index, conditions)| RowCoverage {
                index,
                conditions: conditions.to_vec(),
                checked: table.is_observed(index),
                hits: table.hits(index),
            })
            .collect();

        Self {
            id: table.id(),
            name: table.name().to_string(),
            rows: table.rows(),
            cols: table.cols(),
            registered_rows: table.registered_rows(),
            checks_passed: table.checks_passed(),
            status: table.status(),
            entries,
        }
    }

    /// Whether this table is fully covered
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == CoverageStatus::Pass
    }

    /// Rows that were never observed
    #[must_use]
    pub fn unchecked_rows(&self) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|e| !e.checked)
            .map(|e| e.index)
            .collect()
    }
}

/// Aggregate statistics across all tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McdcSummary {
    /// Number of tables evaluated
    pub total_tables: usize,
    /// Tables with every row observed
    pub passed_tables: usize,
    /// Complete tables with at least one unobserved row
    pub failed_tables: usize,
    /// Tables whose rows were not all registered
    pub incomplete_tables: usize,
    /// Declared rows across all tables
    pub total_rows: usize,
    /// Observed rows across all tables
    pub checked_rows: usize,
    /// `checked_rows / total_rows` as a percentage
    pub coverage_percent: f64,
}

/// Result of evaluating a [`CoverageContext`](crate::CoverageContext)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McdcReport {
    tables: Vec<TableCoverage>,
    summary: McdcSummary,
}

impl McdcReport {
    /// Build a report from tables in allocation order
    #[must_use]
    pub fn from_tables(tables: &[CoverageTable]) -> Self {
        let tables: Vec<TableCoverage> = tables.iter().map(TableCoverage::from_table).collect();
        let summary = Self::summarize(&tables);
        Self { tables, summary }
    }

    fn summarize(tables: &[TableCoverage]) -> McdcSummary {
        let count = |status| tables.iter().filter(|t| t.status == status).count();
        let total_rows: usize = tables.iter().map(|t| t.rows).sum();
        let checked_rows: usize = tables.iter().map(|t| t.checks_passed).sum();

        let coverage_percent = if total_rows == 0 {
            100.0 // Vacuously true
        } else {
            (checked_rows as f64 / total_rows as f64) * 100.0
        };

        McdcSummary {
            total_tables: tables.len(),
            passed_tables: count(CoverageStatus::Pass),
            failed_tables: count(CoverageStatus::Fail),
            incomplete_tables: count(CoverageStatus::Incomplete),
            total_rows,
            checked_rows,
            coverage_percent,
        }
    }

    /// Per-table results
    #[must_use]
    pub fn tables(&self) -> &[TableCoverage] {
        &self.tables
    }

    /// Result for one table
    #[must_use]
    pub fn table(&self, id: TableId) -> Option<&TableCoverage> {
        self.tables.get(id.index())
    }

    /// Aggregate statistics
    #[must_use]
    pub const fn summary(&self) -> &McdcSummary {
        &self.summary
    }

    /// Whether every table passed (vacuously true with no tables)
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.tables.iter().all(TableCoverage::passed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CoverageContext;

    fn sample() -> CoverageContext {
        let mut ctx = CoverageContext::new();
        let t0 = ctx.allocate_table(2, 1, "i == n").unwrap();
        ctx.register_row(&[false]).unwrap();
        ctx.register_row(&[true]).unwrap();
        ctx.check_row(t0, &[false]).unwrap();
        ctx.check_row(t0, &[true]).unwrap();

        let t1 = ctx.allocate_table(2, 2, "a && b").unwrap();
        ctx.register_row(&[true, true]).unwrap();
        ctx.register_row(&[true, false]).unwrap();
        ctx.check_row(t1, &[true, true]).unwrap();
        ctx.check_row(t1, &[true, true]).unwrap();

        ctx.allocate_table(2, 1, "unfinished").unwrap();
        ctx.register_row(&[true]).unwrap();
        ctx
    }

    #[test]
    fn test_table_statuses() {
        let report = sample().evaluate();
        let statuses: Vec<_> = report.tables().iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            vec![
                CoverageStatus::Pass,
                CoverageStatus::Fail,
                CoverageStatus::Incomplete
            ]
        );
        assert!(!report.all_passed());
    }

    #[test]
    fn test_entries_carry_hits_and_conditions() {
        let report = sample().evaluate();
        let t1 = report.table(TableId::new(1)).unwrap();
        assert_eq!(t1.checks_passed, 1);
        assert_eq!(t1.entries[0].conditions, vec![true, true]);
        assert_eq!(t1.entries[0].hits, 2);
        assert!(t1.entries[0].checked);
        assert_eq!(t1.unchecked_rows(), vec![1]);
    }

    #[test]
    fn test_incomplete_table_lists_all_declared_rows() {
        let report = sample().evaluate();
        let t2 = report.table(TableId::new(2)).unwrap();
        assert_eq!(t2.entries.len(), 2);
        assert_eq!(t2.registered_rows, 1);
        assert_eq!(t2.entries[1].conditions, vec![false]);
    }

    #[test]
    fn test_summary() {
        let report = sample().evaluate();
        let s = report.summary();
        assert_eq!(s.total_tables, 3);
        assert_eq!(s.passed_tables, 1);
        assert_eq!(s.failed_tables, 1);
        assert_eq!(s.incomplete_tables, 1);
        assert_eq!(s.total_rows, 6);
        assert_eq!(s.checked_rows, 3);
        assert!((s.coverage_percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report_is_vacuously_covered() {
        let report = CoverageContext::new().evaluate();
        assert!(report.all_passed());
        assert!((report.summary().coverage_percent - 100.0).abs() < f64::EPSILON);
    }
}
