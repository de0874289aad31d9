//! MC/DC: Modified Condition/Decision Coverage tracking for unit tests
//!
//! A test harness declares, for every multi-condition decision in the code
//! under test, the condition rows that must be exercised to show each
//! condition's independent effect. Instrumented code then reports the live
//! condition values it evaluates, and the context records which required
//! rows were actually seen.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  MC/DC TRACKING                                                  │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  Test driver ──allocate/register──► CoverageContext              │
//! │                                        │  CoverageTable × N      │
//! │  Code under test ──check_row─────► Row Matcher (first match)     │
//! │                                        ↓                         │
//! │                         evaluate() → McdcReport → Formatters     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use mcdc::{CoverageContext, TextFormatter};
//!
//! let mut ctx = CoverageContext::new();
//! let mut table = ctx.build_table(2, 1, "i == n")?;
//! table.register_row(&[false])?.register_row(&[true])?;
//! let id = table.finish()?;
//!
//! ctx.check_row(id, &[false])?;
//! ctx.check_row(id, &[true])?;
//!
//! let report = ctx.evaluate();
//! assert!(report.all_passed());
//! print!("{}", TextFormatter::new(&report).generate());
//! # Ok::<(), mcdc::McdcError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod context;
pub mod formatters;
pub mod global;
mod ids;
mod matcher;
mod matrix;
mod report;
mod result;
mod table;

pub use config::{
    McdcConfig, McdcConfigBuilder, DEFAULT_MAX_CELLS_PER_TABLE, DEFAULT_MAX_TABLES,
    MAX_TABLES_LIMIT,
};
pub use context::{CoverageContext, TableBuilder};
pub use formatters::{JsonFormatter, TextFormatter};
pub use global::{configure_global, evaluate_global, reset_global, with_global};
pub use ids::TableId;
pub use matcher::{find_first_match, format_conditions, CheckOutcome};
pub use matrix::ConditionMatrix;
pub use report::{McdcReport, McdcSummary, RowCoverage, TableCoverage};
pub use result::{McdcError, McdcResult};
pub use table::{CoverageStatus, CoverageTable};

#[cfg(test)]
mod tests;
