//! Tables command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::sample::register_sample_tables;
use mcdc::{format_conditions, CoverageContext, CoverageTable};

/// Execute the tables command
pub fn execute_tables(config: &CliConfig) -> CliResult<()> {
    let mut ctx = CoverageContext::new();
    register_sample_tables(&mut ctx)?;

    for table in ctx.tables() {
        println!("{}", describe_table(table));
        if config.verbosity.is_verbose() {
            for (index, row) in table.expected().iter_rows().enumerate() {
                println!("    row {}: {}", index + 1, format_conditions(row));
            }
        }
    }
    Ok(())
}

/// One-line description: id, shape, name
#[must_use]
pub fn describe_table(table: &CoverageTable) -> String {
    format!(
        "{} {}x{} {}",
        table.id(),
        table.rows(),
        table.cols(),
        table.name()
    )
}
