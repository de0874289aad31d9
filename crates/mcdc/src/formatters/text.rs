//! Plain-Text MC/DC Report
//!
//! ```text
//! ====================================================
//!  MC/DC 2 x 2                                    PASS
//! - - - - - - - - - - - - - - - - - - - - - - - - - -
//!  i == n
//! ====================================================
//!  Test No. 1 | F | Checked
//!  Test No. 2 | T | Checked
//! ```
//!
//! The layout is consumed by existing tooling and must stay byte-for-byte
//! stable.

use crate::report::{McdcReport, TableCoverage};
use crate::result::McdcResult;
use std::fmt::Write;
use std::path::Path;

const BANNER: &str = "====================================================";
const SEPARATOR: &str = "- - - - - - - - - - - - - - - - - - - - - - - - - -";

/// Text report generator
#[derive(Debug)]
pub struct TextFormatter<'a> {
    report: &'a McdcReport,
}

impl<'a> TextFormatter<'a> {
    /// Create a new text formatter
    #[must_use]
    pub const fn new(report: &'a McdcReport) -> Self {
        Self { report }
    }

    /// Render every table in allocation order
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        for table in self.report.tables() {
            Self::write_table(&mut output, table);
        }
        output
    }

    /// Write the report to a file
    ///
    /// # Errors
    ///
    /// Returns error if file write fails
    pub fn save(&self, path: &Path) -> McdcResult<()> {
        std::fs::write(path, self.generate())?;
        Ok(())
    }

    /// Render a single table
    #[must_use]
    pub fn render_table(table: &TableCoverage) -> String {
        let mut output = String::new();
        Self::write_table(&mut output, table);
        output
    }

    fn write_table(output: &mut String, table: &TableCoverage) {
        let _ = writeln!(output, "{BANNER}");
        let _ = writeln!(
            output,
            " MC/DC {} x {} {:>39}",
            table.checks_passed,
            table.rows,
            table.status.label()
        );
        let _ = writeln!(output, "{SEPARATOR}");
        let _ = writeln!(output, " {}", table.name);
        let _ = writeln!(output, "{BANNER}");

        for entry in &table.entries {
            let _ = write!(output, " Test No. {} | ", entry.index + 1);
            for &condition in &entry.conditions {
                output.push_str(if condition { "T " } else { "F " });
            }
            let _ = writeln!(
                output,
                "| {}",
                if entry.checked { "Checked" } else { "Unchecked" }
            );
        }
    }
}
