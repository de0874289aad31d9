//! Terminal output helpers

use console::{style, Term};
use mcdc::McdcSummary;

/// Writes status lines around the MC/DC report
///
/// The summary line always goes to stderr so stdout carries nothing but the
/// status lines and the report.
#[derive(Debug)]
pub struct SummaryPrinter {
    term: Term,
    summary_term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl SummaryPrinter {
    /// Create a printer writing status lines to stdout
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            summary_term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Send status lines to stderr, leaving stdout to the report
    #[must_use]
    pub fn on_stderr(mut self) -> Self {
        self.term = Term::stderr();
        self
    }

    /// Print a plain line unless quiet
    pub fn line(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(message);
    }

    /// Print a failure line, even in quiet mode
    pub fn failure(&self, message: &str) {
        let _ = self.term.write_line(message);
    }

    /// Print the one-line table summary on stderr
    pub fn summary(&self, summary: &McdcSummary) {
        if self.quiet && summary.failed_tables == 0 && summary.incomplete_tables == 0 {
            return;
        }
        let _ = self
            .summary_term
            .write_line(&format_summary(summary, self.use_color));
    }
}

/// Render the table summary, coloured when requested
#[must_use]
pub fn format_summary(summary: &McdcSummary, use_color: bool) -> String {
    let failed = summary.failed_tables + summary.incomplete_tables;
    let label = if failed == 0 { "PASS" } else { "FAIL" };
    let label = if !use_color {
        label.to_string()
    } else if failed == 0 {
        style(label).green().bold().to_string()
    } else {
        style(label).red().bold().to_string()
    };

    format!(
        "{label} {}/{} decision tables, {}/{} rows checked ({:.1}%)",
        summary.passed_tables,
        summary.total_tables,
        summary.checked_rows,
        summary.total_rows,
        summary.coverage_percent
    )
}
