//! JSON MC/DC Report

use crate::report::McdcReport;
use crate::result::McdcResult;
use std::path::Path;

/// JSON report generator
#[derive(Debug)]
pub struct JsonFormatter<'a> {
    report: &'a McdcReport,
    pretty: bool,
}

impl<'a> JsonFormatter<'a> {
    /// Create a formatter producing pretty-printed JSON
    #[must_use]
    pub const fn new(report: &'a McdcReport) -> Self {
        Self {
            report,
            pretty: true,
        }
    }

    /// Emit compact single-line JSON instead
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Serialize the report
    pub fn generate(&self) -> McdcResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(self.report)?
        } else {
            serde_json::to_string(self.report)?
        };
        Ok(json)
    }

    /// Write the report to a file
    pub fn save(&self, path: &Path) -> McdcResult<()> {
        std::fs::write(path, self.generate()?)?;
        Ok(())
    }
}
