//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// MC/DC engine error
    #[error("MC/DC error: {0}")]
    Mcdc(#[from] mcdc::McdcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report generation error
    #[error("Report generation failed: {message}")]
    ReportGeneration {
        /// Error message
        message: String,
    },

    /// Coverage below requirement in strict mode
    #[error("MC/DC coverage incomplete: {failed} of {total} decision tables did not pass")]
    CoverageFailed {
        /// Tables that did not pass
        failed: usize,
        /// Tables evaluated
        total: usize,
    },
}

impl CliError {
    /// Create a report generation error
    #[must_use]
    pub fn report_generation(message: impl Into<String>) -> Self {
        Self::ReportGeneration {
            message: message.into(),
        }
    }
}
