//! MC/DC CLI Library
//!
//! Command-line front end for the `mcdc` coverage engine. It drives the
//! instrumented `strncmp` sample and renders its decision tables.

#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;
pub mod sample;

pub use commands::{Cli, ColorArg, Commands, ReportFormat, StrncmpArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{format_summary, SummaryPrinter};
