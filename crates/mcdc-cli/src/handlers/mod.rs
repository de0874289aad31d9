//! Command handlers - kept out of main.rs for testability

pub mod strncmp;
pub mod tables;

pub use strncmp::{execute_strncmp, render_report, report_cases};
pub use tables::{describe_table, execute_tables};
