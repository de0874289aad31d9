//! Strncmp sample command handler

use crate::commands::{ReportFormat, StrncmpArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::SummaryPrinter;
use crate::sample::{run_sample, CaseResult};
use mcdc::{CoverageContext, JsonFormatter, McdcReport, TextFormatter};
use std::io::Write;
use tracing::{debug, info};

/// Execute the strncmp command
///
/// The report format comes from `config`, which `main` builds from `args`.
pub fn execute_strncmp(config: &CliConfig, args: &StrncmpArgs) -> CliResult<()> {
    let format = config.format;
    let mut printer = SummaryPrinter::new(config.color.should_color(), config.verbosity.is_quiet());
    if format == ReportFormat::Json && args.output.is_none() {
        printer = printer.on_stderr();
    }

    let mut ctx = CoverageContext::new();
    let results = run_sample(&mut ctx)?;
    report_cases(&printer, &results);

    let report = ctx.evaluate();
    let rendered = render_report(&report, format)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &rendered)
            .map_err(|e| CliError::report_generation(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), "report written");
        printer.line(&format!("Report written to: {}", path.display()));
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
    }

    printer.summary(report.summary());

    let summary = report.summary();
    debug!(
        passed = summary.passed_tables,
        total = summary.total_tables,
        strict = args.strict,
        "strncmp sample finished"
    );
    if args.strict && !report.all_passed() {
        return Err(CliError::CoverageFailed {
            failed: summary.total_tables - summary.passed_tables,
            total: summary.total_tables,
        });
    }
    Ok(())
}

/// Print one line per failing case, or the all-passed banner
pub fn report_cases(printer: &SummaryPrinter, results: &[CaseResult]) {
    let mut all_passed = true;
    for result in results.iter().filter(|r| !r.passed()) {
        all_passed = false;
        printer.failure(&result.to_string());
    }
    if all_passed {
        printer.line("All test passed");
    }
}

/// Render the report in the requested format
pub fn render_report(report: &McdcReport, format: ReportFormat) -> CliResult<String> {
    match format {
        ReportFormat::Text => Ok(TextFormatter::new(report).generate()),
        ReportFormat::Json => JsonFormatter::new(report)
            .generate()
            .map_err(|e| CliError::report_generation(e.to_string())),
    }
}
