//! mcdc CLI: MC/DC coverage for instrumented samples
//!
//! ## Usage
//!
//! ```bash
//! mcdc strncmp                        # Run the sample, print text tables
//! mcdc strncmp --format json -o r.json
//! mcdc strncmp --strict               # Fail unless every table passes
//! mcdc tables -v                      # List the sample's decision tables
//! ```

use clap::Parser;
use mcdc_cli::{
    handlers::{execute_strncmp, execute_tables},
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    logging::init(config.verbosity);

    match cli.command {
        Commands::Strncmp(ref args) => execute_strncmp(&config, args),
        Commands::Tables => execute_tables(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    let config = CliConfig::new().with_verbosity(verbosity).with_color(color);
    match cli.command {
        Commands::Strncmp(ref args) => config.with_format(args.format),
        Commands::Tables => config,
    }
}
