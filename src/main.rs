//! release-lines - latest stable release per minor version line
//!
//! Reads a list of `owner/repo,min_version` rows, lists each repository's
//! GitHub releases and prints the newest patch of every minor line at or
//! above the minimum version.

use anyhow::{bail, Context};
use clap::Parser;
use release_lines::cli::CliArgs;
use release_lines::input::read_input;
use release_lines::logging;
use release_lines::orchestrator::Orchestrator;
use release_lines::output::{create_formatter, OutputConfig};
use release_lines::provider::{GitHubReleases, HttpClient};
use std::io::{self, Write};
use std::process::ExitCode;

/// Exit status when at least one repository was skipped
const EXIT_PARTIAL: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit 1; help and version exit 0
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let output_config = args.output_config();
    logging::init(output_config.verbosity);

    // Run the main logic and handle errors
    match run(args, output_config).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs, output_config: OutputConfig) -> anyhow::Result<ExitCode> {
    let Some(input) = args.input.as_deref() else {
        bail!("no input file given (usage: release-lines <INPUT>)");
    };
    args.validate()?;

    let rows = read_input(input)?;
    tracing::debug!(rows = rows.len(), input = %input.display(), "read input");

    let client = HttpClient::with_token(args.token.as_deref())
        .context("failed to set up the GitHub client")?;
    let provider =
        GitHubReleases::with_base_url(client, &args.api_url).with_per_page(args.per_page);

    let orchestrator = Orchestrator::new(Box::new(provider), args.settings());
    let result = orchestrator.run(&rows).await;

    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    let mut stderr = io::stderr().lock();
    formatter.format_diagnostics(&result, &mut stderr)?;

    if result.has_failures() {
        // Partial success - some repositories were skipped
        Ok(ExitCode::from(EXIT_PARTIAL))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
