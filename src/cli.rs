//! CLI argument parsing module for release-lines

use crate::error::ConfigError;
use crate::orchestrator::{Settings, DEFAULT_CONCURRENCY};
use crate::output::OutputConfig;
use crate::provider::{DEFAULT_PER_PAGE, GITHUB_API_URL, MAX_PER_PAGE};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Latest stable release of every minor version line
#[derive(Parser, Debug, Clone)]
#[command(
    name = "release-lines",
    version,
    about = "List the latest stable release of each minor version line of GitHub repositories"
)]
pub struct CliArgs {
    /// Input file with one `owner/repo,min_version` per line
    pub input: Option<PathBuf>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (debug logs, skipped tags)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    // Provider options
    /// Number of releases fetched per repository (1-100)
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u8,

    /// Number of repositories queried in parallel
    #[arg(short = 'j', long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    pub api_url: String,

    /// GitHub token used to raise the API rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl CliArgs {
    /// Check option values clap cannot validate on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(ConfigError::invalid_option(
                "--per-page",
                self.per_page,
                format!("must be between 1 and {}", MAX_PER_PAGE),
            ));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::invalid_option(
                "--concurrency",
                self.concurrency,
                "must be at least 1",
            ));
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::invalid_option(
                "--api-url",
                &self.api_url,
                "must be an http(s) URL",
            ));
        }
        Ok(())
    }

    /// Orchestrator settings
    pub fn settings(&self) -> Settings {
        Settings {
            concurrency: self.concurrency,
            show_progress: !self.quiet && !self.json && std::io::stderr().is_terminal(),
        }
    }

    /// Output formatter configuration
    ///
    /// Colored text only goes to the diagnostics stream, so color follows stderr.
    pub fn output_config(&self) -> OutputConfig {
        let color = !self.no_color && std::io::stderr().is_terminal();
        OutputConfig::from_cli(self.json, self.verbose, self.quiet, !color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{OutputFormat, Verbosity};

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["release-lines", "repos.txt"]);
        assert_eq!(args.input, Some(PathBuf::from("repos.txt")));
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.no_color);
        assert_eq!(args.per_page, 10);
        assert_eq!(args.concurrency, DEFAULT_CONCURRENCY);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_input_is_optional_for_clap() {
        let args = CliArgs::parse_from(["release-lines"]);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_verbose_flags() {
        let args = CliArgs::parse_from(["release-lines", "-v", "in.txt"]);
        assert!(args.verbose);
        let args = CliArgs::parse_from(["release-lines", "--verbose", "in.txt"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["release-lines", "-q", "in.txt"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = CliArgs::try_parse_from(["release-lines", "-q", "-v", "in.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_per_page() {
        let args = CliArgs::parse_from(["release-lines", "--per-page", "100", "in.txt"]);
        assert_eq!(args.per_page, 100);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_per_page_out_of_range() {
        let args = CliArgs::parse_from(["release-lines", "--per-page", "0", "in.txt"]);
        assert!(args.validate().is_err());
        let args = CliArgs::parse_from(["release-lines", "--per-page", "101", "in.txt"]);
        assert!(args.validate().is_err());
        // Beyond u8 is rejected by clap itself
        assert!(CliArgs::try_parse_from(["release-lines", "--per-page", "1000", "in.txt"]).is_err());
    }

    #[test]
    fn test_concurrency() {
        let args = CliArgs::parse_from(["release-lines", "-j", "8", "in.txt"]);
        assert_eq!(args.concurrency, 8);
        assert_eq!(args.settings().concurrency, 8);

        let args = CliArgs::parse_from(["release-lines", "-j", "0", "in.txt"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_api_url_and_token() {
        let args = CliArgs::parse_from([
            "release-lines",
            "--api-url",
            "https://ghe.example.com/api/v3",
            "--token",
            "ghp_example",
            "in.txt",
        ]);
        assert_eq!(args.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(args.token.as_deref(), Some("ghp_example"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_api_url_must_be_http() {
        let args = CliArgs::parse_from(["release-lines", "--api-url", "ftp://example", "in.txt"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_json_disables_progress() {
        let args = CliArgs::parse_from(["release-lines", "--json", "in.txt"]);
        assert!(!args.settings().show_progress);
        assert_eq!(args.output_config().format, OutputFormat::Json);
    }

    #[test]
    fn test_quiet_output_config() {
        let args = CliArgs::parse_from(["release-lines", "--quiet", "--no-color", "in.txt"]);
        let config = args.output_config();
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert!(!config.color);
        assert!(!args.settings().show_progress);
    }
}
