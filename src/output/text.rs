//! Text output formatter
//!
//! Prints one line per repository:
//!
//! ```text
//! latest versions of kubernetes/kubernetes: [1.29.0 1.28.4 1.27.8]
//! ```
//!
//! Failed repositories and (in verbose mode) skipped tags are reported as
//! warnings on the diagnostics stream.

use crate::domain::Version;
use crate::orchestrator::{OrchestratorResult, RepositoryReport};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    verbosity: Verbosity,
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_color(verbosity, true)
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn warning_prefix(&self) -> String {
        if self.color {
            "warning:".yellow().bold().to_string()
        } else {
            "warning:".to_string()
        }
    }

    fn format_report(
        &self,
        report: &RepositoryReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "latest versions of {}: {}",
            report.repository,
            format_versions(&report.latest)
        )
    }
}

/// Render versions newest first as `[a b c]`
pub fn format_versions(versions: &[Version]) -> String {
    let joined = versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", joined)
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in result.reports() {
            self.format_report(report, writer)?;
        }
        Ok(())
    }

    fn format_diagnostics(
        &self,
        result: &OrchestratorResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let prefix = self.warning_prefix();

        for failure in result.failures() {
            writeln!(
                writer,
                "{} skipping {} (line {}): {}",
                prefix, failure.repository, failure.line, failure.error
            )?;
        }

        if self.verbosity == Verbosity::Verbose {
            for report in result.reports() {
                for skipped in &report.skipped_tags {
                    writeln!(
                        writer,
                        "{} {}: ignored tag '{}': {}",
                        prefix, report.repository, skipped.tag, skipped.reason
                    )?;
                }
            }
        }

        Ok(())
    }
}
