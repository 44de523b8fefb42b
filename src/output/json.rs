//! JSON output formatter for machine processing

use crate::domain::{Repository, Version};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbose mode includes skipped tags
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    repositories: Vec<JsonRepository<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonRepository<'a> {
    repository: &'a Repository,
    floor: &'a Version,
    /// Newest first
    latest: &'a [Version],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped_tags: Vec<JsonSkippedTag<'a>>,
}

#[derive(Serialize)]
struct JsonSkippedTag<'a> {
    tag: &'a str,
    reason: &'a str,
}

#[derive(Serialize)]
struct JsonError<'a> {
    repository: &'a Repository,
    line: usize,
    message: String,
}

impl JsonFormatter {
    fn build<'a>(&self, result: &'a OrchestratorResult) -> JsonOutput<'a> {
        let verbose = self.verbosity == Verbosity::Verbose;

        let repositories = result
            .reports()
            .map(|report| JsonRepository {
                repository: &report.repository,
                floor: &report.floor,
                latest: &report.latest,
                skipped_tags: if verbose {
                    report
                        .skipped_tags
                        .iter()
                        .map(|s| JsonSkippedTag {
                            tag: &s.tag,
                            reason: &s.reason,
                        })
                        .collect()
                } else {
                    Vec::new()
                },
            })
            .collect();

        let errors = result
            .failures()
            .map(|failure| JsonError {
                repository: &failure.repository,
                line: failure.line,
                message: failure.error.to_string(),
            })
            .collect();

        JsonOutput {
            repositories,
            errors,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = self.build(result);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }

    fn format_diagnostics(
        &self,
        _result: &OrchestratorResult,
        _writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        // Failures are part of the JSON document
        Ok(())
    }
}
