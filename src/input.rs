//! Repository list input
//!
//! The input file holds one `owner/repo,min_version` pair per line:
//!
//! ```text
//! repository,min_version
//! kubernetes/kubernetes,1.8.0
//! prometheus/prometheus,2.2.0
//! ```
//!
//! An optional header line, blank lines and `#` comments are skipped.

use crate::domain::{Repository, Version};
use crate::error::InputError;
use std::path::Path;
use tracing::debug;

/// One requested repository and the minimum version to report from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based line number in the input file
    pub line: usize,
    /// Repository to query
    pub repository: Repository,
    /// Minimum version as written; parsed per row so a bad value fails only its row
    pub min_version: String,
}

/// Read and parse the input file at `path`
pub fn read_input(path: &Path) -> Result<Vec<InputRow>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InputError::not_found(path)
        } else {
            InputError::read_error(path, e)
        }
    })?;
    parse_input(&content)
}

/// Parse the contents of an input file
pub fn parse_input(content: &str) -> Result<Vec<InputRow>, InputError> {
    let mut rows = Vec::new();
    let mut seen_content = false;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let first_line = !seen_content;
        seen_content = true;

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();

        if first_line && is_header(&fields) {
            debug!(line, header = trimmed, "skipping header line");
            continue;
        }

        rows.push(parse_row(line, trimmed, &fields)?);
    }

    Ok(rows)
}

/// A header names its columns: neither a repository nor a version
fn is_header(fields: &[&str]) -> bool {
    !Repository::is_valid(fields[0])
        && fields
            .get(1)
            .map_or(true, |field| Version::parse(field).is_err())
}

fn parse_row(line: usize, content: &str, fields: &[&str]) -> Result<InputRow, InputError> {
    let [repository, min_version] = fields else {
        return Err(InputError::malformed_line(
            line,
            content,
            format!(
                "expected 2 comma-separated fields (owner/repo,min_version), found {}",
                fields.len()
            ),
        ));
    };

    let repository: Repository = repository
        .parse()
        .map_err(|message: String| InputError::malformed_line(line, content, message))?;

    if min_version.is_empty() {
        return Err(InputError::malformed_line(line, content, "missing minimum version"));
    }

    Ok(InputRow {
        line,
        repository,
        min_version: min_version.to_string(),
    })
}
