//! Orchestrator for the release listing workflow
//!
//! This module provides:
//! - Workflow coordination: parse floor → list releases → parse tags → select
//! - Concurrent provider queries bounded by a semaphore
//! - Error handling with partial continuation (one failing repository never
//!   stops the others)

use crate::domain::{Repository, Version};
use crate::error::{ProviderError, VersionError};
use crate::input::InputRow;
use crate::progress::Progress;
use crate::provider::ReleaseProvider;
use crate::select::select_latest_per_line;
use futures::future::join_all;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Default number of repositories queried at once
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Orchestrator settings derived from the CLI
#[derive(Debug, Clone)]
pub struct Settings {
    /// Maximum number of in-flight provider requests
    pub concurrency: usize,
    /// Whether to draw a progress bar
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            show_progress: false,
        }
    }
}

/// A release whose tag is not a semantic version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTag {
    pub tag: String,
    pub reason: String,
}

/// Selection result for one repository
#[derive(Debug, Clone)]
pub struct RepositoryReport {
    /// Input line the repository came from
    pub line: usize,
    pub repository: Repository,
    /// Minimum version requested for this repository
    pub floor: Version,
    /// Latest stable version per release line, newest first
    pub latest: Vec<Version>,
    /// Tags that could not be parsed and were left out
    pub skipped_tags: Vec<SkippedTag>,
}

/// Why a repository produced no report
#[derive(Error, Debug)]
pub enum RowError {
    /// The minimum version in the input is not a semantic version
    #[error("invalid minimum version: {0}")]
    InvalidFloor(#[source] VersionError),

    /// The provider could not list releases
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// A repository that could not be processed
#[derive(Debug)]
pub struct RepositoryFailure {
    pub line: usize,
    pub repository: Repository,
    pub error: RowError,
}

/// Outcome of one input row
#[derive(Debug)]
pub enum RepositoryOutcome {
    Selected(RepositoryReport),
    Failed(RepositoryFailure),
}

impl RepositoryOutcome {
    /// Repository this outcome belongs to
    pub fn repository(&self) -> &Repository {
        match self {
            RepositoryOutcome::Selected(report) => &report.repository,
            RepositoryOutcome::Failed(failure) => &failure.repository,
        }
    }
}

/// Result of running the orchestrator, one outcome per input row in input order
#[derive(Debug, Default)]
pub struct OrchestratorResult {
    pub outcomes: Vec<RepositoryOutcome>,
}

impl OrchestratorResult {
    /// Successful selections
    pub fn reports(&self) -> impl Iterator<Item = &RepositoryReport> {
        self.outcomes.iter().filter_map(|o| match o {
            RepositoryOutcome::Selected(report) => Some(report),
            RepositoryOutcome::Failed(_) => None,
        })
    }

    /// Rows that failed
    pub fn failures(&self) -> impl Iterator<Item = &RepositoryFailure> {
        self.outcomes.iter().filter_map(|o| match o {
            RepositoryOutcome::Failed(failure) => Some(failure),
            RepositoryOutcome::Selected(_) => None,
        })
    }

    /// Returns true if at least one row failed
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Orchestrator for running input rows through a provider and the selector
pub struct Orchestrator {
    /// Source of release listings
    provider: Box<dyn ReleaseProvider>,
    /// Run configuration
    settings: Settings,
    /// Bounds concurrent provider requests
    semaphore: Semaphore,
}

impl Orchestrator {
    /// Create a new orchestrator around a release provider
    pub fn new(provider: Box<dyn ReleaseProvider>, settings: Settings) -> Self {
        let permits = settings.concurrency.max(1);
        Self {
            provider,
            settings,
            semaphore: Semaphore::new(permits),
        }
    }

    /// Process every row; outcomes keep the order of `rows`
    pub async fn run(&self, rows: &[InputRow]) -> OrchestratorResult {
        let mut progress = Progress::new(self.settings.show_progress);
        progress.start(rows.len() as u64, "Fetching releases");

        let outcomes = join_all(rows.iter().map(|row| self.process_row(row, &progress))).await;

        progress.finish_and_clear();
        OrchestratorResult { outcomes }
    }

    async fn process_row(&self, row: &InputRow, progress: &Progress) -> RepositoryOutcome {
        let outcome = match self.select_for_row(row).await {
            Ok(report) => RepositoryOutcome::Selected(report),
            Err(error) => {
                warn!(repository = %row.repository, line = row.line, %error, "skipping repository");
                RepositoryOutcome::Failed(RepositoryFailure {
                    line: row.line,
                    repository: row.repository.clone(),
                    error,
                })
            }
        };
        progress.inc();
        outcome
    }

    async fn select_for_row(&self, row: &InputRow) -> Result<RepositoryReport, RowError> {
        let floor = Version::parse(&row.min_version).map_err(RowError::InvalidFloor)?;

        let releases = {
            // acquire() only fails once the semaphore is closed
            let _permit = self.semaphore.acquire().await.ok();
            self.provider.list_releases(&row.repository).await?
        };

        let mut versions = Vec::with_capacity(releases.len());
        let mut skipped_tags = Vec::new();
        for release in releases {
            match Version::from_tag(&release.tag_name) {
                Ok(version) => versions.push(version),
                Err(e) => {
                    warn!(repository = %row.repository, tag = %release.tag_name, "ignoring tag: {}", e);
                    skipped_tags.push(SkippedTag {
                        tag: release.tag_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let latest = select_latest_per_line(&versions, &floor);
        debug!(
            repository = %row.repository,
            %floor,
            candidates = versions.len(),
            selected = latest.len(),
            "selected latest versions"
        );

        Ok(RepositoryReport {
            line: row.line,
            repository: row.repository.clone(),
            floor,
            latest,
            skipped_tags,
        })
    }
}
