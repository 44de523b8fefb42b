//! GitHub Releases API provider
//!
//! Lists the releases of a repository.
//! API endpoint: https://api.github.com/repos/{owner}/{repo}/releases
//!
//! Unauthenticated requests are limited to 60 per hour; pass a token to
//! HttpClient to raise the quota.

use crate::domain::{Release, Repository};
use crate::error::ProviderError;
use crate::provider::{HttpClient, ReleaseProvider};
use async_trait::async_trait;
use tracing::debug;

/// GitHub REST API base URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Releases requested per repository unless configured otherwise
pub const DEFAULT_PER_PAGE: u8 = 10;

/// Upper bound GitHub accepts for `per_page`
pub const MAX_PER_PAGE: u8 = 100;

/// Release provider backed by the GitHub Releases API
pub struct GitHubReleases {
    client: HttpClient,
    base_url: String,
    per_page: u8,
}

impl GitHubReleases {
    /// Create a provider against api.github.com
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, GITHUB_API_URL)
    }

    /// Create a provider against a custom API base (GitHub Enterprise, tests)
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set how many releases to request, clamped to 1..=100
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Build the releases URL for a repository
    fn build_url(&self, repository: &Repository) -> String {
        format!(
            "{}/repos/{}/{}/releases?per_page={}",
            self.base_url, repository.owner, repository.name, self.per_page
        )
    }
}

#[async_trait]
impl ReleaseProvider for GitHubReleases {
    fn provider_name(&self) -> &'static str {
        "GitHub"
    }

    async fn list_releases(&self, repository: &Repository) -> Result<Vec<Release>, ProviderError> {
        let url = self.build_url(repository);
        debug!(%repository, %url, "listing releases");

        let releases: Vec<Release> = self
            .client
            .get_json(&url, &repository.to_string(), self.provider_name())
            .await?;

        let total = releases.len();
        let published: Vec<Release> = releases.into_iter().filter(|r| !r.draft).collect();
        debug!(
            %repository,
            total,
            drafts = total - published.len(),
            "received releases"
        );

        Ok(published)
    }
}
