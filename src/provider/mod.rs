//! Release providers for listing repository releases
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - GitHub Releases API provider
//! - An in-memory provider for tests and offline runs

mod client;
mod github;
mod static_provider;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use github::{GitHubReleases, DEFAULT_PER_PAGE, GITHUB_API_URL, MAX_PER_PAGE};
pub use static_provider::StaticProvider;

use crate::domain::{Release, Repository};
use crate::error::ProviderError;
use async_trait::async_trait;

/// Trait for release-listing services
#[async_trait]
pub trait ReleaseProvider: Send + Sync {
    /// Get the provider name used in messages
    fn provider_name(&self) -> &'static str;

    /// List the published releases of a repository, in the order the service returns them
    async fn list_releases(&self, repository: &Repository) -> Result<Vec<Release>, ProviderError>;
}
