//! In-memory release provider
//!
//! Serves a fixed set of releases per repository. Repositories without an
//! entry are reported as not found.

use crate::domain::{Release, Repository};
use crate::error::ProviderError;
use crate::provider::ReleaseProvider;
use async_trait::async_trait;
use std::collections::HashMap;

enum Entry {
    Releases(Vec<Release>),
    Failure(String),
}

/// Release provider answering from memory
#[derive(Default)]
pub struct StaticProvider {
    entries: HashMap<Repository, Entry>,
}

impl StaticProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Register releases for a repository, given by tag name
    pub fn with_tags(mut self, repository: Repository, tags: &[&str]) -> Self {
        let releases = tags.iter().map(|tag| Release::new(*tag)).collect();
        self.entries.insert(repository, Entry::Releases(releases));
        self
    }

    /// Register releases for a repository
    pub fn with_releases(mut self, repository: Repository, releases: Vec<Release>) -> Self {
        self.entries.insert(repository, Entry::Releases(releases));
        self
    }

    /// Make lookups of `repository` fail with a network error
    pub fn with_failure(mut self, repository: Repository, message: impl Into<String>) -> Self {
        self.entries
            .insert(repository, Entry::Failure(message.into()));
        self
    }
}

#[async_trait]
impl ReleaseProvider for StaticProvider {
    fn provider_name(&self) -> &'static str {
        "static"
    }

    async fn list_releases(&self, repository: &Repository) -> Result<Vec<Release>, ProviderError> {
        match self.entries.get(repository) {
            Some(Entry::Releases(releases)) => Ok(releases.clone()),
            Some(Entry::Failure(message)) => Err(ProviderError::network_error(
                repository.to_string(),
                self.provider_name(),
                message.clone(),
            )),
            None => Err(ProviderError::repository_not_found(
                repository.to_string(),
                self.provider_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_registered_tags() {
        let repo = Repository::new("acme", "tool");
        let provider = StaticProvider::new().with_tags(repo.clone(), &["v1.0.0", "v1.1.0"]);

        let releases = provider.list_releases(&repo).await.unwrap();
        assert_eq!(releases, vec![Release::new("v1.0.0"), Release::new("v1.1.0")]);
    }

    #[tokio::test]
    async fn test_unknown_repository_is_not_found() {
        let provider = StaticProvider::new();
        let result = provider.list_releases(&Repository::new("acme", "ghost")).await;
        assert!(matches!(result, Err(ProviderError::RepositoryNotFound { .. })));
    }

    #[tokio::test]
    async fn test_registered_failure() {
        let repo = Repository::new("acme", "flaky");
        let provider = StaticProvider::new().with_failure(repo.clone(), "connection reset");

        let err = provider.list_releases(&repo).await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
