//! Release entry returned by a release provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published release of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Tag the release points at (e.g., "v1.2.3")
    pub tag_name: String,
    /// Draft releases are not visible to the public
    #[serde(default)]
    pub draft: bool,
    /// Marked as pre-release by the maintainers
    #[serde(default)]
    pub prerelease: bool,
    /// Publication time, absent for drafts
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Release {
    /// Create a published, non-draft release with the given tag
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            draft: false,
            prerelease: false,
            published_at: None,
        }
    }
}
