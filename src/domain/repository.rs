//! Repository identifier (`owner/name`)

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Characters GitHub accepts in user, organization and repository names
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap());

/// A repository on the release-listing service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    /// User or organization that owns the repository
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl Repository {
    /// Create a repository identifier without validation
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns true if `s` looks like `owner/name`
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Repository>().is_ok()
    }
}

impl FromStr for Repository {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (owner, name) = s
            .split_once('/')
            .ok_or_else(|| format!("expected 'owner/repo', got '{}'", s))?;

        if !NAME_RE.is_match(owner) {
            return Err(format!("invalid repository owner '{}'", owner));
        }
        if !NAME_RE.is_match(name) {
            return Err(format!("invalid repository name '{}'", name));
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl Serialize for Repository {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let repo: Repository = "kubernetes/kubernetes".parse().unwrap();
        assert_eq!(repo.owner, "kubernetes");
        assert_eq!(repo.name, "kubernetes");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let repo: Repository = "  prometheus/prometheus ".parse().unwrap();
        assert_eq!(repo, Repository::new("prometheus", "prometheus"));
    }

    #[test]
    fn test_parse_allows_dots_and_dashes() {
        let repo: Repository = "rust-lang/rust.vim".parse().unwrap();
        assert_eq!(repo.name, "rust.vim");
    }

    #[test]
    fn test_parse_missing_slash() {
        assert!("kubernetes".parse::<Repository>().is_err());
    }

    #[test]
    fn test_parse_empty_parts() {
        assert!("/kubernetes".parse::<Repository>().is_err());
        assert!("kubernetes/".parse::<Repository>().is_err());
    }

    #[test]
    fn test_parse_rejects_nested_paths() {
        assert!("a/b/c".parse::<Repository>().is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(Repository::is_valid("a/b"));
        assert!(!Repository::is_valid("repository"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Repository::new("golang", "go").to_string(), "golang/go");
    }
}
