//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: Strings that are not semantic versions
//! - InputError: Issues with the repository list file
//! - ProviderError: Issues with the release-listing service
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version parsing errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Input file related errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Release provider related errors
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while parsing a semantic version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The string does not conform to semantic-version syntax
    #[error("invalid version '{input}': {message}")]
    InvalidVersion { input: String, message: String },
}

/// Errors related to the repository list file
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file not found
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read input file
    #[error("failed to read input file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line that is not `owner/repo,min_version`
    #[error("malformed input on line {line} ('{content}'): {message}")]
    MalformedLine {
        line: usize,
        content: String,
        message: String,
    },
}

/// Errors related to the release-listing service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Repository does not exist (or is not visible)
    #[error("repository '{repository}' not found on {provider}")]
    RepositoryNotFound {
        repository: String,
        provider: String,
    },

    /// Network request failed
    #[error("failed to fetch releases of '{repository}' from {provider}: {message}")]
    NetworkError {
        repository: String,
        provider: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {provider}")]
    RateLimitExceeded { provider: String },

    /// Response body could not be understood
    #[error("invalid response from {provider} for '{repository}': {message}")]
    InvalidResponse {
        repository: String,
        provider: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching releases of '{repository}' from {provider}")]
    Timeout {
        repository: String,
        provider: String,
    },

    /// Authentication error
    #[error("authentication failed for {provider}: {message}")]
    AuthenticationError { provider: String, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option value outside its accepted range
    #[error("invalid value '{value}' for {option}: {message}")]
    InvalidOption {
        option: String,
        value: String,
        message: String,
    },
}

impl VersionError {
    /// Creates a new InvalidVersion error
    pub fn invalid_version(input: impl Into<String>, message: impl Into<String>) -> Self {
        VersionError::InvalidVersion {
            input: input.into(),
            message: message.into(),
        }
    }
}

impl InputError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        InputError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new MalformedLine error
    pub fn malformed_line(
        line: usize,
        content: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        InputError::MalformedLine {
            line,
            content: content.into(),
            message: message.into(),
        }
    }
}

impl ProviderError {
    /// Creates a new RepositoryNotFound error
    pub fn repository_not_found(repository: impl Into<String>, provider: impl Into<String>) -> Self {
        ProviderError::RepositoryNotFound {
            repository: repository.into(),
            provider: provider.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        repository: impl Into<String>,
        provider: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ProviderError::NetworkError {
            repository: repository.into(),
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(provider: impl Into<String>) -> Self {
        ProviderError::RateLimitExceeded {
            provider: provider.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        repository: impl Into<String>,
        provider: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ProviderError::InvalidResponse {
            repository: repository.into(),
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(repository: impl Into<String>, provider: impl Into<String>) -> Self {
        ProviderError::Timeout {
            repository: repository.into(),
            provider: provider.into(),
        }
    }

    /// Creates a new AuthenticationError
    pub fn authentication(provider: impl Into<String>, message: impl Into<String>) -> Self {
        ProviderError::AuthenticationError {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ProviderError::NetworkError { .. }
                | ProviderError::RateLimitExceeded { .. }
                | ProviderError::Timeout { .. }
        )
    }
}

impl ConfigError {
    /// Creates a new InvalidOption error
    pub fn invalid_option(
        option: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidOption {
            option: option.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}
