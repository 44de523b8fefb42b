//! Core domain models for release-lines
//!
//! This module contains the value types used throughout the application:
//! - Semantic versions and their canonical ordering
//! - Release lines (major.minor families)
//! - Repository identifiers
//! - Release entries as returned by a provider

mod release;
mod release_line;
mod repository;
mod version;

pub use release::Release;
pub use release_line::ReleaseLine;
pub use repository::Repository;
pub use version::Version;
