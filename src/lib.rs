//! release-lines - latest stable release per minor version line
//!
//! This library provides the pieces of the `release-lines` tool:
//! - Version selection (the pure core, see [`select`])
//! - Input file parsing
//! - Release providers (GitHub Releases API)
//! - Orchestration and output formatting

pub mod cli;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod provider;
pub mod select;

pub use domain::{Release, ReleaseLine, Repository, Version};
pub use select::select_latest_per_line;
