//! GitHub API client and effect interpreter.
//!
//! This module provides the implementation for executing GitHub effects via the octocrab
//! library. It implements the `GitHubInterpreter` trait defined in the effects module.
//!
//! Errors are categorized as transient or permanent so CI logs say whether a rerun
//! is likely to help. Nothing here retries; callers decide what a failure means.

mod client;
mod error;
mod interpreter;

pub use client::OctocrabClient;
pub use error::{GitHubApiError, GitHubErrorKind};
pub use interpreter::interpret_github_effect;
