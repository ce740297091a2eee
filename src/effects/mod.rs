//! Effects-as-data for GitHub operations.
//!
//! This module defines effect types that describe operations without executing them.
//! This enables:
//! - Pure comment logic that issues effects as data
//! - Testability via fake interpreters
//! - Logging/tracing of intended operations

pub mod github;
pub mod interpreter;

pub use github::{COMMENTS_PER_PAGE, CommentData, CommentPage, GitHubEffect, GitHubResponse};
pub use interpreter::GitHubInterpreter;
