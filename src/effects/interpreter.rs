//! Effect interpreter trait.
//!
//! The trait-based design enables:
//! - Fake interpreters for testing (see `crate::test_utils`)
//! - The octocrab-backed interpreter in `crate::github`

use std::future::Future;

use super::github::{GitHubEffect, GitHubResponse};

/// Interprets GitHub effects against the GitHub API.
///
/// Implementations are constructed with a `RepoId`, so all effects executed
/// through a single interpreter instance are scoped to that repository.
///
/// # Example (fake for testing)
///
/// ```ignore
/// struct FakeGitHub {
///     comments: Mutex<Vec<CommentData>>,
/// }
///
/// impl GitHubInterpreter for FakeGitHub {
///     type Error = String;
///
///     async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
///         match effect {
///             GitHubEffect::ListComments { .. } => Ok(GitHubResponse::CommentsPage(CommentPage {
///                 comments: self.comments.lock().unwrap().clone(),
///                 has_next_page: false,
///             })),
///             _ => Err(format!("unexpected effect: {:?}", effect)),
///         }
///     }
/// }
/// ```
pub trait GitHubInterpreter {
    /// The error type returned by this interpreter.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute a GitHub effect and return its response.
    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<GitHubResponse, Self::Error>> + Send;
}
