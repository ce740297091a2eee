//! Shared test fakes and helpers.

use std::future::Future;
use std::sync::Mutex;

use thiserror::Error;

use crate::context::{GithubActionContext, RunContext};
use crate::effects::{CommentData, CommentPage, GitHubEffect, GitHubInterpreter, GitHubResponse};
use crate::types::{CommentId, RepoId, RunId, Sha};

/// Error returned by `FakeGitHub` when told to fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("fake GitHub failure: {0}")]
pub struct FakeError(pub String);

#[derive(Debug, Default)]
struct FakeState {
    pages: Vec<Vec<CommentData>>,
    next_id: u64,
    effects: Vec<GitHubEffect>,
    fail_listing: bool,
    fail_writes_containing: Vec<String>,
}

/// In-memory comment thread for a single issue.
///
/// Listing serves the configured pages in order. Created comments are
/// appended to the last page. Every effect is recorded.
#[derive(Debug, Default)]
pub struct FakeGitHub {
    state: Mutex<FakeState>,
}

impl FakeGitHub {
    /// Creates a fake whose listing returns exactly these pages.
    pub fn with_pages(pages: Vec<Vec<CommentData>>) -> Self {
        let next_id = pages
            .iter()
            .flatten()
            .map(|c| c.id.0)
            .max()
            .unwrap_or(0)
            + 1;
        FakeGitHub {
            state: Mutex::new(FakeState {
                pages,
                next_id,
                ..FakeState::default()
            }),
        }
    }

    /// Makes every `ListComments` effect fail.
    pub fn fail_listing(&self) {
        self.state.lock().unwrap().fail_listing = true;
    }

    /// Makes create/update fail whenever the body contains `needle`.
    pub fn fail_writes_containing(&self, needle: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .fail_writes_containing
            .push(needle.into());
    }

    /// All comments currently on the thread, in listing order.
    pub fn comments(&self) -> Vec<CommentData> {
        self.state
            .lock()
            .unwrap()
            .pages
            .iter()
            .flatten()
            .cloned()
            .collect()
    }

    /// Every effect received so far.
    pub fn effects(&self) -> Vec<GitHubEffect> {
        self.state.lock().unwrap().effects.clone()
    }

    /// Number of `ListComments` effects received.
    pub fn list_calls(&self) -> usize {
        self.effects()
            .iter()
            .filter(|e| matches!(e, GitHubEffect::ListComments { .. }))
            .count()
    }

    fn apply(&self, effect: GitHubEffect) -> Result<GitHubResponse, FakeError> {
        let mut state = self.state.lock().unwrap();
        state.effects.push(effect.clone());

        match effect {
            GitHubEffect::ListComments { page, .. } => {
                if state.fail_listing {
                    return Err(FakeError("listing disabled".to_string()));
                }
                let index = page.saturating_sub(1) as usize;
                let comments = state.pages.get(index).cloned().unwrap_or_default();
                Ok(GitHubResponse::CommentsPage(CommentPage {
                    comments,
                    has_next_page: index + 1 < state.pages.len(),
                }))
            }
            GitHubEffect::CreateComment { body, .. } => {
                check_write(&state, &body)?;
                let id = CommentId(state.next_id);
                state.next_id += 1;
                if state.pages.is_empty() {
                    state.pages.push(Vec::new());
                }
                if let Some(last) = state.pages.last_mut() {
                    last.push(CommentData { id, body });
                }
                Ok(GitHubResponse::CommentCreated { id })
            }
            GitHubEffect::UpdateComment { comment_id, body } => {
                check_write(&state, &body)?;
                let target = state
                    .pages
                    .iter_mut()
                    .flatten()
                    .find(|c| c.id == comment_id)
                    .ok_or_else(|| FakeError(format!("no comment {}", comment_id)))?;
                target.body = body;
                Ok(GitHubResponse::CommentUpdated { id: comment_id })
            }
        }
    }
}

fn check_write(state: &FakeState, body: &str) -> Result<(), FakeError> {
    match state
        .fail_writes_containing
        .iter()
        .find(|needle| body.contains(needle.as_str()))
    {
        Some(needle) => Err(FakeError(format!("write rejected ({})", needle))),
        None => Ok(()),
    }
}

impl GitHubInterpreter for FakeGitHub {
    type Error = FakeError;

    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<GitHubResponse, Self::Error>> + Send {
        let result = self.apply(effect);
        async move { result }
    }
}

/// Builds a comment with the given ID and body.
pub fn comment(id: u64, body: &str) -> CommentData {
    CommentData {
        id: CommentId(id),
        body: body.to_string(),
    }
}

/// A run context for `alphagov/govuk-frontend`, run 1234.
pub fn test_run() -> RunContext {
    RunContext::new(RepoId::new("alphagov", "govuk-frontend"), RunId(1234))
}

/// Wraps a fake in a context with a fixed commit.
pub fn test_context(fake: FakeGitHub) -> GithubActionContext<FakeGitHub> {
    GithubActionContext::new(fake, test_run(), Sha::new("cafef00d"))
}
