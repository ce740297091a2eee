//! GitHub effect interpreter using octocrab.
//!
//! Each effect maps to exactly one REST call. Pagination is driven by the
//! caller one `ListComments` effect at a time, so the interpreter never loops.

use tracing::{debug, warn};

use crate::effects::{CommentData, CommentPage, GitHubEffect, GitHubInterpreter, GitHubResponse};
use crate::types::{CommentId, IssueNumber};

use super::client::OctocrabClient;
use super::error::GitHubApiError;

impl GitHubInterpreter for OctocrabClient {
    type Error = GitHubApiError;

    async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
        interpret_github_effect(self, effect).await
    }
}

/// Interprets a GitHub effect, executing it against the GitHub API.
pub async fn interpret_github_effect(
    client: &OctocrabClient,
    effect: GitHubEffect,
) -> Result<GitHubResponse, GitHubApiError> {
    let name = effect.name();
    debug!(effect = name, repo = %client.repo(), "executing GitHub effect");

    let result = match effect {
        GitHubEffect::ListComments {
            issue,
            page,
            per_page,
        } => list_comments(client, issue, page, per_page).await,
        GitHubEffect::CreateComment { issue, body } => create_comment(client, issue, body).await,
        GitHubEffect::UpdateComment { comment_id, body } => {
            update_comment(client, comment_id, body).await
        }
    };

    if let Err(e) = &result {
        warn!(
            effect = name,
            kind = %e.kind,
            status = ?e.status_code,
            rerun_may_help = e.is_transient(),
            "GitHub request failed"
        );
    }
    result
}

// ─── Comments ─────────────────────────────────────────────────────────────────

async fn list_comments(
    client: &OctocrabClient,
    issue: IssueNumber,
    page: u32,
    per_page: u8,
) -> Result<GitHubResponse, GitHubApiError> {
    let result = client
        .inner()
        .issues(client.owner(), client.repo_name())
        .list_comments(issue.0)
        .per_page(per_page)
        .page(page)
        .send()
        .await;

    match result {
        Ok(page_result) => {
            let has_next_page = page_result.next.is_some();
            let comments = page_result
                .items
                .into_iter()
                .map(|comment| CommentData {
                    id: CommentId(comment.id.into_inner()),
                    body: comment.body.unwrap_or_default(),
                })
                .collect();

            Ok(GitHubResponse::CommentsPage(CommentPage {
                comments,
                has_next_page,
            }))
        }
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

async fn create_comment(
    client: &OctocrabClient,
    issue: IssueNumber,
    body: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let result = client
        .inner()
        .issues(client.owner(), client.repo_name())
        .create_comment(issue.0, body)
        .await;

    match result {
        Ok(comment) => Ok(GitHubResponse::CommentCreated {
            id: CommentId(comment.id.into_inner()),
        }),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

async fn update_comment(
    client: &OctocrabClient,
    comment_id: CommentId,
    body: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let result = client
        .inner()
        .issues(client.owner(), client.repo_name())
        .update_comment(octocrab::models::CommentId(comment_id.0), body)
        .await;

    match result {
        Ok(comment) => Ok(GitHubResponse::CommentUpdated {
            id: CommentId(comment.id.into_inner()),
        }),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}
