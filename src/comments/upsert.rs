//! Find-or-create of a comment identified by its marker token.

use tracing::{debug, info};

use crate::context::GithubActionContext;
use crate::effects::{CommentData, GitHubEffect, GitHubInterpreter, GitHubResponse};
use crate::types::{CommentId, IssueNumber};

use super::body::{compose_body, marker_token};
use super::error::UpsertError;
use super::pages::CommentPages;

/// Creates the marker's comment on `issue`, or updates it if one exists.
///
/// Every page of the issue's comments is read before deciding. When more than
/// one comment carries the marker, the last one listed is updated.
///
/// Returns the ID of the comment that now holds the body.
pub async fn upsert_comment<G: GitHubInterpreter>(
    ctx: &GithubActionContext<G>,
    issue: IssueNumber,
    marker_text: &str,
    title_text: &str,
    body_text: &str,
) -> Result<CommentId, UpsertError> {
    let token = marker_token(marker_text);
    let body = compose_body(&ctx.run, &ctx.commit_sha, marker_text, title_text, body_text);

    let existing = find_marked_comment(&ctx.client, issue, &token).await?;

    let effect = match existing {
        None => GitHubEffect::CreateComment { issue, body },
        Some(comment_id) => GitHubEffect::UpdateComment { comment_id, body },
    };
    let operation = effect.name();

    let response = ctx
        .client
        .interpret(effect)
        .await
        .map_err(|e| UpsertError::api(operation, issue, e))?;

    match response {
        GitHubResponse::CommentCreated { id } => {
            info!(%issue, marker = marker_text, comment_id = %id, "created comment");
            Ok(id)
        }
        GitHubResponse::CommentUpdated { id } => {
            info!(%issue, marker = marker_text, comment_id = %id, "updated comment");
            Ok(id)
        }
        other => Err(UpsertError::UnexpectedResponse {
            operation,
            issue,
            response: other,
        }),
    }
}

/// Scans every comment page for the marker token.
///
/// Does not stop at the first match. Within a page the first match counts; a
/// match on a later page overwrites one from an earlier page.
async fn find_marked_comment<G: GitHubInterpreter>(
    client: &G,
    issue: IssueNumber,
    token: &str,
) -> Result<Option<CommentId>, UpsertError> {
    let mut pages = CommentPages::new(client, issue);
    let mut found = None;

    while let Some(page) = pages.next_page().await? {
        if let Some(id) = first_marked(&page, token) {
            debug!(%issue, comment_id = %id, "found marked comment");
            found = Some(id);
        }
    }

    Ok(found)
}

fn first_marked(page: &[CommentData], token: &str) -> Option<CommentId> {
    page.iter().find(|c| c.body.contains(token)).map(|c| c.id)
}
