//! GitHub API effect types.
//!
//! These types describe GitHub API operations as data, without executing them.
//! The interpreter in `crate::github` executes these effects against the actual
//! GitHub API; tests execute them against in-memory fakes.

use serde::{Deserialize, Serialize};

use crate::types::{CommentId, IssueNumber};

/// Number of comments requested per page when listing.
///
/// 100 is the maximum the REST API accepts.
pub const COMMENTS_PER_PAGE: u8 = 100;

/// A GitHub API effect.
///
/// Each variant describes a GitHub API operation. Effects are repo-scoped:
/// the interpreter is constructed with a `RepoId`, so effects don't include it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GitHubEffect {
    /// Fetch one page of comments on an issue or pull request.
    ///
    /// Pages are 1-indexed, matching the REST API.
    ListComments {
        issue: IssueNumber,
        page: u32,
        per_page: u8,
    },

    /// Post a new comment on an issue or pull request.
    CreateComment { issue: IssueNumber, body: String },

    /// Replace the body of an existing comment.
    UpdateComment { comment_id: CommentId, body: String },
}

impl GitHubEffect {
    /// Short name of the effect, for log fields and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            GitHubEffect::ListComments { .. } => "list_comments",
            GitHubEffect::CreateComment { .. } => "create_comment",
            GitHubEffect::UpdateComment { .. } => "update_comment",
        }
    }
}

// ─── Response Types ───────────────────────────────────────────────────────────

/// Comment data returned from the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentData {
    /// The comment ID.
    pub id: CommentId,
    /// The comment body. Empty if the API returned none.
    pub body: String,
}

/// One page of an issue's comment listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommentPage {
    /// Comments on this page, in API order.
    pub comments: Vec<CommentData>,
    /// Whether the API advertised a following page.
    pub has_next_page: bool,
}

/// Response from a GitHub effect.
///
/// Each variant corresponds to the response from a particular effect type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum GitHubResponse {
    /// Response to `ListComments`.
    CommentsPage(CommentPage),

    /// Response to `CreateComment`.
    CommentCreated { id: CommentId },

    /// Response to `UpdateComment`.
    CommentUpdated { id: CommentId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_serializes_with_type_tag() {
        let effect = GitHubEffect::CreateComment {
            issue: IssueNumber(7),
            body: "hi".to_string(),
        };
        let json = serde_json::to_value(&effect).unwrap();
        assert_eq!(json["type"], "create_comment");
        assert_eq!(json["issue"], 7);
    }

    #[test]
    fn effect_names_are_distinct() {
        let names = [
            GitHubEffect::ListComments {
                issue: IssueNumber(1),
                page: 1,
                per_page: COMMENTS_PER_PAGE,
            }
            .name(),
            GitHubEffect::CreateComment {
                issue: IssueNumber(1),
                body: String::new(),
            }
            .name(),
            GitHubEffect::UpdateComment {
                comment_id: CommentId(1),
                body: String::new(),
            }
            .name(),
        ];
        assert_eq!(names, ["list_comments", "create_comment", "update_comment"]);
    }
}
