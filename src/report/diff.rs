//! Posting diff files as pull request comments.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use futures::future::join_all;
use tracing::{info, warn};

use crate::comments::{MAX_BODY_LEN, upsert_comment};
use crate::comments::body::truncate_with_suffix;
use crate::context::{GithubActionContext, RunContext};
use crate::effects::GitHubInterpreter;
use crate::types::IssueNumber;

use super::error::{AggregateError, ReportError, SettledReport};

/// Posted instead of an empty diff.
pub const NO_CHANGES: &str = "No changes found.";

/// A diff file to report, and the comment it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffDescriptor {
    pub path: PathBuf,
    pub marker: String,
    pub title: String,
}

impl DiffDescriptor {
    pub fn new(
        path: impl Into<PathBuf>,
        marker: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        DiffDescriptor {
            path: path.into(),
            marker: marker.into(),
            title: title.into(),
        }
    }
}

/// Parses `MARKER:PATH:TITLE`. The title may itself contain colons.
impl FromStr for DiffDescriptor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(marker), Some(path), Some(title))
                if !marker.is_empty() && !path.is_empty() && !title.is_empty() =>
            {
                Ok(DiffDescriptor::new(path, marker, title))
            }
            _ => Err(format!("expected MARKER:PATH:TITLE, got {:?}", s)),
        }
    }
}

/// Posts one diff, falling back to an artifacts link if that fails.
///
/// Only a failure of the fallback post is returned.
pub async fn report_diff<G: GitHubInterpreter>(
    ctx: &GithubActionContext<G>,
    issue: IssueNumber,
    descriptor: &DiffDescriptor,
) -> Result<(), ReportError> {
    match post_diff(ctx, issue, descriptor).await {
        Ok(()) => Ok(()),
        Err(e) => {
            warn!(
                %issue,
                marker = %descriptor.marker,
                path = %descriptor.path.display(),
                error = %e,
                "posting diff failed, posting artifacts link instead"
            );
            let fallback = fallback_body(&ctx.run);
            upsert_comment(ctx, issue, &descriptor.marker, &descriptor.title, &fallback).await?;
            Ok(())
        }
    }
}

/// Reports every diff concurrently and waits for all of them.
///
/// One failure does not stop the others. If any failed, the returned error
/// holds every outcome.
pub async fn report_all<G: GitHubInterpreter>(
    ctx: &GithubActionContext<G>,
    issue: IssueNumber,
    descriptors: &[DiffDescriptor],
) -> Result<(), AggregateError> {
    let results: Vec<SettledReport> = join_all(descriptors.iter().map(|d| async move {
        SettledReport {
            marker: d.marker.clone(),
            outcome: report_diff(ctx, issue, d).await,
        }
    }))
    .await;

    let failed = results.iter().filter(|r| r.outcome.is_err()).count();
    if failed == 0 {
        info!(%issue, count = results.len(), "all diffs reported");
        Ok(())
    } else {
        Err(AggregateError { results })
    }
}

async fn post_diff<G: GitHubInterpreter>(
    ctx: &GithubActionContext<G>,
    issue: IssueNumber,
    descriptor: &DiffDescriptor,
) -> Result<(), ReportError> {
    let content = read_diff(&descriptor.path).await?;
    let body = diff_body(&content);
    upsert_comment(ctx, issue, &descriptor.marker, &descriptor.title, &body).await?;
    Ok(())
}

async fn read_diff(path: &Path) -> Result<String, ReportError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Wraps diff text in a fenced `diff` block.
///
/// An empty file becomes [`NO_CHANGES`]. Content is kept as read apart from a
/// single trailing newline. Oversized diffs are truncated to fit GitHub's
/// comment limit.
pub fn diff_body(content: &str) -> String {
    let text = if content.is_empty() {
        NO_CHANGES
    } else {
        content.strip_suffix('\n').unwrap_or(content)
    };
    format!("```diff\n{}\n```", truncate_with_suffix(text, MAX_BODY_LEN))
}

/// Text posted when the diff itself could not be.
pub fn fallback_body(run: &RunContext) -> String {
    format!(
        "Failed to generate diff. You can download the diff from the [artifacts of this action run]({}).",
        run.artifacts_url()
    )
}
