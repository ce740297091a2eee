//! Lazy, restartable paging over an issue's comments.
//!
//! `CommentPages` issues one `ListComments` effect per call to `next_page`,
//! so nothing is fetched until asked for and a test interpreter can serve a
//! fixed set of canned pages.

use tracing::trace;

use crate::effects::{COMMENTS_PER_PAGE, CommentData, GitHubEffect, GitHubInterpreter, GitHubResponse};
use crate::types::IssueNumber;

use super::error::UpsertError;

/// Page-by-page cursor over the comments on one issue.
pub struct CommentPages<'a, G> {
    client: &'a G,
    issue: IssueNumber,
    per_page: u8,
    /// Next page to request, or `None` once the listing is exhausted.
    next: Option<u32>,
}

impl<'a, G: GitHubInterpreter> CommentPages<'a, G> {
    /// Creates a cursor positioned before the first page.
    pub fn new(client: &'a G, issue: IssueNumber) -> Self {
        CommentPages {
            client,
            issue,
            per_page: COMMENTS_PER_PAGE,
            next: Some(1),
        }
    }

    /// Overrides the page size. Zero is treated as one.
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Fetches the next page.
    ///
    /// Returns `Ok(None)` once every page has been produced. A page that comes
    /// back empty also ends the listing, whatever the API says about more pages.
    pub async fn next_page(&mut self) -> Result<Option<Vec<CommentData>>, UpsertError> {
        let Some(page) = self.next else {
            return Ok(None);
        };

        let effect = GitHubEffect::ListComments {
            issue: self.issue,
            page,
            per_page: self.per_page,
        };
        let operation = effect.name();

        let response = self
            .client
            .interpret(effect)
            .await
            .map_err(|e| UpsertError::api(operation, self.issue, e))?;

        let listing = match response {
            GitHubResponse::CommentsPage(listing) => listing,
            other => {
                return Err(UpsertError::UnexpectedResponse {
                    operation,
                    issue: self.issue,
                    response: other,
                });
            }
        };

        trace!(
            issue = %self.issue,
            page,
            count = listing.comments.len(),
            has_next_page = listing.has_next_page,
            "fetched comment page"
        );

        self.next = if listing.has_next_page && !listing.comments.is_empty() {
            Some(page + 1)
        } else {
            None
        };

        Ok(Some(listing.comments))
    }

    /// Rewinds the cursor so the next call fetches page one again.
    pub fn restart(&mut self) {
        self.next = Some(1);
    }

    /// Returns true once the final page has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}
