//! Errors raised while finding, creating or updating a comment.

use std::error::Error as StdError;

use thiserror::Error;

use crate::effects::GitHubResponse;
use crate::types::IssueNumber;

/// A boxed interpreter error.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure of a comment operation.
#[derive(Debug, Error)]
pub enum UpsertError {
    /// The interpreter failed to execute an effect.
    #[error("{operation} failed for issue {issue}")]
    Api {
        operation: &'static str,
        issue: IssueNumber,
        #[source]
        source: BoxError,
    },

    /// The interpreter answered with a response of the wrong type.
    #[error("unexpected response to {operation} for issue {issue}: {response:?}")]
    UnexpectedResponse {
        operation: &'static str,
        issue: IssueNumber,
        response: GitHubResponse,
    },
}

impl UpsertError {
    pub(crate) fn api<E>(operation: &'static str, issue: IssueNumber, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        UpsertError::Api {
            operation,
            issue,
            source: Box::new(source),
        }
    }
}
