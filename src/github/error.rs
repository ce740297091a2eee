//! GitHub API error types.
//!
//! Errors are categorized so the CI log tells the reader whether a rerun is
//! likely to help:
//!
//! - **Transient** errors (5xx, rate limits, network failures) usually clear on a rerun
//! - **Permanent** errors (most 4xx, bad credentials, missing issue) need a fix
//!
//! No caller retries automatically; the kind is informational.

use std::fmt;
use thiserror::Error;

/// The kind of GitHub API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitHubErrorKind {
    /// Transient error - a rerun of the workflow may succeed.
    ///
    /// Examples:
    /// - HTTP 5xx (server errors)
    /// - HTTP 429 (rate limited)
    /// - HTTP 403 with a rate limit message
    /// - Network timeouts
    Transient,

    /// Permanent error - requires a change to the workflow or repository.
    ///
    /// Examples:
    /// - Authentication failures (401, 403 non-rate-limit)
    /// - Issue or comment not found (404)
    /// - Body rejected as invalid (422)
    Permanent,
}

impl fmt::Display for GitHubErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitHubErrorKind::Transient => write!(f, "transient"),
            GitHubErrorKind::Permanent => write!(f, "permanent"),
        }
    }
}

/// A GitHub API error with categorization.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    /// The kind of error (transient or permanent).
    pub kind: GitHubErrorKind,

    /// The HTTP status code, if available.
    pub status_code: Option<u16>,

    /// A human-readable description of the error.
    pub message: String,

    /// The underlying octocrab error, if available.
    #[source]
    pub source: Option<octocrab::Error>,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message),
            None => write!(f, "GitHub API error: {}", self.message),
        }
    }
}

impl GitHubApiError {
    /// Creates a permanent error without an octocrab source.
    ///
    /// Used when the API answered but the answer was unusable.
    pub fn permanent_without_source(message: impl Into<String>) -> Self {
        Self {
            kind: GitHubErrorKind::Permanent,
            status_code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if a rerun of the workflow may succeed.
    pub fn is_transient(&self) -> bool {
        self.kind == GitHubErrorKind::Transient
    }

    /// Categorizes an octocrab error.
    pub fn from_octocrab(err: octocrab::Error) -> Self {
        let status_code = Self::extract_status_code(&err);
        let message = err.to_string();
        let kind = categorize(status_code, &message);

        Self {
            kind,
            status_code,
            message,
            source: Some(err),
        }
    }

    /// Extracts the HTTP status code from an octocrab error, if present.
    ///
    /// API errors carry the status directly. Other variants (HTTP transport,
    /// JSON decoding) only mention it in their message, if at all.
    fn extract_status_code(err: &octocrab::Error) -> Option<u16> {
        if let octocrab::Error::GitHub { source, .. } = err {
            return Some(source.status_code.as_u16());
        }
        status_code_from_message(&err.to_string())
    }
}

/// Picks the error kind from a status code and message.
fn categorize(status_code: Option<u16>, message: &str) -> GitHubErrorKind {
    match status_code {
        Some(429) => GitHubErrorKind::Transient,
        Some(403) if is_rate_limit_error(message) => GitHubErrorKind::Transient,
        Some(code) if (500..600).contains(&code) => GitHubErrorKind::Transient,
        Some(_) => GitHubErrorKind::Permanent,
        None if is_network_error(message) => GitHubErrorKind::Transient,
        None => GitHubErrorKind::Permanent,
    }
}

/// Finds a `status: NNN` fragment in an error message.
fn status_code_from_message(message: &str) -> Option<u16> {
    let idx = message.find("status: ")?;
    let digits: String = message[idx + 8..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Checks if an error message indicates a rate limit.
fn is_rate_limit_error(message: &str) -> bool {
    let message_lower = message.to_lowercase();
    message_lower.contains("rate limit")
        || message_lower.contains("api rate")
        || message_lower.contains("secondary rate")
        || message_lower.contains("abuse detection")
}

/// Checks if an error message indicates a network-level error.
fn is_network_error(message: &str) -> bool {
    let message_lower = message.to_lowercase();
    message_lower.contains("timeout")
        || message_lower.contains("connection")
        || message_lower.contains("network")
        || message_lower.contains("dns")
        || message_lower.contains("timed out")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_detection() {
        assert!(is_rate_limit_error("API rate limit exceeded"));
        assert!(is_rate_limit_error("secondary rate limit"));
        assert!(is_rate_limit_error("abuse detection mechanism"));
        assert!(!is_rate_limit_error("Permission denied"));
    }

    #[test]
    fn network_error_detection() {
        assert!(is_network_error("connection timeout"));
        assert!(is_network_error("DNS resolution failed"));
        assert!(is_network_error("request timed out"));
        assert!(!is_network_error("Not found"));
    }

    #[test]
    fn categorize_by_status() {
        assert_eq!(categorize(Some(502), ""), GitHubErrorKind::Transient);
        assert_eq!(categorize(Some(429), ""), GitHubErrorKind::Transient);
        assert_eq!(
            categorize(Some(403), "API rate limit exceeded"),
            GitHubErrorKind::Transient
        );
        assert_eq!(
            categorize(Some(403), "Resource not accessible by integration"),
            GitHubErrorKind::Permanent
        );
        assert_eq!(categorize(Some(404), ""), GitHubErrorKind::Permanent);
        assert_eq!(
            categorize(None, "connection reset by peer"),
            GitHubErrorKind::Transient
        );
        assert_eq!(categorize(None, "invalid json"), GitHubErrorKind::Permanent);
    }

    #[test]
    fn status_code_parsed_from_message() {
        assert_eq!(status_code_from_message("failed, status: 503 oops"), Some(503));
        assert_eq!(status_code_from_message("status: 404"), Some(404));
        assert_eq!(status_code_from_message("no code here"), None);
        assert_eq!(status_code_from_message("status: abc"), None);
    }

    #[test]
    fn display_includes_status_code() {
        let mut err = GitHubApiError::permanent_without_source("Not Found");
        assert_eq!(err.to_string(), "GitHub API error: Not Found");
        err.status_code = Some(404);
        assert_eq!(err.to_string(), "GitHub API error (HTTP 404): Not Found");
    }
}
