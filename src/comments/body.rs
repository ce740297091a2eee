//! Comment body composition.
//!
//! Every comment the crate posts has the same shape:
//!
//! ```text
//! <!-- {marker} -->
//! ## {title}
//!
//! {body}
//!
//! ---
//! [Action run]({run url}) for {sha}
//! ```
//!
//! The marker line is how a later run finds the comment again, so its format
//! must not change between releases.

use crate::context::RunContext;
use crate::types::Sha;

/// GitHub's comment size limit (65536 characters).
pub const GITHUB_COMMENT_SIZE_LIMIT: usize = 65536;

/// Room reserved for the marker, heading and footer around a body.
const ENVELOPE_ALLOWANCE: usize = 1024;

/// Largest body that still fits once wrapped in the envelope.
pub const MAX_BODY_LEN: usize = GITHUB_COMMENT_SIZE_LIMIT - ENVELOPE_ALLOWANCE;

const TRUNCATION_SUFFIX: &str = "... [truncated]";

/// The sentinel that identifies a comment across runs.
pub fn marker_token(marker_text: &str) -> String {
    format!("<!-- {} -->", marker_text)
}

/// Builds the full comment body.
pub fn compose_body(
    run: &RunContext,
    commit_sha: &Sha,
    marker_text: &str,
    title_text: &str,
    body_text: &str,
) -> String {
    format!(
        "{}\n## {}\n\n{}\n\n---\n[Action run]({}) for {}",
        marker_token(marker_text),
        title_text,
        body_text,
        run.run_url(),
        commit_sha
    )
}

/// Truncates a string to at most `max_len` bytes, ending with a "... [truncated]" suffix.
///
/// Strings that already fit are returned unchanged. The cut lands on a UTF-8
/// character boundary.
pub fn truncate_with_suffix(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let content_len = max_len.saturating_sub(TRUNCATION_SUFFIX.len());

    let mut end = content_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}{}", &s[..end], TRUNCATION_SUFFIX)
}
