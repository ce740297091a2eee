//! Idempotent pull request comments.
//!
//! A comment is identified by a marker token (`<!-- marker -->`) at the start
//! of its body. Posting with the same marker again rewrites that comment
//! instead of adding another one.

pub mod body;
pub mod error;
pub mod pages;
pub mod upsert;

pub use body::{GITHUB_COMMENT_SIZE_LIMIT, MAX_BODY_LEN, compose_body, marker_token};
pub use error::UpsertError;
pub use pages::CommentPages;
pub use upsert::upsert_comment;
