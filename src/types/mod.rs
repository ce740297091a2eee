//! Core domain types shared by the reporters and the GitHub layer.

pub mod ids;

pub use ids::{CommentId, IssueNumber, RepoId, RunId, Sha};
