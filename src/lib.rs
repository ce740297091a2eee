//! CI reporting and packaging for the GOV.UK Frontend component library.
//!
//! Two independent jobs live here:
//! - posting diff and bundle-size reports as idempotent pull request comments
//! - assembling the publishable npm package from the source tree

pub mod comments;
pub mod config;
pub mod context;
pub mod effects;
pub mod github;
pub mod pipeline;
pub mod report;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
