//! Assembly of the publishable npm package.
//!
//! The build is an ordered list of `BuildStep`s: clean the outputs, then copy
//! assets, fixtures, scripts, styles, templates and prototype kit files into
//! the package tree. Steps run one at a time and the first failure stops the
//! build.

pub mod layout;
pub mod runner;
pub mod step;

pub use layout::{PackageLayout, package_pipeline};
pub use runner::{PipelineError, PipelineReport, StepError, StepReport, run_pipeline};
pub use step::{BuildStep, FileFilter};
