//! Pull request reports: diffs and bundle size stats.

pub mod diff;
pub mod error;
pub mod size;
pub mod stats;
pub mod table;

pub use diff::{DiffDescriptor, NO_CHANGES, report_all, report_diff};
pub use error::{AggregateError, ReportError, SettledReport};
pub use size::format_size;
pub use stats::{StatsDescriptor, report_stats};
pub use table::{TableError, render_table};
