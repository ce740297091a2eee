//! Errors raised while building or posting a report.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::comments::UpsertError;

use super::table::TableError;

/// Failure of a single report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to scan {}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid module stats in {}", path.display())]
    ModuleStats {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render table")]
    Table(#[from] TableError),

    #[error("failed to post comment")]
    Upsert(#[from] UpsertError),
}

/// Outcome of one report in a batch.
#[derive(Debug)]
pub struct SettledReport {
    /// Marker of the report's comment.
    pub marker: String,
    /// What happened.
    pub outcome: Result<(), ReportError>,
}

/// A batch in which at least one report failed.
///
/// Carries every outcome, successful or not, in input order.
#[derive(Debug, Error)]
pub struct AggregateError {
    pub results: Vec<SettledReport>,
}

impl AggregateError {
    /// The outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ReportError)> {
        self.results.iter().filter_map(|r| match &r.outcome {
            Ok(()) => None,
            Err(e) => Some((r.marker.as_str(), e)),
        })
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed: Vec<&str> = self.failures().map(|(marker, _)| marker).collect();
        write!(
            f,
            "{} of {} reports failed: {}",
            failed.len(),
            self.results.len(),
            failed.join(", ")
        )
    }
}
