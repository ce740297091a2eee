//! Sequential, fail-fast execution of build steps.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::step::{BuildStep, FileFilter};

/// Why a step failed.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// A step failed; the steps after it did not run.
#[derive(Debug, Error)]
#[error("build step {index} ({step}) failed")]
pub struct PipelineError {
    /// Zero-based position of the failed step.
    pub index: usize,
    /// Name of the failed step.
    pub step: String,
    #[source]
    pub source: StepError,
}

/// What a completed step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub name: String,
    /// Files copied. Always zero for clean steps.
    pub files: usize,
}

/// Summary of a completed pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub steps: Vec<StepReport>,
}

impl PipelineReport {
    /// Total files copied across every step.
    pub fn total_files(&self) -> usize {
        self.steps.iter().map(|s| s.files).sum()
    }
}

/// Runs `steps` in order, stopping at the first failure.
pub fn run_pipeline(steps: &[BuildStep]) -> Result<PipelineReport, PipelineError> {
    let mut report = PipelineReport::default();

    for (index, step) in steps.iter().enumerate() {
        let started = Instant::now();
        info!(step = step.name(), index, "starting build step");

        let files = run_step(step).map_err(|source| PipelineError {
            index,
            step: step.name().to_string(),
            source,
        })?;

        info!(
            step = step.name(),
            files,
            elapsed_ms = started.elapsed().as_millis(),
            "finished build step"
        );
        report.steps.push(StepReport {
            name: step.name().to_string(),
            files,
        });
    }

    Ok(report)
}

fn run_step(step: &BuildStep) -> Result<usize, StepError> {
    match step {
        BuildStep::Clean { dir, .. } => clean(dir).map(|()| 0),
        BuildStep::Copy {
            from, to, filter, ..
        } => copy_tree(from, to, filter),
    }
}

fn clean(dir: &Path) -> Result<(), StepError> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StepError::Io {
            action: "remove",
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Copies every file under `from` that passes `filter` to the same relative path under `to`.
fn copy_tree(from: &Path, to: &Path, filter: &FileFilter) -> Result<usize, StepError> {
    let mut copied = 0;

    for entry in WalkDir::new(from).sort_by_file_name() {
        let entry = entry.map_err(|source| StepError::Walk {
            path: from.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || !filter.matches(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(from).unwrap_or(entry.path());
        let target = to.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| StepError::Io {
                action: "create",
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::copy(entry.path(), &target).map_err(|source| StepError::Io {
            action: "copy",
            path: entry.path().to_path_buf(),
            source,
        })?;

        debug!(file = %relative.display(), "copied");
        copied += 1;
    }

    Ok(copied)
}
