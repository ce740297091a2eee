//! File size and module size reports.
//!
//! Two tables are posted in one comment: the size of every built stylesheet
//! and script, and the bundled size of each public module with a link to its
//! visualisation on the pull request's review app.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::comments::upsert_comment;
use crate::context::GithubActionContext;
use crate::effects::GitHubInterpreter;
use crate::types::IssueNumber;

use super::error::ReportError;
use super::size::format_size;
use super::table::render_table;

/// Build output trees scanned for file sizes, relative to the descriptor path.
pub const FILE_SIZE_DIRS: [&str; 2] = ["dist", "packages/govuk-frontend/dist/govuk"];

/// Extensions reported in the file size table.
const REPORTED_EXTENSIONS: [&str; 3] = ["css", "js", "mjs"];

/// Directory holding per-module stats, relative to the descriptor path.
pub const MODULE_STATS_DIR: &str = "stats";

/// Modules whose bundled size is reported.
pub const MODULES: &[&str] = &[
    "all.mjs",
    "components/accordion/accordion.mjs",
    "components/button/button.mjs",
    "components/character-count/character-count.mjs",
    "components/checkboxes/checkboxes.mjs",
    "components/error-summary/error-summary.mjs",
    "components/exit-this-page/exit-this-page.mjs",
    "components/header/header.mjs",
    "components/notification-banner/notification-banner.mjs",
    "components/password-input/password-input.mjs",
    "components/radios/radios.mjs",
    "components/service-navigation/service-navigation.mjs",
    "components/skip-link/skip-link.mjs",
    "components/tabs/tabs.mjs",
];

const TABLE_HEADER: [&str; 2] = ["File", "Size"];

/// A stats report and the comment it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDescriptor {
    /// Root holding the build outputs and module stats.
    pub path: PathBuf,
    pub marker: String,
    pub title: String,
}

impl StatsDescriptor {
    pub fn new(
        path: impl Into<PathBuf>,
        marker: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        StatsDescriptor {
            path: path.into(),
            marker: marker.into(),
            title: title.into(),
        }
    }
}

/// One row of the file size table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSizeRow {
    pub file: String,
    pub size: String,
}

/// One row of the module table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStatsRow {
    /// Markdown link to the module's visualisation.
    pub module: String,
    pub size: String,
}

/// Sizes recorded for a bundled module, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ModuleStats {
    pub rendered: u64,
    #[serde(default)]
    pub gzip: Option<u64>,
}

/// Base URL of the review app deployed for a pull request.
pub fn review_app_url(issue: IssueNumber) -> String {
    format!("https://govuk-frontend-pr-{}.herokuapp.com", issue.0)
}

/// Builds and posts the stats comment.
pub async fn report_stats<G: GitHubInterpreter>(
    ctx: &GithubActionContext<G>,
    issue: IssueNumber,
    descriptor: &StatsDescriptor,
) -> Result<(), ReportError> {
    let review_app = review_app_url(issue);

    let mut files = Vec::new();
    for dir in FILE_SIZE_DIRS {
        files.extend(file_size_rows(&descriptor.path, dir)?);
    }
    let modules = module_stats_rows(&descriptor.path, MODULES, &review_app)?;

    let body = stats_body(&files, &modules, &review_app)?;
    upsert_comment(ctx, issue, &descriptor.marker, &descriptor.title, &body).await?;

    info!(
        %issue,
        files = files.len(),
        modules = modules.len(),
        "stats reported"
    );
    Ok(())
}

/// Renders both tables and the review app footer.
pub fn stats_body(
    files: &[FileSizeRow],
    modules: &[ModuleStatsRow],
    review_app: &str,
) -> Result<String, ReportError> {
    let file_rows: Vec<[&str; 2]> = files.iter().map(|r| [r.file.as_str(), r.size.as_str()]).collect();
    let module_rows: Vec<[&str; 2]> = modules
        .iter()
        .map(|r| [r.module.as_str(), r.size.as_str()])
        .collect();

    Ok(format!(
        "### File sizes\n\n{}\n\n### Modules\n\n{}\n\n[View stats and visualisations on the review app]({}/stats)",
        render_table(&TABLE_HEADER, &file_rows)?,
        render_table(&TABLE_HEADER, &module_rows)?,
        review_app
    ))
}

/// Lists stylesheet and script sizes under `root/dir`, sorted by path.
///
/// Labels are relative to `root`. Source maps are skipped.
pub fn file_size_rows(root: &Path, dir: &str) -> Result<Vec<FileSizeRow>, ReportError> {
    let scan_root = root.join(dir);
    let mut rows = Vec::new();

    for entry in WalkDir::new(&scan_root).sort_by_file_name() {
        let entry = entry.map_err(|source| ReportError::Scan {
            path: scan_root.clone(),
            source,
        })?;
        if !entry.file_type().is_file() || !is_reported(entry.path()) {
            continue;
        }

        let metadata = entry.metadata().map_err(|source| ReportError::Scan {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let label = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        debug!(file = %label, bytes = metadata.len(), "measured file");
        rows.push(FileSizeRow {
            file: label,
            size: format_size(metadata.len()),
        });
    }

    Ok(rows)
}

fn is_reported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| REPORTED_EXTENSIONS.contains(&ext))
}

/// Reads each module's stats file and links it to the review app.
pub fn module_stats_rows(
    root: &Path,
    modules: &[&str],
    review_app: &str,
) -> Result<Vec<ModuleStatsRow>, ReportError> {
    modules
        .iter()
        .map(|module| {
            let stats = read_module_stats(root, module)?;
            Ok(ModuleStatsRow {
                module: format!("[{}]({}/stats/{})", module, review_app, module),
                size: format_size(stats.rendered),
            })
        })
        .collect()
}

/// Reads `root/stats/{module}.json`.
pub fn read_module_stats(root: &Path, module: &str) -> Result<ModuleStats, ReportError> {
    let path = root.join(MODULE_STATS_DIR).join(format!("{}.json", module));
    let raw = fs::read_to_string(&path).map_err(|source| ReportError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ReportError::ModuleStats { path, source })
}
