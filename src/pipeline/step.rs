//! Build steps as data.
//!
//! A step describes a file system operation without executing it. The runner
//! in `super::runner` executes steps in order.

use std::path::{Path, PathBuf};

/// Which files a copy step takes, by file-name suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    /// A file must end with one of these. Empty means every file.
    pub include: Vec<String>,
    /// A file ending with any of these is skipped, even if included.
    pub exclude: Vec<String>,
}

impl FileFilter {
    /// Takes every file.
    pub fn all() -> Self {
        FileFilter::default()
    }

    /// Takes files whose names end with any of `suffixes`.
    pub fn suffixes(suffixes: &[&str]) -> Self {
        FileFilter {
            include: suffixes.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
        }
    }

    /// Additionally skips files whose names end with any of `suffixes`.
    pub fn excluding(mut self, suffixes: &[&str]) -> Self {
        self.exclude.extend(suffixes.iter().map(|s| s.to_string()));
        self
    }

    /// Returns true if the file at `path` passes the filter.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let included =
            self.include.is_empty() || self.include.iter().any(|s| name.ends_with(s.as_str()));
        included && !self.exclude.iter().any(|s| name.ends_with(s.as_str()))
    }
}

/// A single pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStep {
    /// Remove a directory and everything in it. A missing directory is fine.
    Clean { name: String, dir: PathBuf },

    /// Copy matching files from one tree to another, keeping relative paths.
    Copy {
        name: String,
        from: PathBuf,
        to: PathBuf,
        filter: FileFilter,
    },
}

impl BuildStep {
    pub fn clean(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        BuildStep::Clean {
            name: name.into(),
            dir: dir.into(),
        }
    }

    pub fn copy(
        name: impl Into<String>,
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        filter: FileFilter,
    ) -> Self {
        BuildStep::Copy {
            name: name.into(),
            from: from.into(),
            to: to.into(),
            filter,
        }
    }

    /// The step's name, as logged and reported.
    pub fn name(&self) -> &str {
        match self {
            BuildStep::Clean { name, .. } | BuildStep::Copy { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_include_takes_everything() {
        let filter = FileFilter::all();
        assert!(filter.matches(Path::new("a/b/icon.png")));
        assert!(filter.matches(Path::new("x")));
    }

    #[test]
    fn include_and_exclude_by_suffix() {
        let filter = FileFilter::suffixes(&[".mjs", ".js"]).excluding(&[".test.mjs"]);
        assert!(filter.matches(Path::new("components/button/button.mjs")));
        assert!(filter.matches(Path::new("init.js")));
        assert!(!filter.matches(Path::new("components/button/button.test.mjs")));
        assert!(!filter.matches(Path::new("components/button/template.njk")));
    }

    #[test]
    fn step_name_is_exposed() {
        assert_eq!(BuildStep::clean("clean:stats", "stats").name(), "clean:stats");
    }
}
