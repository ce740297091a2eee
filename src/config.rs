//! Configuration loaded from the GitHub Actions environment.
//!
//! Actions exposes the run metadata as environment variables:
//!
//! | Variable            | Required | Meaning                               |
//! |---------------------|----------|---------------------------------------|
//! | `GITHUB_TOKEN`      | yes      | Token used to post comments           |
//! | `GITHUB_REPOSITORY` | yes      | `owner/repo`                          |
//! | `GITHUB_RUN_ID`     | yes      | Numeric workflow run ID               |
//! | `GITHUB_SHA`        | yes      | Commit that triggered the run         |
//! | `GITHUB_SERVER_URL` | no       | Web root, defaults to github.com      |
//! | `GITHUB_API_URL`    | no       | API root, for GitHub Enterprise       |

use std::env;

use thiserror::Error;

use crate::context::{DEFAULT_SERVER_URL, RunContext};
use crate::types::{RepoId, RunId, Sha};

/// Errors from reading the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Settings needed to report to GitHub from a workflow run.
#[derive(Clone)]
pub struct Config {
    /// API token. Never logged.
    pub token: String,
    /// API root override, if any.
    pub api_url: Option<String>,
    /// The reporting run.
    pub run: RunContext,
    /// Commit that triggered the run.
    pub commit_sha: Sha,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("run", &self.run)
            .field("commit_sha", &self.commit_sha)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary lookup function.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let token = require("GITHUB_TOKEN")?;

        let repository = require("GITHUB_REPOSITORY")?;
        let repo = RepoId::parse(repository.trim()).ok_or_else(|| ConfigError::Invalid {
            name: "GITHUB_REPOSITORY",
            value: repository.clone(),
            reason: "expected owner/repo",
        })?;

        let run_id_raw = require("GITHUB_RUN_ID")?;
        let run_id = run_id_raw
            .trim()
            .parse::<u64>()
            .map(RunId)
            .map_err(|_| ConfigError::Invalid {
                name: "GITHUB_RUN_ID",
                value: run_id_raw.clone(),
                reason: "expected a number",
            })?;

        let commit_sha = Sha::new(require("GITHUB_SHA")?.trim());

        let server_url =
            get("GITHUB_SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let api_url = get("GITHUB_API_URL");

        Ok(Config {
            token,
            api_url,
            run: RunContext::new(repo, run_id).with_server_url(server_url),
            commit_sha,
        })
    }
}
