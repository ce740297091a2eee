//! The explicit context threaded through every reporting operation.
//!
//! Nothing in the crate reads the GitHub Actions environment except
//! `crate::config`; everything downstream receives a `GithubActionContext`.

use crate::types::{RepoId, RunId, Sha};

/// Default web root for run links when `GITHUB_SERVER_URL` is unset.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Identifies the workflow run that is reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Repository the workflow runs in.
    pub repo: RepoId,
    /// The workflow run ID.
    pub run_id: RunId,
    /// Web root of the GitHub instance, without a trailing slash.
    pub server_url: String,
}

impl RunContext {
    pub fn new(repo: RepoId, run_id: RunId) -> Self {
        RunContext {
            repo,
            run_id,
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }

    /// Sets the web root. A trailing slash is dropped.
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        let url: String = server_url.into();
        self.server_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Link to the workflow run page.
    pub fn run_url(&self) -> String {
        format!(
            "{}/{}/{}/actions/runs/{}",
            self.server_url, self.repo.owner, self.repo.repo, self.run_id
        )
    }

    /// Link to the artifacts section of the workflow run page.
    pub fn artifacts_url(&self) -> String {
        format!("{}#artifacts", self.run_url())
    }
}

/// Everything an operation needs to talk to GitHub on behalf of a run.
#[derive(Debug, Clone)]
pub struct GithubActionContext<G> {
    /// Interpreter for GitHub effects, usually an `OctocrabClient`.
    pub client: G,
    /// The reporting workflow run.
    pub run: RunContext,
    /// Commit that triggered the run.
    pub commit_sha: Sha,
}

impl<G> GithubActionContext<G> {
    pub fn new(client: G, run: RunContext, commit_sha: Sha) -> Self {
        GithubActionContext {
            client,
            run,
            commit_sha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_url_uses_server_owner_repo_and_id() {
        let run = RunContext::new(RepoId::new("alphagov", "govuk-frontend"), RunId(99));
        assert_eq!(
            run.run_url(),
            "https://github.com/alphagov/govuk-frontend/actions/runs/99"
        );
    }

    #[test]
    fn artifacts_url_targets_artifacts_anchor() {
        let run = RunContext::new(RepoId::new("o", "r"), RunId(1))
            .with_server_url("https://ghe.example.com/");
        assert_eq!(
            run.artifacts_url(),
            "https://ghe.example.com/o/r/actions/runs/1#artifacts"
        );
    }
}
