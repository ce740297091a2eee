use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frontend_ci::config::Config;
use frontend_ci::context::GithubActionContext;
use frontend_ci::github::OctocrabClient;
use frontend_ci::pipeline::{PackageLayout, package_pipeline, run_pipeline};
use frontend_ci::report::{DiffDescriptor, StatsDescriptor, report_all, report_stats};
use frontend_ci::types::IssueNumber;

/// Pull request reports and package assembly for CI
#[derive(Parser, Debug)]
#[command(name = "frontend-ci", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Post diff files as pull request comments
    Diff {
        /// Pull request number
        #[arg(long)]
        issue: u64,

        /// A diff to post, as MARKER:PATH:TITLE (repeatable)
        #[arg(long = "diff", required = true, value_name = "MARKER:PATH:TITLE")]
        diffs: Vec<DiffDescriptor>,
    },

    /// Post file and module size tables as a pull request comment
    Stats {
        /// Pull request number
        #[arg(long)]
        issue: u64,

        /// Root holding the build outputs and module stats
        #[arg(long, default_value = ".")]
        path: PathBuf,

        #[arg(long, default_value = "stats")]
        marker: String,

        #[arg(long, default_value = "Stats")]
        title: String,
    },

    /// Assemble the npm package
    Build {
        /// Package source tree
        #[arg(long)]
        source: PathBuf,

        /// Package output tree
        #[arg(long)]
        destination: PathBuf,

        /// Stats output directory, cleared before building
        #[arg(long)]
        stats: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,frontend_ci=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("command failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Diff { issue, diffs } => {
            let ctx = github_context()?;
            report_all(&ctx, IssueNumber(issue), &diffs).await?;
        }
        Command::Stats {
            issue,
            path,
            marker,
            title,
        } => {
            let ctx = github_context()?;
            let descriptor = StatsDescriptor::new(path, marker, title);
            report_stats(&ctx, IssueNumber(issue), &descriptor).await?;
        }
        Command::Build {
            source,
            destination,
            stats,
        } => {
            let layout = PackageLayout {
                source,
                destination,
                stats,
            };
            let report = run_pipeline(&package_pipeline(&layout))?;
            info!(
                steps = report.steps.len(),
                files = report.total_files(),
                "package assembled"
            );
        }
    }
    Ok(())
}

fn github_context() -> anyhow::Result<GithubActionContext<OctocrabClient>> {
    let config = Config::from_env()?;
    let client = OctocrabClient::from_token(
        config.token,
        config.api_url.as_deref(),
        config.run.repo.clone(),
    )
    .context("failed to build GitHub client")?;
    Ok(GithubActionContext::new(client, config.run, config.commit_sha))
}
