mod commands;
mod config;
mod display;
mod error;
mod github;
mod selector;

use clap::Parser;
use commands::pulls::Report;
use config::{load_config, Overrides, Settings};
use error::{GitfullstoryError, Result};
use github::{ClientOptions, GithubClient};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitfullstory",
    version,
    about = "command-line utility for seeing your team's open pull requests"
)]
pub struct Cli {
    /// Your personal access token for GitHub (falls back to GITHUB_TOKEN)
    #[arg(
        long = "github_token",
        visible_alias = "gt",
        env = "GITHUB_ACCESS_TOKEN",
        hide_env_values = true
    )]
    github_token: Option<String>,

    /// Comma separated list of GitHub organizations to search, otherwise all of yours
    #[arg(long, env = "GITFULLSTORY_ORGS")]
    orgs: Option<String>,

    /// Comma separated list of repositories to keep, otherwise all
    #[arg(long, env = "GITFULLSTORY_PROJECTS")]
    projects: Option<String>,

    /// Comma separated list of pull request authors to report, otherwise all
    #[arg(long, env = "GITFULLSTORY_USERS")]
    users: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise
    #[arg(long = "api_url", env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Per-request timeout in seconds (0 disables it)
    #[arg(long, env = "GITFULLSTORY_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Skip organizations whose repositories cannot be listed instead of aborting
    #[arg(long = "continue_on_error", env = "GITFULLSTORY_CONTINUE_ON_ERROR")]
    continue_on_error: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Show verbose output (page progress, rate limits)
    #[arg(long)]
    verbose: bool,
}

/// `RUST_LOG` replaces the default `gitfullstory=info` filter; `--verbose`
/// always adds debug output for this crate on top.
fn init_logging(verbose: bool) -> Result<()> {
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gitfullstory={}", Level::INFO)));
    if verbose {
        let directive: Directive = format!("gitfullstory={}", Level::DEBUG)
            .parse()
            .map_err(|e| GitfullstoryError::Config(format!("Invalid log directive: {e}")))?;
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;
    let overrides = Overrides {
        token: cli.github_token,
        fallback_token: std::env::var("GITHUB_TOKEN").ok(),
        orgs: cli.orgs,
        projects: cli.projects,
        users: cli.users,
    };
    let settings = Settings::resolve(overrides, config)?;

    let options = ClientOptions {
        api_url: cli.api_url.filter(|url| !url.trim().is_empty()),
        timeout: (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout)),
        verbose: cli.verbose,
    };
    let client = GithubClient::new(&settings.token, &options)?;

    let mut report = Report::new(std::io::stdout(), cli.json);
    commands::pulls::run(&client, &settings, cli.continue_on_error, &mut report).await?;
    report.finish()?;

    client.log_rate_limit_if_verbose().await;

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        display::error(&e.to_string());
        std::process::exit(e.exit_code());
    }

    let result = tokio::select! {
        result = run(cli) => result,
        _ = tokio::signal::ctrl_c() => Err(GitfullstoryError::Interrupted),
    };

    if let Err(e) = result {
        display::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
