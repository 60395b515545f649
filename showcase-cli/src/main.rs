//! Showcase CLI
//!
//! Renders a GitHub account's repositories into portfolio pages:
//! - `repos`: HTML cards injected into the page's `github-repos` element
//! - `pinned`: Markdown listing of the profile's pinned repositories
//! - `index`: the same listing substituted into an index template
//!
//! Logs go to stderr so rendered output on stdout can be piped.

mod commands;
mod config;
mod service;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use showcase_client::DEFAULT_API_URL;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Portfolio repository listing renderer", long_about = None)]
struct Cli {
    /// GitHub API root
    #[arg(long, env = "SHOWCASE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showcase_cli=info,showcase_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
