//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod pinned;
mod repos;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the repository cards into the portfolio page
    Repos {
        /// HTML page whose `github-repos` element receives the cards;
        /// prints the fragment to stdout when omitted
        #[arg(short, long)]
        page: Option<PathBuf>,
    },
    /// Write the pinned repositories as a Markdown listing
    Pinned {
        /// GitHub token (the GraphQL API requires one)
        #[arg(long, env = "GITHUB_API_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Output file
        #[arg(short, long, default_value = "pinned_repos.md")]
        output: PathBuf,
    },
    /// Fill an index template with the pinned repositories
    Index {
        /// GitHub token (the GraphQL API requires one)
        #[arg(long, env = "GITHUB_API_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Template containing the `$$$HERE$$$` placeholder
        #[arg(short, long, default_value = "indexTEMPLATE.txt")]
        template: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "index.md")]
        output: PathBuf,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// The process exit code, or an error for failures outside the pipelines
pub async fn handle_command(command: Commands, config: &Config) -> Result<ExitCode> {
    match command {
        Commands::Repos { page } => Ok(repos::handle_repos_command(page, config).await),
        Commands::Pinned { token, output } => {
            pinned::handle_pinned_command(token, &output, config).await
        }
        Commands::Index {
            token,
            template,
            output,
        } => pinned::handle_index_command(token, &template, &output, config).await,
    }
}
