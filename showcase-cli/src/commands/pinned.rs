//! Pinned repository command handlers
//!
//! Handles the Markdown listings built from a profile's pinned
//! repositories: a standalone listing and a filled-in index template.

use anyhow::{Context, Result};
use colored::*;
use showcase_client::{ClientError, GitHubClient};
use showcase_core::domain::{PinnedRepository, RepoCard};
use showcase_core::page::substitute_placeholder;
use showcase_core::render::{render_markdown, render_markdown_entries};
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};

use crate::config::{self, Config};

const MISSING_TOKEN: &str = "Please set the GITHUB_API_TOKEN environment variable.";

/// Handle the pinned command
///
/// Prints the listing and writes it to `output`.
pub async fn handle_pinned_command(
    token: Option<String>,
    output: &Path,
    config: &Config,
) -> Result<ExitCode> {
    let Some(token) = non_empty(token) else {
        println!("{}", MISSING_TOKEN.yellow());
        return Ok(ExitCode::FAILURE);
    };

    let pinned = fetch_pinned(config, &token).await?;
    let markdown = render_markdown(pinned.iter().map(RepoCard::from));

    emit(&markdown, output)?;
    Ok(ExitCode::SUCCESS)
}

/// Handle the index command
///
/// Substitutes the listing entries into `template`, prints the result and
/// writes it to `output`. The template is read before anything is fetched.
pub async fn handle_index_command(
    token: Option<String>,
    template: &Path,
    output: &Path,
    config: &Config,
) -> Result<ExitCode> {
    let Some(token) = non_empty(token) else {
        println!("{}", MISSING_TOKEN.yellow());
        return Ok(ExitCode::FAILURE);
    };

    let template_content = std::fs::read_to_string(template)
        .with_context(|| format!("Failed to read template: {}", template.display()))?;

    let pinned = fetch_pinned(config, &token).await?;
    let entries = render_markdown_entries(pinned.iter().map(RepoCard::from));
    let index = substitute_placeholder(&template_content, &entries)
        .with_context(|| format!("Invalid template: {}", template.display()))?;

    emit(&index, output)?;
    Ok(ExitCode::SUCCESS)
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

async fn fetch_pinned(config: &Config, token: &str) -> Result<Vec<PinnedRepository>> {
    let client = GitHubClient::new(&config.api_url);
    let pinned = match client.pinned_repositories(config::ACCOUNT, token).await {
        Ok(pinned) => pinned,
        Err(e) => {
            if let Some(hint) = failure_hint(&e) {
                warn!("{}", hint);
            }
            return Err(e).with_context(|| {
                format!("Failed to fetch pinned repositories for {}", config::ACCOUNT)
            });
        }
    };

    info!("Fetched {} pinned repositories", pinned.len());
    Ok(pinned)
}

/// What the user can do about a failed GraphQL call, if anything
fn failure_hint(err: &ClientError) -> Option<&'static str> {
    if err.is_not_found() {
        Some("The configured GitHub account does not exist")
    } else if err.is_client_error() {
        Some("GitHub rejected the request: check that GITHUB_API_TOKEN is valid and not rate limited")
    } else if err.is_server_error() {
        Some("GitHub is unavailable; try again later")
    } else {
        None
    }
}

/// Print `content` and write it to `output`
fn emit(content: &str, output: &Path) -> Result<()> {
    println!("{}", content);

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    info!("Wrote {}", output.display());
    Ok(())
}
