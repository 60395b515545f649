//! Repository listing command
//!
//! The terminal handler of the listing pipeline: a failure anywhere is
//! logged once and the page is left as it was.

use colored::*;
use showcase_client::GitHubClient;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use crate::config::{self, Config};
use crate::service::{GitHubRepositorySource, PageTarget, RepositoryListRenderer, RepositorySource};

/// Handle the repos command
///
/// # Arguments
/// * `page` - HTML page to update, or `None` for stdout
/// * `config` - The CLI configuration
pub async fn handle_repos_command(page: Option<PathBuf>, config: &Config) -> ExitCode {
    let client = GitHubClient::new(&config.api_url);
    let source = GitHubRepositorySource::new(client, config::ACCOUNT, config::list_query());

    let target = match page {
        Some(page) => PageTarget::Element {
            page,
            element_id: config::PAGE_ELEMENT_ID.to_string(),
        },
        None => PageTarget::Stdout,
    };

    publish(&RepositoryListRenderer::new(source, config::curation()), &target).await
}

/// Run the pipeline, reporting the outcome instead of propagating it
async fn publish<S: RepositorySource>(
    renderer: &RepositoryListRenderer<S>,
    target: &PageTarget,
) -> ExitCode {
    match renderer.run(target).await {
        Ok(published) => {
            if let PageTarget::Element { .. } = target {
                println!(
                    "{} {} repositories into {}",
                    "Rendered".green().bold(),
                    published.count,
                    target.to_string().cyan()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error rendering GitHub repos: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
