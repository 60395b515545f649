//! Repository source
//!
//! Where the listing pipeline gets its repositories from.

use anyhow::{Context, Result};
use async_trait::async_trait;
use showcase_client::{GitHubClient, ListReposQuery};
use showcase_core::domain::Repository;
use tracing::info;

/// Service trait for fetching the raw repository list
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetches every repository the pipeline should consider
    ///
    /// Any failure (transport, status, body) is returned as a single error;
    /// callers do not retry.
    async fn fetch(&self) -> Result<Vec<Repository>>;
}

/// Fetches one account's public repositories from the GitHub REST API
pub struct GitHubRepositorySource {
    client: GitHubClient,
    account: String,
    query: ListReposQuery,
}

impl GitHubRepositorySource {
    /// Creates a source for `account` using the given listing parameters
    pub fn new(client: GitHubClient, account: impl Into<String>, query: ListReposQuery) -> Self {
        Self {
            client,
            account: account.into(),
            query,
        }
    }
}

#[async_trait]
impl RepositorySource for GitHubRepositorySource {
    async fn fetch(&self) -> Result<Vec<Repository>> {
        info!(
            "Fetching repositories for {} from {}",
            self.account,
            self.client.base_url()
        );

        let repos = self
            .client
            .list_user_repos(&self.account, &self.query)
            .await
            .with_context(|| format!("Failed to fetch repositories for {}", self.account))?;

        info!("Fetched {} repositories", repos.len());
        Ok(repos)
    }
}
