//! Repository listing endpoint

use serde::Serialize;
use showcase_core::domain::Repository;

use crate::GitHubClient;
use crate::error::Result;

/// Largest page size GitHub accepts
pub const MAX_PER_PAGE: u8 = 100;

/// Sort key for the repository listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    Updated,
    Pushed,
    FullName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Query parameters for `GET /users/{user}/repos`
///
/// Only the first page is ever requested.
#[derive(Debug, Clone, Serialize)]
pub struct ListReposQuery {
    pub sort: RepoSort,
    pub direction: SortDirection,
    pub per_page: u8,
}

impl Default for ListReposQuery {
    /// Most recently pushed first, one full page
    fn default() -> Self {
        Self {
            sort: RepoSort::Pushed,
            direction: SortDirection::Desc,
            per_page: MAX_PER_PAGE,
        }
    }
}

impl GitHubClient {
    // =============================================================================
    // Repository Listing
    // =============================================================================

    /// List public repositories owned by a user
    ///
    /// No authentication is sent. Any non-success status, transport failure,
    /// or body that does not parse as a list of repositories is an error; a
    /// single malformed record fails the whole call.
    ///
    /// # Arguments
    /// * `user` - The account login
    /// * `query` - Sort and page size parameters
    ///
    /// # Example
    /// ```no_run
    /// # use showcase_client::{GitHubClient, ListReposQuery};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GitHubClient::new("https://api.github.com");
    /// let repos = client.list_user_repos("corazza", &ListReposQuery::default()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_user_repos(
        &self,
        user: &str,
        query: &ListReposQuery,
    ) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos", self.base_url, user);
        let response = self.get(&url).query(query).send().await?;

        self.handle_response(response).await
    }
}
