//! Pinned repositories via GraphQL

use showcase_core::domain::PinnedRepository;
use showcase_core::dto::graphql::{GraphQlRequest, GraphQlResponse, PinnedItemsData};
use tracing::debug;

use crate::GitHubClient;
use crate::error::{ClientError, Result};

impl GitHubClient {
    // =============================================================================
    // Pinned Repositories
    // =============================================================================

    /// Fetch the repositories a user pinned to their profile, in pin order
    ///
    /// The GraphQL API requires a token even for public data. Pinned gists
    /// are skipped.
    ///
    /// # Arguments
    /// * `login` - The account login
    /// * `token` - A GitHub personal access token
    pub async fn pinned_repositories(
        &self,
        login: &str,
        token: &str,
    ) -> Result<Vec<PinnedRepository>> {
        if token.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "a GitHub token is required for GraphQL queries".to_string(),
            ));
        }

        let url = format!("{}/graphql", self.base_url);
        let response = self
            .post(&url)
            .bearer_auth(token)
            .json(&GraphQlRequest::pinned_repositories(login))
            .send()
            .await?;

        let body: GraphQlResponse<PinnedItemsData> = self.handle_response(response).await?;

        if !body.errors.is_empty() {
            return Err(ClientError::GraphQl(
                body.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        let user = body
            .data
            .ok_or_else(|| ClientError::ParseError("GraphQL response has no data".to_string()))?
            .user
            .ok_or_else(|| ClientError::NotFound(format!("user {}", login)))?;

        let repos = user.pinned_items.into_repositories();
        debug!("Fetched {} pinned repositories for {}", repos.len(), login);

        Ok(repos)
    }
}
