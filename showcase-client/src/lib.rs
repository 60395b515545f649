//! Showcase GitHub Client
//!
//! A small, type-safe HTTP client for the parts of the GitHub API the
//! portfolio renderer needs: the public repository listing (REST) and a
//! user's pinned repositories (GraphQL).
//!
//! # Example
//!
//! ```no_run
//! use showcase_client::{GitHubClient, ListReposQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GitHubClient::new("https://api.github.com");
//!
//!     let repos = client
//!         .list_user_repos("corazza", &ListReposQuery::default())
//!         .await?;
//!
//!     println!("Fetched {} repositories", repos.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod pinned;
mod repos;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use repos::{ListReposQuery, RepoSort, SortDirection};

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Public GitHub API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub rejects requests that carry no user agent
const CLIENT_USER_AGENT: &str = "showcase";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// HTTP client for the GitHub API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// Base URL of the API (e.g., "https://api.github.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl GitHubClient {
    /// Create a new GitHub client
    ///
    /// # Arguments
    /// * `base_url` - The API root (e.g., "https://api.github.com")
    ///
    /// # Example
    /// ```
    /// use showcase_client::GitHubClient;
    ///
    /// let client = GitHubClient::new("https://api.github.com");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new GitHub client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use showcase_client::GitHubClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GitHubClient::with_client("https://api.github.com", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a GET request carrying the headers GitHub expects
    fn get(&self, url: &str) -> RequestBuilder {
        debug!("GET {}", url);
        self.client
            .get(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
    }

    /// Start a POST request carrying the headers GitHub expects
    fn post(&self, url: &str) -> RequestBuilder {
        debug!("POST {}", url);
        self.client
            .post(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new(DEFAULT_API_URL);
        assert_eq!(client.base_url(), "https://api.github.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = GitHubClient::new("https://api.github.com/");
        assert_eq!(client.base_url(), "https://api.github.com");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = GitHubClient::with_client("http://localhost:9000", http_client);
        assert_eq!(client.base_url(), "http://localhost:9000");
    }
}
