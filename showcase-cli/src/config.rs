//! Configuration module
//!
//! Operational settings come from flags and environment variables; the
//! portfolio's curation rules are compiled in.

use showcase_client::ListReposQuery;
use showcase_core::curation::Curation;

/// Account whose repositories are shown
pub const ACCOUNT: &str = "corazza";

/// Repositories never shown
pub const EXCLUDED_REPOS: [&str; 3] = ["corazza.github.io", "pmf-materijali", "pytorch"];

/// Repositories always shown first, in this order
pub const PRIORITY_REPOS: [&str; 8] = [
    "text2task",
    "stochastic-reward-machines",
    "snaskell",
    "game-idris",
    "min-cost-flow-minimum-quantities",
    "vision-transformer-quantization",
    "pose",
    "EfficientCNN",
];

/// Id of the page element that receives the rendered listing
pub const PAGE_ELEMENT_ID: &str = "github-repos";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the GitHub API
    pub api_url: String,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        Ok(())
    }
}

/// The portfolio's exclusion set and priority list
pub fn curation() -> Curation {
    Curation::new(EXCLUDED_REPOS, PRIORITY_REPOS)
}

/// Listing parameters: most recently pushed first, one page of 100
pub fn list_query() -> ListReposQuery {
    ListReposQuery::default()
}
