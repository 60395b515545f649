//! Repository domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by `GET /users/{user}/repos`
///
/// Only the fields the renderer consumes are kept; everything else in the
/// REST payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name, unique per account
    pub name: String,

    /// Link to the repository's web page
    pub html_url: String,

    pub description: Option<String>,

    /// Primary language as detected by GitHub
    pub language: Option<String>,

    pub stargazers_count: u64,

    /// Time of the most recent push to any branch
    pub pushed_at: DateTime<Utc>,
}

/// A pinned repository node from the GraphQL `pinnedItems` connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedRepository {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub stargazers: Stargazers,
    pub primary_language: Option<PrimaryLanguage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stargazers {
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryLanguage {
    pub name: String,
}
