//! Renderer-facing repository view

use super::repository::{PinnedRepository, Repository};

/// Text shown when a repository has no description
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Text shown when GitHub could not detect a language
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// A borrowed, source-agnostic view of one repository card
///
/// Both the REST listing and the GraphQL pinned items render through this
/// type so the fallback texts are defined in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoCard<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub description: Option<&'a str>,
    pub language: Option<&'a str>,
    pub stars: u64,
}

impl<'a> RepoCard<'a> {
    /// Description, or [`NO_DESCRIPTION`] when absent or empty
    pub fn description_or_default(&self) -> &'a str {
        self.description
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
    }

    /// Language, or [`UNKNOWN_LANGUAGE`] when absent or empty
    pub fn language_or_default(&self) -> &'a str {
        self.language
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_LANGUAGE)
    }
}

impl<'a> From<&'a Repository> for RepoCard<'a> {
    fn from(repo: &'a Repository) -> Self {
        RepoCard {
            name: &repo.name,
            url: &repo.html_url,
            description: repo.description.as_deref(),
            language: repo.language.as_deref(),
            stars: repo.stargazers_count,
        }
    }
}

impl<'a> From<&'a PinnedRepository> for RepoCard<'a> {
    fn from(repo: &'a PinnedRepository) -> Self {
        RepoCard {
            name: &repo.name,
            url: &repo.url,
            description: repo.description.as_deref(),
            language: repo.primary_language.as_ref().map(|l| l.name.as_str()),
            stars: repo.stargazers.total_count,
        }
    }
}
