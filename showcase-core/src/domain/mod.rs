//! Core domain types
//!
//! Repository records exactly as the GitHub API hands them to us, plus the
//! renderer-facing [`RepoCard`] view that both record kinds collapse into.

pub mod card;
pub mod repository;

pub use card::RepoCard;
pub use repository::{PinnedRepository, PrimaryLanguage, Repository, Stargazers};
