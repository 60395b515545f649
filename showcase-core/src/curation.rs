//! Repository curation
//!
//! Decides which fetched repositories are shown and in what order. Both
//! steps are pure and total: they never fail and never touch the network.
//!
//! Ordering rules:
//! - every repository on the priority list precedes every repository off it
//! - priority repositories follow their position in the priority list
//! - the rest follow `pushed_at`, newest first, keeping input order on ties

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::repository::Repository;

/// Exclusion set plus priority list for one portfolio
#[derive(Debug, Clone, Default)]
pub struct Curation {
    excluded: HashSet<String>,
    priority: Vec<String>,
}

impl Curation {
    /// Create a curation from an exclusion set and an ordered priority list
    pub fn new<E, P>(excluded: E, priority: P) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
            priority: priority.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    /// Position of `name` in the priority list, if it is on it
    pub fn priority_rank(&self, name: &str) -> Option<usize> {
        self.priority.iter().position(|p| p == name)
    }

    /// Drop excluded repositories, preserving the order of the rest
    pub fn filter(&self, repos: Vec<Repository>) -> Vec<Repository> {
        repos
            .into_iter()
            .filter(|repo| !self.is_excluded(&repo.name))
            .collect()
    }

    /// Total order over repositories used by [`Curation::reorder`]
    pub fn compare(&self, a: &Repository, b: &Repository) -> Ordering {
        match (self.priority_rank(&a.name), self.priority_rank(&b.name)) {
            (Some(rank_a), Some(rank_b)) => rank_a.cmp(&rank_b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.pushed_at.cmp(&a.pushed_at),
        }
    }

    /// Sort in place; the sort is stable so push-time ties keep input order
    pub fn reorder(&self, repos: &mut [Repository]) {
        repos.sort_by(|a, b| self.compare(a, b));
    }

    /// Filter then reorder
    pub fn apply(&self, repos: Vec<Repository>) -> Vec<Repository> {
        let mut repos = self.filter(repos);
        self.reorder(&mut repos);
        repos
    }
}
