//! Service layer
//!
//! Services hold the repository listing pipeline. The data source is
//! trait-based so the pipeline can run against canned data in tests.

mod renderer;
mod source;

pub use renderer::{PageTarget, RepositoryListRenderer};
pub use source::{GitHubRepositorySource, RepositorySource};
