//! Repository list renderer
//!
//! The listing pipeline, executed once per invocation:
//! fetch -> filter -> reorder -> render -> inject.
//!
//! Every step before inject is side-effect free, and inject writes the
//! target at most once, after everything else has succeeded. A failure at
//! any step therefore leaves the page exactly as it was.

use anyhow::{Context, Result};
use showcase_core::curation::Curation;
use showcase_core::domain::RepoCard;
use showcase_core::page::replace_inner_html;
use showcase_core::render::render_html;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::service::source::RepositorySource;

/// Where the rendered listing goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTarget {
    /// Print the fragment to standard output
    Stdout,
    /// Replace the inner HTML of an element in an HTML file
    Element { page: PathBuf, element_id: String },
}

impl fmt::Display for PageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageTarget::Stdout => write!(f, "stdout"),
            PageTarget::Element { page, element_id } => {
                write!(f, "{}#{}", page.display(), element_id)
            }
        }
    }
}

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    /// Number of repositories rendered
    pub count: usize,
    /// The rendered fragment, heading included
    pub html: String,
}

/// Runs the listing pipeline against a repository source
pub struct RepositoryListRenderer<S> {
    source: S,
    curation: Curation,
}

impl<S: RepositorySource> RepositoryListRenderer<S> {
    pub fn new(source: S, curation: Curation) -> Self {
        Self { source, curation }
    }

    /// Fetch, curate and render without touching any output
    pub async fn render(&self) -> Result<Published> {
        let fetched = self.source.fetch().await?;
        let total = fetched.len();

        let repos = self.curation.apply(fetched);
        debug!(
            "Curated {} of {} fetched repositories",
            repos.len(),
            total
        );

        let html = render_html(repos.iter().map(RepoCard::from));
        Ok(Published {
            count: repos.len(),
            html,
        })
    }

    /// Run the whole pipeline and write the result to `target`
    pub async fn run(&self, target: &PageTarget) -> Result<Published> {
        let published = self.render().await?;
        inject(target, &published.html)?;

        info!("Rendered {} repositories into {}", published.count, target);
        Ok(published)
    }
}

/// Write `html` to the target; a page file is read, spliced, then written once
fn inject(target: &PageTarget, html: &str) -> Result<()> {
    match target {
        PageTarget::Stdout => {
            println!("{}", html);
            Ok(())
        }
        PageTarget::Element { page, element_id } => {
            let current = std::fs::read_to_string(page)
                .with_context(|| format!("Failed to read page: {}", page.display()))?;

            let updated = replace_inner_html(&current, element_id, html)
                .with_context(|| format!("Failed to update {}", target))?;

            std::fs::write(page, updated)
                .with_context(|| format!("Failed to write page: {}", page.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::DateTime;
    use showcase_core::domain::Repository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::config;

    const PAGE: &str = r#"<html><body>
<section id="github-repos"></section>
<footer>contact</footer>
</body></html>"#;

    struct StaticSource {
        repos: Vec<Repository>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn new(repos: Vec<Repository>) -> Self {
            Self {
                repos,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RepositorySource for StaticSource {
        async fn fetch(&self) -> Result<Vec<Repository>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.repos.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RepositorySource for FailingSource {
        async fn fetch(&self) -> Result<Vec<Repository>> {
            anyhow::bail!("network unreachable")
        }
    }

    fn repo(name: &str, pushed_secs: i64, description: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            html_url: format!("https://github.com/corazza/{}", name),
            description: description.map(str::to_string),
            language: None,
            stargazers_count: 1,
            pushed_at: DateTime::from_timestamp(pushed_secs, 0).unwrap(),
        }
    }

    fn scenario() -> Vec<Repository> {
        vec![
            repo("a", 100, Some("Plain project")),
            repo("text2task", 0, None),
            repo("pytorch", 200, Some("Fork")),
        ]
    }

    fn element_target(page: PathBuf) -> PageTarget {
        PageTarget::Element {
            page,
            element_id: config::PAGE_ELEMENT_ID.to_string(),
        }
    }

    #[tokio::test]
    async fn test_render_orders_and_excludes() {
        let renderer =
            RepositoryListRenderer::new(StaticSource::new(scenario()), config::curation());

        let published = renderer.render().await.unwrap();
        assert_eq!(published.count, 2);

        let html = &published.html;
        assert!(html.starts_with("<h3>My projects</h3>"));
        assert!(!html.contains("pytorch"));
        let text2task = html.find(">text2task<").unwrap();
        let a = html.find(">a<").unwrap();
        assert!(text2task < a);
        assert!(html.contains("<p>No description provided.</p>"));
        assert!(html.contains(r#"<span class="language">Unknown</span>"#));
    }

    #[tokio::test]
    async fn test_render_is_idempotent() {
        let renderer =
            RepositoryListRenderer::new(StaticSource::new(scenario()), config::curation());

        let first = renderer.render().await.unwrap();
        let second = renderer.render().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(renderer.source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_run_injects_into_page_element() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        std::fs::write(&page, PAGE).unwrap();

        let renderer =
            RepositoryListRenderer::new(StaticSource::new(scenario()), config::curation());
        let published = renderer.run(&element_target(page.clone())).await.unwrap();

        let written = std::fs::read_to_string(&page).unwrap();
        let expected = format!(
            "<section id=\"github-repos\">{}</section>",
            published.html
        );
        assert!(written.contains(&expected));
        assert!(written.contains("<footer>contact</footer>"));
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_page_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        let before = PAGE.replace("></section>", "><p>stale</p></section>");
        std::fs::write(&page, &before).unwrap();

        let renderer = RepositoryListRenderer::new(FailingSource, config::curation());
        let err = renderer
            .run(&element_target(page.clone()))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("network unreachable"));
        assert_eq!(std::fs::read_to_string(&page).unwrap(), before);
    }

    #[tokio::test]
    async fn test_missing_element_leaves_page_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        std::fs::write(&page, "<html><body></body></html>").unwrap();

        let renderer =
            RepositoryListRenderer::new(StaticSource::new(scenario()), config::curation());
        assert!(renderer.run(&element_target(page.clone())).await.is_err());

        assert_eq!(
            std::fs::read_to_string(&page).unwrap(),
            "<html><body></body></html>"
        );
    }

    #[tokio::test]
    async fn test_missing_page_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("missing.html");

        let renderer =
            RepositoryListRenderer::new(StaticSource::new(scenario()), config::curation());
        assert!(renderer.run(&element_target(page.clone())).await.is_err());
        assert!(!page.exists());
    }

    #[test]
    fn test_target_display() {
        let target = element_target(PathBuf::from("site/index.html"));
        assert_eq!(target.to_string(), "site/index.html#github-repos");
        assert_eq!(PageTarget::Stdout.to_string(), "stdout");
    }
}
