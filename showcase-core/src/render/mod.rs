//! Renderers
//!
//! Turn curated repository cards into output text. Renderers take anything
//! that yields [`RepoCard`]s so the REST listing and the pinned items share
//! one code path. Repository-provided text is inserted verbatim.

pub mod html;
pub mod markdown;

pub use html::render_html;
pub use markdown::{render_markdown, render_markdown_entries};

use crate::domain::RepoCard;

/// Heading shown above every listing
pub const LISTING_TITLE: &str = "My projects";

/// Render every card with `render_card` and concatenate the fragments
fn concat_cards<'a, I>(cards: I, init: String, render_card: fn(&mut String, &RepoCard<'a>)) -> String
where
    I: IntoIterator<Item = RepoCard<'a>>,
{
    cards.into_iter().fold(init, |mut out, card| {
        render_card(&mut out, &card);
        out
    })
}
