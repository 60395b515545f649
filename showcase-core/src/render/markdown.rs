//! Markdown listing rendering
//!
//! Used for README-style pages where HTML cards do not fit.

use super::{LISTING_TITLE, concat_cards};
use crate::domain::RepoCard;

/// Render the entries with a `## My projects` heading
pub fn render_markdown<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = RepoCard<'a>>,
{
    concat_cards(cards, format!("## {}\n\n", LISTING_TITLE), write_entry)
}

/// Render the entries alone, for substitution into a template
pub fn render_markdown_entries<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = RepoCard<'a>>,
{
    concat_cards(cards, String::new(), write_entry)
}

fn write_entry(out: &mut String, card: &RepoCard<'_>) {
    out.push_str(&format!(
        "- **[{name}]({url})**  \n  {description}  \n  _Language: {language} | ⭐ {stars}_\n\n",
        name = card.name,
        url = card.url,
        description = card.description_or_default(),
        language = card.language_or_default(),
        stars = card.stars,
    ));
}
