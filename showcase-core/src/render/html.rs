//! HTML card rendering

use super::{LISTING_TITLE, concat_cards};
use crate::domain::RepoCard;

/// Render the full listing: a heading followed by one `<article>` per card
///
/// The output is deterministic for a given input, so re-rendering an
/// unchanged listing yields a byte-identical string.
pub fn render_html<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = RepoCard<'a>>,
{
    concat_cards(cards, format!("<h3>{}</h3>", LISTING_TITLE), write_card)
}

fn write_card(out: &mut String, card: &RepoCard<'_>) {
    out.push_str(&format!(
        r#"
<article class="repo-card">
    <h4><a href="{url}" target="_blank">{name}</a></h4>
    <p>{description}</p>
    <footer>
        <span class="language">{language}</span>
        <span class="stars">⭐ {stars}</span>
    </footer>
</article>"#,
        url = card.url,
        name = card.name,
        description = card.description_or_default(),
        language = card.language_or_default(),
        stars = card.stars,
    ));
}
