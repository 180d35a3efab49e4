//! Static site rendering for the movie catalog.
//!
//! Pure string work: the caller supplies a complete catalog snapshot and
//! a template, and gets the finished page back. File I/O stays with the
//! caller. The template contract is two substitution slots,
//! `__TEMPLATE_TITLE__` and `__TEMPLATE_MOVIE_GRID__`.

use movielog_core::{Catalog, MovieEntry};

/// Built-in page template, used when no override file is supplied.
pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/index_template.html");

/// Page heading used by the CLI.
pub const DEFAULT_PAGE_TITLE: &str = "My Movie App";

/// Shown for movies OMDb had no poster for.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/200x300?text=No+Image";

const TITLE_SLOT: &str = "__TEMPLATE_TITLE__";
const GRID_SLOT: &str = "__TEMPLATE_MOVIE_GRID__";

/// Minimal HTML escaping for text and attribute positions.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One movie card for the template grid.
fn movie_card(title: &str, entry: &MovieEntry) -> String {
    let poster = match entry.poster_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => PLACEHOLDER_POSTER,
    };
    let title = escape_html(title);
    format!(
        concat!(
            "<div class=\"movie\">",
            "<img class=\"movie-poster\" src=\"{poster}\" alt=\"Poster for {title}\">",
            "<div class=\"movie-title\">{title}</div>",
            "<div class=\"movie-year\">{year}</div>",
            "</div>"
        ),
        poster = escape_html(poster),
        title = title,
        year = entry.year,
    )
}

/// Renders the full page from a template and a catalog snapshot.
///
/// An empty catalog renders a short placeholder paragraph instead of the
/// card grid.
#[must_use]
pub fn render_index(template: &str, page_title: &str, catalog: &Catalog) -> String {
    let grid = if catalog.is_empty() {
        "<p>No movies yet. Add some in the app.</p>".to_string()
    } else {
        catalog
            .iter()
            .map(|(title, entry)| movie_card(title, entry))
            .collect::<Vec<_>>()
            .join("\n")
    };

    template
        .replace(TITLE_SLOT, &escape_html(page_title))
        .replace(GRID_SLOT, &grid)
}
