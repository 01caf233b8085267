//! Anchor extraction from EDGAR's browsable directory listing pages.
//!
//! The full-index listing pages are plain HTML: a `#main-content` region
//! holding a table whose rows link to subdirectories and files. The page
//! structure is external and can change, so a page that doesn't match is a
//! soft failure: the parser returns an empty sequence and the caller moves on.

use scraper::{Html, Selector};

/// A single link extracted from a listing table, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// The anchor's visible text, trimmed.
    pub text: String,
    /// The anchor's href target (may be relative).
    pub href: String,
}

/// Extracts the anchors of the first table inside `#main-content`.
///
/// Returns an empty vector when the content region or its table is missing.
pub fn parse_listing_anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);

    let main_sel = Selector::parse("#main-content").unwrap();
    let table_sel = Selector::parse("table").unwrap();
    let anchor_sel = Selector::parse("a").unwrap();

    let Some(main_content) = document.select(&main_sel).next() else {
        tracing::debug!("listing page has no #main-content region");
        return Vec::new();
    };
    let Some(table) = main_content.select(&table_sel).next() else {
        tracing::debug!("listing page content region has no table");
        return Vec::new();
    };

    table
        .select(&anchor_sel)
        .map(|a| Anchor {
            text: a.text().collect::<String>().trim().to_string(),
            href: a.value().attr("href").unwrap_or_default().to_string(),
        })
        .collect()
}
