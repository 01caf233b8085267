//! Filing document sanitization.
//!
//! Full text submissions wrap the report body in dissemination chrome
//! (SGML headers, UU-encoded attachments) that must not reach the
//! converter. Only the document's root element subtree is kept.

use scraper::{Html, Selector};

/// Serializes the `<html>` root subtree of `raw`, or the whole parsed
/// structure when no root element is present.
pub fn extract_document_root(raw: &str) -> String {
    let document = Html::parse_document(raw);

    let root_sel = Selector::parse("html").unwrap();
    match document.select(&root_sel).next() {
        Some(root) => root.html(),
        None => document.root_element().html(),
    }
}
