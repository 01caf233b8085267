//! Rendering sanitized filing markup to a persisted Markdown artifact.
//!
//! Rendering is synchronous and can be slow on large filings; the pipeline
//! runs it on a blocking thread. The destination path is deterministic for a
//! (company, filing date) pair, and concurrent renders to the same path are
//! not supported.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::company::normalize_name;
use super::error::{ReportError, Result};

/// Tags stripped during conversion; filings routinely embed styling and
/// script chrome that has no place in the artifact.
const SKIPPED_TAGS: &[&str] = &["script", "style", "nav", "iframe", "noscript", "svg"];

/// Builds the artifact path for a company's filing:
/// `<output_dir>/<normalized-name-with-dashes>-<YYYY-MM-DD>.md`.
///
/// ```rust
/// use std::path::Path;
/// # use reportkit::artifact_path;
/// let date = "2024-05-31".parse().unwrap();
/// let path = artifact_path(Path::new("reports"), "Paychex Inc", date);
/// assert_eq!(path, Path::new("reports/paychex-inc-2024-05-31.md"));
/// ```
pub fn artifact_path(output_dir: &Path, company_name: &str, filing_date: NaiveDate) -> PathBuf {
    let slug = normalize_name(company_name).replace(' ', "-");
    output_dir.join(format!("{}-{}.md", slug, filing_date.format("%Y-%m-%d")))
}

/// Renders `html` to Markdown and persists it at `dest`.
///
/// Parent directories are created as needed. The file handle is scoped to
/// this function and flushed before success is reported, so a returned `Ok`
/// means the artifact is fully on disk.
///
/// # Errors
///
/// `ReportError::Conversion` when the rendering engine rejects the markup,
/// `ReportError::File` on any filesystem failure.
pub fn render_to_markdown(html: &str, dest: &Path) -> Result<()> {
    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(SKIPPED_TAGS.to_vec())
        .build();

    let markdown = converter
        .convert(html)
        .map_err(|e| ReportError::Conversion(format!("markdown rendering failed: {}", e)))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(dest)?;
    file.write_all(markdown.as_bytes())?;
    file.flush()?;

    tracing::debug!(dest = %dest.display(), bytes = markdown.len(), "artifact written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn artifact_path_is_deterministic() {
        let path = artifact_path(Path::new("reports"), "Paychex Inc", date("2024-05-31"));
        assert_eq!(path, Path::new("reports/paychex-inc-2024-05-31.md"));

        let again = artifact_path(Path::new("reports"), "  PAYCHEX INC ", date("2024-05-31"));
        assert_eq!(path, again);
    }

    #[test]
    fn renders_markup_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("report.md");

        let html = "<html><body><h1>Annual Report</h1>\
                    <script>alert('x')</script>\
                    <p>Item 1. Business overview.</p></body></html>";
        render_to_markdown(html, &dest).unwrap();

        let markdown = fs::read_to_string(&dest).unwrap();
        assert!(markdown.contains("# Annual Report"));
        assert!(markdown.contains("Item 1. Business overview."));
        assert!(!markdown.contains("alert"));
    }

    #[test]
    fn unwritable_destination_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        // The destination's parent is a regular file, so create_dir_all fails.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let dest = blocker.join("report.md");

        let result = render_to_markdown("<p>body</p>", &dest);
        assert!(matches!(result, Err(ReportError::File(_))));
    }
}
