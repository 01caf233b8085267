//! Parser for the quarterly `company.idx` file.
//!
//! The company index is a newline-delimited listing: a fixed preamble
//! (title, timestamps, column headings, separator rule) followed by one row
//! per filing, columns separated by runs of whitespace. The preamble length
//! and the column positions are assumptions about the archive's current
//! snapshot format, so both live in [`IndexFileConfig`] where a caller can
//! override them if the format shifts.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of fixed header lines at the top of a company index file.
///
/// Matches the archive's known snapshot format; override through
/// [`IndexFileConfig`] rather than editing if the format changes.
pub const COMPANY_INDEX_HEADER_LINES: usize = 10;

/// Minimum field count for a row to be considered well-formed.
pub const COMPANY_INDEX_MIN_FIELDS: usize = 5;

/// Column index of the company name within a well-formed row.
const NAME_FIELD: usize = 0;

/// Column index of the CIK within a well-formed row.
const CIK_FIELD: usize = 2;

/// Columns are separated by two or more whitespace characters; single
/// spaces occur inside company names.
static FIELD_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Configuration for [`CompanyIndexParser`].
pub struct IndexFileConfig {
    /// Header lines skipped before row parsing starts.
    pub header_lines: usize,
    /// Minimum fields per well-formed row.
    pub min_fields: usize,
    /// Stop after this many entries, if set.
    pub max_entries: Option<usize>,
}

impl Default for IndexFileConfig {
    fn default() -> Self {
        Self {
            header_lines: COMPANY_INDEX_HEADER_LINES,
            min_fields: COMPANY_INDEX_MIN_FIELDS,
            max_entries: None,
        }
    }
}

/// One row of the company index: the normalized company name and its CIK
/// exactly as listed (leading zeros stripped by the archive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIndexEntry {
    pub company_name: String,
    pub cik: String,
}

/// Parses company index text into ordered entries.
///
/// Malformed rows are skipped with a diagnostic and never fail the parse;
/// an index fetch either yields every well-formed row or (upstream, on
/// network failure) no index at all.
pub struct CompanyIndexParser {
    config: IndexFileConfig,
}

impl CompanyIndexParser {
    pub fn new(config: IndexFileConfig) -> Self {
        Self { config }
    }

    /// Extracts the well-formed entries of `content`, in file order.
    ///
    /// Company names are lowercased here so the output is directly usable
    /// as index keys; CIKs are kept verbatim.
    pub fn parse(&self, content: &str) -> Vec<CompanyIndexEntry> {
        let mut entries = Vec::new();

        for line in content.lines().skip(self.config.header_lines) {
            if let Some(max) = self.config.max_entries {
                if entries.len() >= max {
                    break;
                }
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = FIELD_SPLIT.split(line).collect();
            if fields.len() < self.config.min_fields {
                tracing::warn!(line, "skipping malformed company index line");
                continue;
            }

            entries.push(CompanyIndexEntry {
                company_name: fields[NAME_FIELD].to_lowercase(),
                cik: fields[CIK_FIELD].to_string(),
            });
        }

        entries
    }
}
