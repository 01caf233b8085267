//! Per-company submissions metadata from the EDGAR data API.
//!
//! The submissions document carries the company's recent filings as
//! equal-length parallel arrays, one position per filing. Locating a filing
//! means scanning the `form` array for the target form type and reading the
//! other arrays at the same position.

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::{ReportError, Result};

/// A submissions document, trimmed to the filings section.
///
/// A document missing the section entirely deserializes to an empty one;
/// a company with nothing on file is an ordinary case.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub filings: FilingsData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilingsData {
    #[serde(default)]
    pub recent: RecentFilings,
}

/// The `filings.recent` parallel arrays, trimmed to the columns the
/// pipeline reads.
///
/// Fields default to empty so a submissions document with a sparse or
/// missing section deserializes to "no filings" instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentFilings {
    #[serde(rename = "accessionNumber", default)]
    pub accession_number: Vec<String>,
    #[serde(rename = "filingDate", default)]
    pub filing_date: Vec<String>,
    #[serde(default)]
    pub form: Vec<String>,
}

/// One filing read out of the parallel arrays at a single position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentFiling {
    pub form: String,
    pub accession_number: String,
    pub filing_date: String,
}

impl RecentFiling {
    /// The filing date as a date value.
    ///
    /// # Errors
    ///
    /// `ReportError::Parse` when the document carries a malformed date.
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.filing_date, "%Y-%m-%d")
            .map_err(|_| ReportError::Parse(format!("filing date `{}`", self.filing_date)))
    }
}

impl RecentFilings {
    /// Position of the first filing whose form tag exactly matches
    /// `form_type`. `None` when the company has no such filing, which is an
    /// ordinary outcome, not an error.
    pub fn position_of(&self, form_type: &str) -> Option<usize> {
        self.form.iter().position(|form| form == form_type)
    }

    /// The filing at `idx`, or `None` when any parallel array is too short
    /// (a malformed document, treated as absence).
    pub fn get(&self, idx: usize) -> Option<RecentFiling> {
        Some(RecentFiling {
            form: self.form.get(idx)?.clone(),
            accession_number: self.accession_number.get(idx)?.clone(),
            filing_date: self.filing_date.get(idx)?.clone(),
        })
    }

    /// The first filing matching `form_type`, newest first as EDGAR orders
    /// the arrays.
    pub fn latest_of_type(&self, form_type: &str) -> Option<RecentFiling> {
        self.get(self.position_of(form_type)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recent(forms: &[&str]) -> RecentFilings {
        RecentFilings {
            accession_number: forms
                .iter()
                .enumerate()
                .map(|(i, _)| format!("0000000000-24-{:06}", i))
                .collect(),
            filing_date: forms.iter().map(|_| "2024-05-31".to_string()).collect(),
            form: forms.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn finds_first_exact_match() {
        let filings = recent(&["8-K", "10-K", "10-Q", "10-K"]);
        assert_eq!(filings.position_of("10-K"), Some(1));
    }

    #[test]
    fn no_match_is_none() {
        let filings = recent(&["8-K", "10-Q"]);
        assert_eq!(filings.position_of("10-K"), None);
        assert_eq!(filings.latest_of_type("10-K"), None);
    }

    #[test]
    fn match_is_exact_not_prefix() {
        let filings = recent(&["10-K/A", "10-KT", "10-K"]);
        assert_eq!(filings.position_of("10-K"), Some(2));
    }

    #[test]
    fn unequal_arrays_yield_none() {
        let filings = RecentFilings {
            accession_number: vec!["0000723531-24-000012".to_string()],
            filing_date: Vec::new(),
            form: vec!["8-K".to_string(), "10-K".to_string()],
        };
        assert_eq!(filings.position_of("10-K"), Some(1));
        assert_eq!(filings.get(1), None);
        assert_eq!(filings.latest_of_type("10-K"), None);
    }

    #[test]
    fn latest_of_type_reads_aligned_columns() {
        let filings = recent(&["8-K", "10-K"]);
        let located = filings.latest_of_type("10-K").unwrap();
        assert_eq!(located.form, "10-K");
        assert_eq!(located.accession_number, "0000000000-24-000001");
        assert_eq!(located.filing_date, "2024-05-31");
    }

    #[test]
    fn filing_dates_parse_and_malformed_ones_are_parse_errors() {
        let filings = recent(&["10-K"]);
        let located = filings.latest_of_type("10-K").unwrap();
        assert_eq!(located.parsed_date().unwrap().to_string(), "2024-05-31");

        let bad = RecentFiling {
            form: "10-K".to_string(),
            accession_number: "0000723531-24-000012".to_string(),
            filing_date: "May 31, 2024".to_string(),
        };
        assert!(matches!(bad.parsed_date(), Err(ReportError::Parse(_))));
    }

    #[test]
    fn missing_recent_section_deserializes_empty() {
        let filings: RecentFilings = serde_json::from_str("{}").unwrap();
        assert!(filings.form.is_empty());
        assert_eq!(filings.position_of("10-K"), None);
    }
}
