//! Company and filing records built up during a discovery run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Length of a CIK as EDGAR embeds it in identifier-bearing URLs.
///
/// Raw index files carry CIKs with leading zeros stripped; every URL that
/// names a CIK needs the zero-padded form.
pub const CIK_LENGTH: usize = 10;

/// Normalizes a company name for index keys and lookups.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Zero-left-pads a raw CIK to [`CIK_LENGTH`] digits.
///
/// ```rust
/// assert_eq!(reportkit::pad_cik("1849820"), "0001849820");
/// ```
pub fn pad_cik(cik: &str) -> String {
    format!("{:0>width$}", cik, width = CIK_LENGTH)
}

/// A converted filing: form type, filing date, and the persisted artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filing {
    form_type: String,
    filing_date: NaiveDate,
    artifact_path: PathBuf,
}

impl Filing {
    pub fn new(
        form_type: impl Into<String>,
        filing_date: NaiveDate,
        artifact_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            form_type: form_type.into(),
            filing_date,
            artifact_path: artifact_path.into(),
        }
    }

    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    pub fn filing_date(&self) -> NaiveDate {
        self.filing_date
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }
}

/// A company from the archive's index: display name, CIK, and the filings
/// discovered for it so far.
///
/// The form-type map is insertion-ordered and a form type is only present
/// once it has at least one filing; there is no way to create an empty entry.
#[derive(Debug, Clone)]
pub struct Company {
    name: String,
    cik: String,
    forms: Vec<(String, Vec<Filing>)>,
}

impl Company {
    pub fn new(name: impl Into<String>, cik: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cik: cik.into(),
            forms: Vec::new(),
        }
    }

    /// Normalized display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw CIK as listed in the index file (not padded).
    pub fn cik(&self) -> &str {
        &self.cik
    }

    /// Records a converted filing, creating the form-type entry on first use.
    pub fn add_filing(&mut self, filing: Filing) {
        match self
            .forms
            .iter_mut()
            .find(|(form_type, _)| form_type == filing.form_type())
        {
            Some((_, filings)) => filings.push(filing),
            None => self
                .forms
                .push((filing.form_type().to_string(), vec![filing])),
        }
    }

    /// Filings of a form type, oldest-recorded first. `None` when the
    /// company has no filing of that type.
    pub fn filings(&self, form_type: &str) -> Option<&[Filing]> {
        self.forms
            .iter()
            .find(|(ft, _)| ft == form_type)
            .map(|(_, filings)| filings.as_slice())
    }

    /// The first filing recorded for a form type, which a discovery run
    /// makes the company's latest one.
    pub fn latest_filing(&self, form_type: &str) -> Option<&Filing> {
        self.filings(form_type).and_then(|filings| filings.first())
    }
}

/// Index from normalized company name to [`Company`], rebuilt fully on each
/// discovery run.
pub type CompanyIndex = HashMap<String, Company>;
