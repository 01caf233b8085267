//! Trait definitions organizing the pipeline's archive operations.
//!
//! The operations the pipeline needs from the archive fall into two areas:
//! resolving periods and indices, and working with a single company's
//! filings. Grouping them into traits keeps the seams explicit, makes the
//! per-company operations independently invocable (a future scheduler can
//! fan them out without touching pipeline logic), and gives tests a surface
//! to substitute.

use async_trait::async_trait;

use super::company::CompanyIndex;
use super::error::Result;
use super::period::ArchivePeriod;
use super::submissions::{RecentFiling, Submission};

/// Operations for resolving reporting periods and building the company index.
///
/// Both operations treat archive unavailability as an ordinary outcome:
/// an archive with no reachable period resolves to `None`, and an index
/// whose listing cannot be fetched is absent rather than partial.
#[async_trait]
pub trait IndexOperations {
    /// Walks years and quarters newest-first and returns the most recent
    /// period whose subdirectory responds, or `None` when nothing does.
    async fn resolve_latest_period(&self) -> Result<Option<ArchivePeriod>>;

    /// Fetches and parses the company index file for a period. `None` when
    /// the listing cannot be fetched.
    async fn build_company_index(&self, period: &ArchivePeriod) -> Result<Option<CompanyIndex>>;
}

/// Operations on a single company's filings.
#[async_trait]
pub trait FilingOperations {
    /// Retrieves the submissions document for a CIK.
    async fn submissions(&self, cik: &str) -> Result<Submission>;

    /// Finds the most recent filing of `form_type` in a company's recent
    /// submissions. `Ok(None)` when the company has none, which many
    /// legitimately don't.
    async fn locate_latest_filing(
        &self,
        cik: &str,
        form_type: &str,
    ) -> Result<Option<RecentFiling>>;

    /// Fetches a filing's full text submission and returns its sanitized
    /// document markup.
    async fn fetch_filing_document(&self, cik: &str, accession_number: &str) -> Result<String>;
}
