//! Per-company filing operations: submissions lookup, filing location, and
//! document retrieval.

use async_trait::async_trait;

use super::client::{EdgarClient, Resource};
use super::company::pad_cik;
use super::document::extract_document_root;
use super::error::Result;
use super::submissions::{RecentFiling, Submission};
use super::traits::FilingOperations;

#[async_trait]
impl FilingOperations for EdgarClient {
    async fn submissions(&self, cik: &str) -> Result<Submission> {
        let padded = pad_cik(cik);
        let url = self.url(Resource::Submissions {
            padded_cik: &padded,
        });
        let response = self.get(&url).await?;
        Ok(serde_json::from_str::<Submission>(&response)?)
    }

    async fn locate_latest_filing(
        &self,
        cik: &str,
        form_type: &str,
    ) -> Result<Option<RecentFiling>> {
        let submission = self.submissions(cik).await?;
        Ok(submission.filings.recent.latest_of_type(form_type))
    }

    async fn fetch_filing_document(&self, cik: &str, accession_number: &str) -> Result<String> {
        let url = self.url(Resource::FilingDocument {
            cik,
            accession_number,
        });
        let raw = self.get(&url).await?;
        Ok(extract_document_root(&raw))
    }
}
