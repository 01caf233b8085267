//! Period resolution and company index building.
//!
//! The archive publishes full-index data under `<year>/<quarter>`
//! subdirectories. A discovery run first walks the browsable listings to
//! find the latest quarter that actually responds, then fetches and parses
//! that quarter's company index file.
//!
//! Listing fetches fail soft: a year or quarter page that cannot be
//! fetched or parsed contributes nothing, and an archive where no
//! combination responds resolves to "no period" rather than an error.

use std::collections::hash_map::Entry;

use async_trait::async_trait;

use super::client::{EdgarClient, Resource};
use super::company::{Company, CompanyIndex};
use super::error::Result;
use super::listing::parse_listing_anchors;
use super::parsing::company_index::{CompanyIndexParser, IndexFileConfig};
use super::period::{ArchivePeriod, Quarter};
use super::traits::IndexOperations;

impl EdgarClient {
    /// Years listed in the full-index root, newest first.
    ///
    /// Keeps only anchors whose text is a whole number; the listing also
    /// carries links to index manifests and parent directories.
    async fn available_years(&self) -> Vec<i32> {
        let url = self.url(Resource::YearListing);
        let body = match self.get(&url).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(%err, "year listing fetch failed");
                return Vec::new();
            }
        };

        let mut years: Vec<i32> = parse_listing_anchors(&body)
            .into_iter()
            .filter(|anchor| {
                !anchor.text.is_empty() && anchor.text.chars().all(|c| c.is_ascii_digit())
            })
            .filter_map(|anchor| anchor.text.parse().ok())
            .collect();

        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }

    /// Quarters listed for a year, newest first.
    async fn available_quarters(&self, year: i32) -> Vec<Quarter> {
        let url = self.url(Resource::QuarterListing { year });
        let body = match self.get(&url).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(year, %err, "quarter listing fetch failed");
                return Vec::new();
            }
        };

        let mut quarters: Vec<Quarter> = parse_listing_anchors(&body)
            .into_iter()
            .filter_map(|anchor| Quarter::from_label(&anchor.text))
            .collect();

        quarters.sort_unstable_by(|a, b| b.cmp(a));
        quarters.dedup();
        quarters
    }
}

#[async_trait]
impl IndexOperations for EdgarClient {
    async fn resolve_latest_period(&self) -> Result<Option<ArchivePeriod>> {
        for year in self.available_years().await {
            for quarter in self.available_quarters(year).await {
                let period = ArchivePeriod::new(year, quarter);
                let probe_url = self.url(Resource::QuarterDirectory { period: &period });

                if self.is_available(&probe_url).await {
                    tracing::info!(%period, "resolved latest available period");
                    return Ok(Some(period));
                }
            }
        }

        tracing::info!("no year/quarter subdirectory is available");
        Ok(None)
    }

    async fn build_company_index(&self, period: &ArchivePeriod) -> Result<Option<CompanyIndex>> {
        let url = self.url(Resource::CompanyIndex { period });
        let content = match self.get(&url).await {
            Ok(content) => content,
            Err(err) if err.is_network() => {
                tracing::warn!(%period, %err, "company index fetch failed");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let parser = CompanyIndexParser::new(IndexFileConfig::default());
        let mut index = CompanyIndex::new();

        for entry in parser.parse(&content) {
            // First occurrence wins on duplicate names.
            match index.entry(entry.company_name.clone()) {
                Entry::Vacant(vacant) => {
                    vacant.insert(Company::new(entry.company_name, entry.cik));
                }
                Entry::Occupied(_) => {
                    tracing::debug!(
                        company = %entry.company_name,
                        "duplicate company name, keeping first listing"
                    );
                }
            }
        }

        tracing::info!(%period, companies = index.len(), "company index built");
        Ok(Some(index))
    }
}
