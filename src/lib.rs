//! # ReportKit - 10-K discovery and conversion for SEC EDGAR
//!
//! ReportKit locates a company's most recent annual report (10-K) in the
//! SEC EDGAR full-index archive, retrieves the filing document, and converts
//! it into a Markdown artifact on disk.
//!
//! ## How a discovery run works
//!
//! - **Resolve** - walk the archive's year and quarter listings, newest
//!   first, to the latest quarter whose index subdirectory responds.
//! - **Index** - fetch that quarter's company index file and build a
//!   company-name → CIK index from it.
//! - **Per company** - look each requested company up, find its latest 10-K
//!   in the submissions API, fetch and sanitize the filing document, and
//!   render it to Markdown.
//! - **Lookup** - converted artifacts are cached in memory by CIK and served
//!   from an immutable snapshot until the next run replaces it.
//!
//! ## Requirements
//!
//! ReportKit is an async-first library and requires an async runtime such as
//! [tokio](https://tokio.rs). SEC.gov requires a descriptive User-Agent on
//! every request; supply one through [`CrawlerConfig`].
//!
//! ## Basic Usage
//!
//! ```ignore
//! use reportkit::{CrawlerConfig, Lookup, ReportPipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CrawlerConfig::new("YourAppName contact@example.com");
//!     let pipeline = ReportPipeline::new(config)?;
//!
//!     let statuses = pipeline.run_discovery("companies.txt").await?;
//!     println!("found filings for {} companies",
//!         statuses.values().filter(|found| **found).count());
//!
//!     match pipeline.lookup_artifact("Paychex Inc") {
//!         Lookup::Found(path) => println!("artifact: {}", path.display()),
//!         other => println!("{}", other.describe("Paychex Inc")),
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod company;
mod config;
mod convert;
mod document;
mod error;
mod filings;
mod index;
mod listing;
mod period;
mod pipeline;
mod submissions;
mod traits;

pub mod parsing;

pub use client::EdgarClient;
pub use company::{CIK_LENGTH, Company, CompanyIndex, Filing, normalize_name, pad_cik};
pub use config::{ArchiveUrls, CrawlerConfig};
pub use convert::{artifact_path, render_to_markdown};
pub use document::extract_document_root;
pub use error::{ReportError, Result};
pub use listing::{Anchor, parse_listing_anchors};
pub use period::{ArchivePeriod, Quarter};
pub use pipeline::{FilingOutcome, Lookup, ReportPipeline, load_worklist};
pub use submissions::{FilingsData, RecentFiling, RecentFilings, Submission};
pub use traits::{FilingOperations, IndexOperations};

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
