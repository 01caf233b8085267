//! The discovery pipeline: resolve period, build index, convert filings,
//! answer lookups.
//!
//! A run is strictly sequential: one network call at a time, no overlap
//! between steps. Failures in the resolution and index phases collapse the
//! run to an empty result set; per-company failures are recorded and never
//! abort the batch.
//!
//! The company index and artifact cache are rebuilt in private state on
//! every run and published as one immutable snapshot behind an atomic
//! pointer swap, so concurrent lookups observe either the previous or the
//! new complete snapshot, never a partial rebuild.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::client::EdgarClient;
use super::company::{Company, CompanyIndex, Filing, normalize_name};
use super::config::CrawlerConfig;
use super::convert::{artifact_path, render_to_markdown};
use super::error::Result;
use super::traits::{FilingOperations, IndexOperations};

/// Outcome of the per-company locate → retrieve → convert sequence.
#[derive(Debug, Clone)]
pub enum FilingOutcome {
    /// The filing was located, retrieved, and converted to an artifact.
    Found(Filing),
    /// The company legitimately has no filing of the target form type.
    NotFound,
    /// A step failed; recorded for this company only, never fatal to the run.
    Failed(String),
}

/// Result of an artifact lookup against the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The company's converted filing artifact.
    Found(PathBuf),
    /// The company is not in the current index.
    CompanyUnknown,
    /// The company is known but has no converted filing.
    FilingUnavailable,
}

impl Lookup {
    /// User-visible description of the outcome, suitable as a response body.
    pub fn describe(&self, company_name: &str) -> String {
        match self {
            Lookup::Found(path) => format!("Filing can be found at: {}", path.display()),
            Lookup::CompanyUnknown => format!("No company found called: {}", company_name),
            Lookup::FilingUnavailable => {
                format!("Filing not found for company: {}", company_name)
            }
        }
    }
}

/// Immutable result of one discovery run.
#[derive(Debug, Default)]
struct DiscoverySnapshot {
    /// Normalized company name → company record.
    companies: CompanyIndex,
    /// CIK → artifact path; `None` marks a company known to have no
    /// matching filing, distinguishing it from "never looked at".
    artifacts: HashMap<String, Option<PathBuf>>,
}

/// The filing discovery and conversion pipeline.
///
/// # Examples
///
/// ```ignore
/// use reportkit::{CrawlerConfig, Lookup, ReportPipeline};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = CrawlerConfig::new("MyApp contact@example.com")
///         .with_output_dir("reports");
///     let pipeline = ReportPipeline::new(config)?;
///
///     let statuses = pipeline.run_discovery("companies.txt").await?;
///     for (company, found) in &statuses {
///         println!("{company}: {found}");
///     }
///
///     if let Lookup::Found(path) = pipeline.lookup_artifact("Paychex Inc") {
///         println!("artifact at {}", path.display());
///     }
///     Ok(())
/// }
/// ```
pub struct ReportPipeline {
    client: EdgarClient,
    config: CrawlerConfig,
    snapshot: RwLock<Arc<DiscoverySnapshot>>,
}

impl ReportPipeline {
    pub fn new(config: CrawlerConfig) -> Result<Self> {
        let client = EdgarClient::with_config(&config)?;
        Ok(Self {
            client,
            config,
            snapshot: RwLock::new(Arc::new(DiscoverySnapshot::default())),
        })
    }

    /// The underlying archive client.
    pub fn client(&self) -> &EdgarClient {
        &self.client
    }

    /// Reads the worklist file and runs discovery over its companies.
    pub async fn run_discovery(
        &self,
        worklist_path: impl AsRef<Path>,
    ) -> Result<HashMap<String, bool>> {
        let names = load_worklist(worklist_path)?;
        self.run(&names).await
    }

    /// Runs a full discovery pass over `company_names`, in the order given.
    ///
    /// Returns a map from normalized company name to whether a filing was
    /// found and converted. Each run fully replaces the previous index and
    /// artifact cache.
    pub async fn run(&self, company_names: &[String]) -> Result<HashMap<String, bool>> {
        tracing::info!(companies = company_names.len(), "starting discovery run");

        let Some(period) = self.client.resolve_latest_period().await? else {
            tracing::info!("archive has no available period; publishing empty index");
            return Ok(self.finish_empty(company_names));
        };

        let Some(mut companies) = self.client.build_company_index(&period).await? else {
            tracing::warn!(%period, "company index unavailable; index reset to empty");
            return Ok(self.finish_empty(company_names));
        };

        let mut artifacts: HashMap<String, Option<PathBuf>> = HashMap::new();
        let mut statuses = HashMap::new();

        for raw_name in company_names {
            let key = normalize_name(raw_name);
            let Some(company) = companies.get(&key).cloned() else {
                tracing::debug!(company = %key, "not present in the company index");
                statuses.insert(key, false);
                continue;
            };

            let found = match self.convert_company(&company).await {
                FilingOutcome::Found(filing) => {
                    artifacts.insert(
                        company.cik().to_string(),
                        Some(filing.artifact_path().to_path_buf()),
                    );
                    if let Some(entry) = companies.get_mut(&key) {
                        entry.add_filing(filing);
                    }
                    true
                }
                FilingOutcome::NotFound => {
                    tracing::debug!(company = %key, "no matching filing");
                    artifacts.insert(company.cik().to_string(), None);
                    false
                }
                FilingOutcome::Failed(reason) => {
                    tracing::warn!(company = %key, %reason, "per-company conversion failed");
                    artifacts.insert(company.cik().to_string(), None);
                    false
                }
            };
            statuses.insert(key, found);
        }

        let converted = statuses.values().filter(|status| **status).count();
        tracing::info!(converted, total = statuses.len(), "discovery run complete");

        self.publish(DiscoverySnapshot {
            companies,
            artifacts,
        });
        Ok(statuses)
    }

    /// Runs the locate → retrieve → convert sequence for one company.
    ///
    /// This is the independently invocable per-company unit; a run calls it
    /// strictly sequentially, but nothing in it depends on run state.
    pub async fn convert_company(&self, company: &Company) -> FilingOutcome {
        if company.cik().trim().is_empty() {
            return FilingOutcome::NotFound;
        }

        let located = match self
            .client
            .locate_latest_filing(company.cik(), &self.config.form_type)
            .await
        {
            Ok(Some(located)) => located,
            Ok(None) => return FilingOutcome::NotFound,
            Err(err) => return FilingOutcome::Failed(format!("submissions lookup failed: {err}")),
        };

        let html = match self
            .client
            .fetch_filing_document(company.cik(), &located.accession_number)
            .await
        {
            Ok(html) => html,
            Err(err) => return FilingOutcome::Failed(format!("document fetch failed: {err}")),
        };

        let filing_date = match located.parsed_date() {
            Ok(date) => date,
            Err(err) => return FilingOutcome::Failed(err.to_string()),
        };

        let dest = artifact_path(&self.config.output_dir, company.name(), filing_date);
        let render_dest = dest.clone();
        // Rendering is blocking and can be slow on large filings.
        let rendered =
            tokio::task::spawn_blocking(move || render_to_markdown(&html, &render_dest)).await;

        match rendered {
            Ok(Ok(())) => FilingOutcome::Found(Filing::new(located.form, filing_date, dest)),
            Ok(Err(err)) => FilingOutcome::Failed(format!("rendering failed: {err}")),
            Err(err) => FilingOutcome::Failed(format!("rendering task failed: {err}")),
        }
    }

    /// Looks a company's artifact up in the current snapshot.
    ///
    /// Reads only; a lookup never triggers a crawl.
    pub fn lookup_artifact(&self, company_name: &str) -> Lookup {
        let snapshot = self.current_snapshot();
        let key = normalize_name(company_name);

        let Some(company) = snapshot.companies.get(&key) else {
            return Lookup::CompanyUnknown;
        };
        match snapshot.artifacts.get(company.cik()) {
            Some(Some(path)) => Lookup::Found(path.clone()),
            _ => Lookup::FilingUnavailable,
        }
    }

    fn finish_empty(&self, company_names: &[String]) -> HashMap<String, bool> {
        self.publish(DiscoverySnapshot::default());
        company_names
            .iter()
            .map(|name| (normalize_name(name), false))
            .collect()
    }

    fn current_snapshot(&self) -> Arc<DiscoverySnapshot> {
        match self.snapshot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    fn publish(&self, snapshot: DiscoverySnapshot) {
        let snapshot = Arc::new(snapshot);
        let mut guard = match self.snapshot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = snapshot;
    }
}

/// Reads a worklist file: one company name per line, blank lines skipped.
pub fn load_worklist(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
