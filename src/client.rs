use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use super::config::CrawlerConfig;
use super::error::{ReportError, Result};
use super::period::ArchivePeriod;

/// HTTP client for the SEC EDGAR archive and data services.
///
/// The client sets the configured User-Agent header on every request, as
/// required by SEC.gov, and treats any non-success response as a network
/// error. There is no retry: a failed request fails the step that issued it,
/// and the pipeline decides whether that step was fatal.
///
/// # Examples
///
/// ```rust
/// # use reportkit::EdgarClient;
/// let client = EdgarClient::new("my_app/1.0 (my@email.com)")?;
/// # Ok::<(), reportkit::ReportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EdgarClient {
    pub(crate) client: reqwest::Client,

    /// Base URL for EDGAR archives
    pub(crate) archives_url: String,

    /// Base URL for the EDGAR data API
    pub(crate) data_url: String,
}

/// Addressable EDGAR resources.
///
/// Centralizes every URL the pipeline constructs, so path conventions
/// (trailing slashes on listing pages, dash stripping in accession numbers)
/// live in one place.
#[derive(Debug)]
pub(crate) enum Resource<'a> {
    /// Browsable listing of full-index years.
    YearListing,
    /// Browsable listing of quarters within a year.
    QuarterListing { year: i32 },
    /// A quarter subdirectory, probed for availability.
    QuarterDirectory { period: &'a ArchivePeriod },
    /// The company index file for a quarter.
    CompanyIndex { period: &'a ArchivePeriod },
    /// Submissions JSON for a zero-padded CIK.
    Submissions { padded_cik: &'a str },
    /// Full text submission document for a filing.
    FilingDocument {
        cik: &'a str,
        accession_number: &'a str,
    },
}

impl EdgarClient {
    /// Creates a client with the default SEC.gov base URLs.
    ///
    /// # Arguments
    ///
    /// * `user_agent` - A descriptive identifier for your application,
    ///   following the format "AppName/Version (contact@email.com)".
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::with_config(&CrawlerConfig::new(user_agent))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Config` if the user agent is malformed or the
    /// HTTP client cannot be built.
    pub fn with_config(config: &CrawlerConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| ReportError::Config(format!("Invalid user agent: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ReportError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(EdgarClient {
            client,
            archives_url: config.base_urls.archives.clone(),
            data_url: config.base_urls.data.clone(),
        })
    }

    /// Fetches text content from a URL.
    ///
    /// Any non-success status is returned as `ReportError::UnexpectedStatus`;
    /// transport failures surface as `ReportError::Request`. The caller owns
    /// the decision of whether the failure is fatal.
    pub async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::UnexpectedStatus {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Probes whether a URL responds successfully.
    ///
    /// Used for quarter subdirectory availability checks. Any failure,
    /// transport or status, means "not available".
    pub async fn is_available(&self, url: &str) -> bool {
        match self.get(url).await {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(%url, %err, "probe failed");
                false
            }
        }
    }

    pub(crate) fn url(&self, resource: Resource<'_>) -> String {
        match resource {
            Resource::YearListing => {
                format!("{}/full-index/", self.archives_url)
            }
            Resource::QuarterListing { year } => {
                format!("{}/full-index/{}/", self.archives_url, year)
            }
            Resource::QuarterDirectory { period } => {
                format!("{}/full-index/{}/", self.archives_url, period.as_path())
            }
            Resource::CompanyIndex { period } => {
                format!(
                    "{}/full-index/{}/company.idx",
                    self.archives_url,
                    period.as_path()
                )
            }
            Resource::Submissions { padded_cik } => {
                format!("{}/submissions/CIK{}.json", self.data_url, padded_cik)
            }
            Resource::FilingDocument {
                cik,
                accession_number,
            } => {
                let formatted_acc = accession_number.replace("-", "");
                format!(
                    "{}/data/{}/{}/{}.txt",
                    self.archives_url, cik, formatted_acc, accession_number
                )
            }
        }
    }

    /// Returns the base URL for EDGAR archives.
    pub fn archives_url(&self) -> &str {
        &self.archives_url
    }

    /// Returns the base URL for the EDGAR data API.
    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::{ArchivePeriod, Quarter};

    #[test]
    fn listing_urls() {
        let client = EdgarClient::new("test_agent example@example.com").unwrap();
        assert_eq!(
            client.url(Resource::YearListing),
            "https://www.sec.gov/Archives/edgar/full-index/"
        );
        assert_eq!(
            client.url(Resource::QuarterListing { year: 2024 }),
            "https://www.sec.gov/Archives/edgar/full-index/2024/"
        );
    }

    #[test]
    fn period_urls() {
        let client = EdgarClient::new("test_agent example@example.com").unwrap();
        let period = ArchivePeriod::new(2024, Quarter::Q4);
        assert_eq!(
            client.url(Resource::QuarterDirectory { period: &period }),
            "https://www.sec.gov/Archives/edgar/full-index/2024/QTR4/"
        );
        assert_eq!(
            client.url(Resource::CompanyIndex { period: &period }),
            "https://www.sec.gov/Archives/edgar/full-index/2024/QTR4/company.idx"
        );
    }

    #[test]
    fn submissions_url_uses_padded_cik() {
        let client = EdgarClient::new("test_agent example@example.com").unwrap();
        assert_eq!(
            client.url(Resource::Submissions {
                padded_cik: "0001849820"
            }),
            "https://data.sec.gov/submissions/CIK0001849820.json"
        );
    }

    #[test]
    fn filing_document_url_strips_dashes_once() {
        let client = EdgarClient::new("test_agent example@example.com").unwrap();
        let url = client.url(Resource::FilingDocument {
            cik: "723531",
            accession_number: "0000723531-24-000012",
        });
        assert_eq!(
            url,
            "https://www.sec.gov/Archives/edgar/data/723531/000072353124000012/0000723531-24-000012.txt"
        );
    }

    #[test]
    fn invalid_user_agent_is_a_config_error() {
        let result = EdgarClient::new("bad\nagent");
        assert!(matches!(result, Err(ReportError::Config(_))));
    }
}
