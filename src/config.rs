use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the discovery pipeline
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// User agent string for HTTP requests (required by SEC.gov fair access rules)
    pub user_agent: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Form type the pipeline looks for ("10-K" for annual reports)
    pub form_type: String,
    /// Directory converted artifacts are written to
    pub output_dir: PathBuf,
    /// Base URLs for the EDGAR services
    pub base_urls: ArchiveUrls,
}

/// Base URLs for the two EDGAR services the pipeline talks to
#[derive(Debug, Clone)]
pub struct ArchiveUrls {
    /// Base URL for EDGAR archives (directory listings, index files, filing documents)
    pub archives: String,
    /// Base URL for the EDGAR data API (submissions JSON)
    pub data: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("reportkit/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            form_type: "10-K".to_string(),
            output_dir: PathBuf::from("reports"),
            base_urls: ArchiveUrls::default(),
        }
    }
}

impl CrawlerConfig {
    /// Creates a config with a custom user agent and the standard SEC.gov URLs.
    ///
    /// # Basic usage
    ///
    /// ```rust
    /// use reportkit::CrawlerConfig;
    ///
    /// let config = CrawlerConfig::new("YourAppName contact@example.com");
    /// assert_eq!(config.form_type, "10-K");
    /// ```
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = form_type.into();
        self
    }
}

impl Default for ArchiveUrls {
    fn default() -> Self {
        Self {
            archives: "https://www.sec.gov/Archives/edgar".to_string(),
            data: "https://data.sec.gov".to_string(),
        }
    }
}
