use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("malformed {0}")]
    Parse(String),

    #[error("conversion failed: {0}")]
    Conversion(String),

    #[error("file error: {0}")]
    File(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ReportError {
    /// True for errors raised by the transport or a non-success response.
    ///
    /// Pipeline stages treat these as "this step produced no data" and
    /// record an absent result; they are never fatal to a discovery run.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ReportError::Request(_) | ReportError::UnexpectedStatus { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
