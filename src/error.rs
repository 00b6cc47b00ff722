use thiserror::Error;

#[derive(Error, Debug)]
pub enum YtSumError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Request timeout for URL: {0}")]
    RequestTimeout(String),

    #[error("Invalid header value: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    #[error("Selection incomplete: URL, percentage and algorithm are all required")]
    SelectionIncomplete,

    #[error("Invalid percentage: {0}")]
    InvalidPercentage(String),

    #[error("Invalid algorithm position: {0}")]
    InvalidAlgorithm(usize),

    #[error("A summarization request is already in flight")]
    RequestInFlight,

    #[error("No summarization request is pending")]
    NoPendingRequest,

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Payload does not match contract {version}: {reason}")]
    ContractMismatch { version: String, reason: String },

    #[error("No successful summary to download yet")]
    NoDownloadAvailable,

    #[error("Download is disabled for this front-end")]
    DownloadDisabled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid service URL: {0}")]
    ServiceUrlError(#[from] url::ParseError),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, YtSumError>;
