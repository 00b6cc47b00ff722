use crate::config::ServiceConfig;
use crate::contract::{ContractVersion, ServiceResponse};
use crate::core::{SummaryOutcome, SummaryRequest};
use crate::error::Result;
use crate::http::{download_json, get_http_client};
use async_trait::async_trait;
use tracing::{info, warn};
use url::Url;

/// Status shown when no usable response came back
pub const NETWORK_ISSUE_MESSAGE: &str = "A network issue was encountered. Please retry.";

/// Anything able to turn a request into a classified outcome
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Issue one request and wait for its outcome. Never fails: transport
    /// problems become [`SummaryOutcome::TransportError`].
    async fn submit(&self, request: &SummaryRequest) -> SummaryOutcome;
}

/// HTTP client for the remote summarization service
#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: reqwest::Client,
    endpoint: Url,
    contract: ContractVersion,
}

impl SummaryClient {
    pub fn new(config: &ServiceConfig, contract: ContractVersion) -> Result<Self> {
        let client = get_http_client(config)?;
        let base = if config.base_url.ends_with('/') {
            Url::parse(&config.base_url)?
        } else {
            Url::parse(&format!("{}/", config.base_url))?
        };
        let endpoint = base.join(&config.endpoint)?;

        Ok(Self {
            client,
            endpoint,
            contract,
        })
    }

    pub fn contract(&self) -> ContractVersion {
        self.contract
    }

    /// Full request URL with the query string encoded
    pub fn request_url(&self, request: &SummaryRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        url
    }

    async fn fetch(&self, request: &SummaryRequest) -> Result<SummaryOutcome> {
        let envelope: ServiceResponse = download_json(&self.client, self.request_url(request)).await?;

        if !envelope.success {
            return Ok(SummaryOutcome::Failure {
                message: envelope.message,
            });
        }

        let payload = self.contract.parse_payload(envelope.response)?;
        Ok(SummaryOutcome::Success {
            message: envelope.message,
            payload,
        })
    }
}

#[async_trait]
impl Summarizer for SummaryClient {
    async fn submit(&self, request: &SummaryRequest) -> SummaryOutcome {
        match self.fetch(request).await {
            Ok(outcome) => {
                info!(
                    video = %request.video(),
                    algorithm = %request.algorithm(),
                    success = outcome.is_success(),
                    "summarization finished"
                );
                outcome
            }
            Err(e) => {
                warn!(video = %request.video(), error = %e, "summarization transport error");
                SummaryOutcome::TransportError {
                    message: NETWORK_ISSUE_MESSAGE.to_string(),
                }
            }
        }
    }
}
