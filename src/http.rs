use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ServiceConfig;
use crate::error::{Result, YtSumError};

/// Initialize HTTP client from the service configuration
pub fn get_http_client(config: &ServiceConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .connect_timeout(config.timeout())
        .default_headers(get_default_headers(&config.user_agent)?)
        .build()?;
    Ok(client)
}

/// Get default headers for requests
fn get_default_headers(user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Execute HTTP request, mapping timeouts separately.
///
/// The status is not checked: the service answers failures with 4xx/5xx
/// statuses that still carry a JSON envelope.
async fn execute_request(
    client: &reqwest::Client,
    method: reqwest::Method,
    url: Url,
) -> Result<reqwest::Response> {
    let response = client.request(method, url.clone()).send().await.map_err(|e| {
        if e.is_timeout() {
            YtSumError::RequestTimeout(url.to_string())
        } else {
            YtSumError::NetworkError(e)
        }
    })?;

    debug!(url = %url, status = response.status().as_u16(), "received response");
    Ok(response)
}

/// Fetch a URL and parse its body as JSON whatever the status
pub async fn download_json<T: DeserializeOwned>(client: &reqwest::Client, url: Url) -> Result<T> {
    let response = execute_request(client, reqwest::Method::GET, url).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(YtSumError::from)
}
