use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned HTTP {status} for {endpoint}")]
    Status { status: u16, endpoint: String },
    #[error("response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can turn a fully formed URL into a parsed JSON document.
pub trait Transport {
    fn fetch(&self, url: &str) -> Result<Value, TransportError>;
}

/// Blocking HTTP transport backed by reqwest.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<Value, TransportError> {
        let endpoint = endpoint_name(url);
        let start = std::time::Instant::now();
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                endpoint,
            });
        }

        let body = response.text()?;
        debug!(
            endpoint = %endpoint,
            bytes = body.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "fetched"
        );
        Ok(serde_json::from_str(&body)?)
    }
}

/// Last path segment of a request URL, without the query string.
/// Used in logs and errors so the service key never leaves the process.
pub fn endpoint_name(url: &str) -> String {
    url.split('?')
        .next()
        .unwrap_or(url)
        .rsplit('/')
        .next()
        .unwrap_or("")
        .to_string()
}
