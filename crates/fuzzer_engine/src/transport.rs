use std::time::Duration;

use fuzzer_core::{QueryPayload, ResponseOutcome};
use fuzzer_logging::{fuzz_debug, fuzz_trace};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Sent with every request, in order. Names compare case-insensitively.
    pub headers: Vec<(String, String)>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            headers: vec![(CONTENT_TYPE.as_str().to_string(), "application/json".to_string())],
        }
    }
}

impl ProbeSettings {
    /// Adds a header, replacing any existing header with the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(slot) => *slot = (name, value),
            None => self.headers.push((name, value)),
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum TransportSetupError {
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("failed to build http client: {0}")]
    Client(String),
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Posts one query. Never retries; failures are folded into the outcome.
    async fn send(&self, query: &str) -> ResponseOutcome;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    endpoint: Url,
    headers: HeaderMap,
}

impl ReqwestTransport {
    pub fn new(endpoint: Url, settings: &ProbeSettings) -> Result<Self, TransportSetupError> {
        let headers = build_header_map(&settings.headers)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportSetupError::Client(err.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            headers,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, query: &str) -> ResponseOutcome {
        let body = match serde_json::to_vec(&QueryPayload::new(query)) {
            Ok(body) => body,
            Err(err) => return ResponseOutcome::TransportError(err.to_string()),
        };
        fuzz_trace!("POST {} ({} byte body)", self.endpoint, body.len());

        let response = match self
            .client
            .post(self.endpoint.clone())
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return ResponseOutcome::TransportError(describe_reqwest_error(&err)),
        };

        let status = response.status();
        fuzz_debug!("Response status {}", status);
        if status != StatusCode::OK {
            return ResponseOutcome::HttpError(status.as_u16());
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return ResponseOutcome::TransportError(describe_reqwest_error(&err)),
        };
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(json) => ResponseOutcome::Success(json),
            Err(err) => {
                fuzz_debug!("Response body is not JSON: {}", err);
                ResponseOutcome::InvalidJson
            }
        }
    }
}

fn build_header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportSetupError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            TransportSetupError::InvalidHeader {
                name: name.clone(),
                reason: err.to_string(),
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|err| TransportSetupError::InvalidHeader {
                name: name.clone(),
                reason: err.to_string(),
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn describe_reqwest_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return format!("timeout: {err}");
    }
    if err.is_connect() {
        return format!("connection failed: {err}");
    }
    err.to_string()
}
