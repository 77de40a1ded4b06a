use crate::domain::model::{LocationQuery, RawSkipRecord};
use crate::domain::ports::{ConfigProvider, SkipSource};
use crate::utils::error::{Result, SkipError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://app.wewantwaste.co.uk/api/skips/by-location";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Fetches skips from the by-location HTTP API.
#[derive(Debug, Clone)]
pub struct HttpSkipSource {
    endpoint: String,
    client: Client,
}

impl HttpSkipSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SkipError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.api_endpoint(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Endpoint plus `postcode` and `area` query parameters; empty values are left out.
pub fn build_request_url(endpoint: &str, query: &LocationQuery) -> Result<Url> {
    let mut url = Url::parse(endpoint).map_err(|e| SkipError::InvalidConfigValueError {
        field: "endpoint".to_string(),
        value: endpoint.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    let mut pairs = Vec::new();
    if !query.postcode.is_empty() {
        pairs.push(("postcode", query.postcode.as_str()));
    }
    if let Some(area) = query.area.as_deref().filter(|a| !a.is_empty()) {
        pairs.push(("area", area));
    }
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url)
}

#[async_trait]
impl SkipSource for HttpSkipSource {
    async fn fetch_skips(&self, query: &LocationQuery) -> Result<Vec<RawSkipRecord>> {
        let url = build_request_url(&self.endpoint, query)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(SkipError::HttpStatusError {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes", body.len());

        serde_json::from_slice::<Vec<RawSkipRecord>>(&body).map_err(|e| SkipError::DecodeError {
            message: e.to_string(),
        })
    }
}
