//! HTTP metadata backend.
//!
//! Talks JSON to the metadata service:
//! `GET {base_url}/genomes/{genome_id}/regions/{region_name}`.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::error::{GatewayError, Result};

use super::backend::{MetadataBackend, RegionDescriptor};
use super::config::MetadataConfig;

/// Metadata backend reached over HTTP.
///
/// Each lookup is a single request; nothing is retried.
pub struct HttpMetadataBackend {
    client: Client,
    base_url: Url,
}

impl HttpMetadataBackend {
    /// Create a backend with default settings (`http://localhost:50051`).
    pub fn new() -> Result<Self> {
        Self::with_config(MetadataConfig::default())
    }

    /// Create a backend configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::with_config(MetadataConfig::from_env()?)
    }

    /// Create with custom configuration.
    pub fn with_config(config: MetadataConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            GatewayError::Config(format!("Invalid backend URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::Config(format!(
                "Backend URL cannot be used as a base: '{}'",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Build the lookup URL, percent-encoding both path segments.
    pub fn region_url(&self, genome_id: &str, region_name: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::Config(format!(
                    "Backend URL cannot be used as a base: '{}'",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["genomes", genome_id, "regions", region_name]);
        Ok(url)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}

impl MetadataBackend for HttpMetadataBackend {
    async fn describe_region(&self, genome_id: &str, region_name: &str) -> Result<RegionDescriptor> {
        let url = self.region_url(genome_id, region_name)?;
        tracing::debug!(%url, "requesting region description");

        let response = self
            .client
            .get(url)
            .headers(self.build_headers())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(RegionDescriptor::missing());
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GatewayError::Backend {
                genome_id: genome_id.to_string(),
                region_name: region_name.to_string(),
                message: format!("status {}: {}", status, error_text.trim()),
            });
        }

        let body: RegionResponse = response.json().await?;
        Ok(body.into_descriptor())
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Region description as returned by the metadata service.
///
/// The service answers an unknown region either with 404 or with an empty
/// object, so every field is optional.
#[derive(Debug, Default, Deserialize)]
struct RegionResponse {
    #[serde(default)]
    length: Option<u64>,
    #[serde(default)]
    chromosomal: bool,
}

impl RegionResponse {
    fn into_descriptor(self) -> RegionDescriptor {
        match self.length {
            Some(length) => RegionDescriptor::found(length, self.chromosomal),
            None => RegionDescriptor::missing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_url_encodes_segments() {
        let backend = HttpMetadataBackend::with_config(
            MetadataConfig::default().with_base_url("http://metadata.test/api/"),
        )
        .unwrap();

        let url = backend.region_url("a7335667-93e7", "chr 1/x").unwrap();
        assert_eq!(
            url.as_str(),
            "http://metadata.test/api/genomes/a7335667-93e7/regions/chr%201%2Fx"
        );
    }

    #[test]
    fn test_region_url_without_path() {
        let backend = HttpMetadataBackend::new().unwrap();
        let url = backend.region_url("g1", "1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:50051/genomes/g1/regions/1");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let result = HttpMetadataBackend::with_config(
            MetadataConfig::default().with_base_url("not a url"),
        );
        assert!(matches!(result, Err(GatewayError::Config(_))));

        let result = HttpMetadataBackend::with_config(
            MetadataConfig::default().with_base_url("mailto:someone@example.org"),
        );
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_response_decoding() {
        let found: RegionResponse =
            serde_json::from_str(r#"{"name": "1", "length": 248956422, "chromosomal": true}"#)
                .unwrap();
        assert_eq!(found.into_descriptor(), RegionDescriptor::found(248956422, true));

        let empty: RegionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.into_descriptor(), RegionDescriptor::missing());
    }
}
