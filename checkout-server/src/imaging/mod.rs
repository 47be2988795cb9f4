//! Image resolution client
//!
//! Order lines persist a stored asset id, not a URL. The read path resolves
//! each asset id against the object storage service's metadata endpoint and
//! substitutes the returned public URL into the response.
//!
//! "Service unavailable" is kept distinct from "asset not found": the
//! orchestrator fails the whole read fast on the former, and both are
//! reported with different HTTP statuses.

use async_trait::async_trait;
use http::StatusCode;
use serde::Deserialize;
use shared::AppError;
use std::time::Duration;
use thiserror::Error;

/// Image resolution failure modes
#[derive(Debug, Error)]
pub enum ImageError {
    /// Transport error, timeout or non-404 upstream failure
    #[error("object storage service unavailable")]
    Unavailable,

    /// The asset id does not exist at the storage service
    #[error("image asset not found: {0}")]
    NotFound(String),
}

/// Resolves a stored asset id to a publicly fetchable URL
#[async_trait]
pub trait ImageResolver: Send + Sync {
    async fn resolve(&self, asset_id: &str) -> Result<String, ImageError>;
}

/// Asset metadata returned by the storage service
#[derive(Debug, Deserialize)]
struct AssetInfo {
    secure_url: String,
}

/// HTTP implementation backed by the object storage service's admin API
#[derive(Clone)]
pub struct HttpImageResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpImageResolver {
    /// `timeout` bounds each metadata request on the client itself, in
    /// addition to the orchestrator's outer enrichment timeout. Connection
    /// setup is capped separately so a dead host fails fast.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(2)))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build image client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ImageResolver for HttpImageResolver {
    async fn resolve(&self, asset_id: &str) -> Result<String, ImageError> {
        let url = format!(
            "{}/assets/{}",
            self.base_url.trim_end_matches('/'),
            asset_id
        );

        let resp = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(asset_id = %asset_id, error = %e, "Asset metadata request failed");
            ImageError::Unavailable
        })?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ImageError::NotFound(asset_id.to_string()));
        }

        if !resp.status().is_success() {
            tracing::warn!(
                asset_id = %asset_id,
                status = %resp.status(),
                "Asset metadata request returned non-success status"
            );
            return Err(ImageError::Unavailable);
        }

        let info: AssetInfo = resp.json().await.map_err(|e| {
            tracing::warn!(asset_id = %asset_id, error = %e, "Malformed asset metadata body");
            ImageError::Unavailable
        })?;

        Ok(info.secure_url)
    }
}
