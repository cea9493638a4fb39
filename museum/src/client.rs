//! HTTP client for the museum collection API.
//!
//! Two GET endpoints, both JSON:
//! - `{base}/objects` lists every object identifier.
//! - `{base}/objects/{id}` returns one object record.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::MuseumConfig;
use crate::types::{ArtworkMetadata, MuseumError, ObjectIds};

/// Read access to a collection.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    /// Every object identifier in the collection.
    async fn object_ids(&self) -> Result<Vec<u64>, MuseumError>;

    /// One object's record.
    async fn object(&self, id: u64) -> Result<ArtworkMetadata, MuseumError>;
}

pub struct MetClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetClient {
    /// Build a client with the configured base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`MuseumError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &MuseumConfig) -> Result<Self, MuseumError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| MuseumError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, MuseumError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "collection request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| MuseumError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| MuseumError::ApiRequest(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(MuseumError::ApiResponse { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| MuseumError::ApiParse(e.to_string()))
    }
}

#[async_trait]
impl CollectionApi for MetClient {
    async fn object_ids(&self) -> Result<Vec<u64>, MuseumError> {
        let listing: ObjectIds = self.get_json("/objects").await?;
        debug!(total = listing.total, loaded = listing.object_ids.len(), "object listing loaded");
        Ok(listing.object_ids)
    }

    async fn object(&self, id: u64) -> Result<ArtworkMetadata, MuseumError> {
        self.get_json(&format!("/objects/{id}")).await
    }
}
