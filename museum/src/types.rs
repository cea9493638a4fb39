//! Collection record types and errors.

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by collection client operations.
#[derive(Debug, thiserror::Error)]
pub enum MuseumError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The HTTP request to the collection API failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The collection API returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl MuseumError {
    /// Whether another attempt might succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// The subset of an object record the study page shows.
///
/// The API sends `null` for missing strings on some records; those read as
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkMetadata {
    #[serde(rename = "objectID", default)]
    pub object_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    /// Full-resolution image URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_image: String,
    /// Thumbnail URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_image_small: String,
}

impl ArtworkMetadata {
    /// Whether the record has a thumbnail the page can display.
    #[must_use]
    pub fn has_thumbnail(&self) -> bool {
        !self.primary_image_small.trim().is_empty()
    }
}

/// Response of the bulk identifier listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ObjectIds {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "objectIDs", default, deserialize_with = "null_as_default")]
    pub object_ids: Vec<u64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
