// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArtworkError {
    #[error("Invalid artwork URL: {0}")]
    InvalidUrl(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),
}

impl From<reqwest::Error> for ArtworkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ArtworkError::Timeout
        } else {
            ArtworkError::Network(e.to_string())
        }
    }
}

/// Fetches raw artwork bytes for a search result. No decoding happens here.
#[derive(Clone)]
pub struct ArtworkLoader {
    client: reqwest::Client,
}

impl ArtworkLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn download(&self, url: &str) -> Result<Bytes, ArtworkError> {
        if url.is_empty() {
            return Err(ArtworkError::InvalidUrl("empty".to_string()));
        }
        let url = Url::parse(url).map_err(|e| ArtworkError::InvalidUrl(e.to_string()))?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ArtworkError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        debug!(%url, bytes = bytes.len(), "Downloaded artwork");
        Ok(bytes)
    }
}

