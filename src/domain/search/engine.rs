// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Raw HTTP response as seen by the search service.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Issue a GET against `url`. Dropping the returned future cancels the request.
    ///
    /// Non-2xx statuses are returned as responses, not errors; the caller
    /// decides which statuses it accepts.
    async fn get(&self, url: &Url) -> Result<TransportResponse, CatalogError>;

    /// Get the name of the transport
    fn name(&self) -> &'static str;
}
