// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ITunesSettings;
use crate::domain::search::engine::{CatalogError, CatalogTransport, TransportResponse};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// iTunes Search API transport built on a pooled `reqwest::Client`.
///
/// The client applies the configured timeout to every request. Dropping the
/// future returned by [`CatalogTransport::get`] tears the request down.
#[derive(Clone)]
pub struct ITunesClient {
    client: reqwest::Client,
}

impl ITunesClient {
    pub fn new(settings: &ITunesSettings) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| CatalogError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Underlying HTTP client, shared with other loaders such as artwork.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.client
    }
}

fn map_reqwest_error(e: reqwest::Error) -> CatalogError {
    if e.is_timeout() {
        CatalogError::Timeout
    } else {
        CatalogError::Network(e.to_string())
    }
}

#[async_trait]
impl CatalogTransport for ITunesClient {
    async fn get(&self, url: &Url) -> Result<TransportResponse, CatalogError> {
        debug!(%url, "Requesting catalog search");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        debug!(status, bytes = body.len(), "Catalog search responded");
        Ok(TransportResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "itunes"
    }
}
