// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{Category, SearchResult, SearchState};
use crate::domain::search::engine::{CatalogError, CatalogTransport};
use crate::domain::search::parser::parse_body;
use crate::domain::search::query::build_search_url;
use crate::utils::collation::CollationKey;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Monotonic identifier of a search request issued by one service.
pub type RequestId = u64;

/// Delivered once for every request that was not superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCompletion {
    pub request_id: RequestId,
    pub success: bool,
}

pub type CompletionReceiver = mpsc::UnboundedReceiver<SearchCompletion>;

struct Shared {
    state: SearchState,
    generation: RequestId,
}

struct Inner {
    shared: Mutex<Shared>,
    completions: mpsc::UnboundedSender<SearchCompletion>,
}

impl Inner {
    /// Publish the outcome of `request_id` unless a newer request exists.
    /// The generation check and the publish happen under one lock, so a stale
    /// outcome can never be observed.
    fn finish(
        &self,
        request_id: RequestId,
        outcome: Result<Vec<SearchResult>, CatalogError>,
    ) -> bool {
        let (state, success) = match outcome {
            Ok(results) if results.is_empty() => (SearchState::NoResults, true),
            Ok(mut results) => {
                results.sort_by_cached_key(|r| CollationKey::new(&r.artist_name));
                (SearchState::Results(results), true)
            }
            Err(e) => {
                warn!(request_id, error = %e, "Search request failed");
                (SearchState::NotSearchedYet, false)
            }
        };

        let mut shared = self.shared.lock();
        if shared.generation != request_id {
            debug!(
                request_id,
                current = shared.generation,
                "Discarding superseded search response"
            );
            return false;
        }

        shared.state = state;
        // The receiver may be gone if the front end has shut down.
        let _ = self.completions.send(SearchCompletion {
            request_id,
            success,
        });
        true
    }
}

/// Runs at most one catalog search at a time and tracks its state.
///
/// Each call to [`SearchService::perform_search`] cancels the request before
/// it. Outcomes are reported through the [`CompletionReceiver`] returned by
/// [`SearchService::new`]; superseded requests never report.
pub struct SearchService {
    transport: Arc<dyn CatalogTransport>,
    base_url: String,
    inner: Arc<Inner>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl SearchService {
    pub fn new(
        transport: Arc<dyn CatalogTransport>,
        base_url: impl Into<String>,
    ) -> (Self, CompletionReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            transport,
            base_url: base_url.into(),
            inner: Arc::new(Inner {
                shared: Mutex::new(Shared {
                    state: SearchState::NotSearchedYet,
                    generation: 0,
                }),
                completions: tx,
            }),
            in_flight: Mutex::new(None),
        };
        (service, rx)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.inner.shared.lock().state.clone()
    }

    /// Id of the most recently issued request, `0` before the first search.
    pub fn current_request(&self) -> RequestId {
        self.inner.shared.lock().generation
    }

    /// Start a search for `text` in `category`.
    ///
    /// An empty `text` is a no-op and returns `None`; whitespace is searched
    /// as-is. Otherwise the previous request is cancelled, the state becomes
    /// [`SearchState::Loading`] before this returns, and the new request id is
    /// returned. Must be called from within a tokio runtime.
    pub fn perform_search(&self, text: &str, category: Category) -> Option<RequestId> {
        if text.is_empty() {
            return None;
        }

        let mut in_flight = self.in_flight.lock();
        if let Some(previous) = in_flight.take() {
            previous.abort();
        }

        let request_id = {
            let mut shared = self.inner.shared.lock();
            shared.generation += 1;
            shared.state = SearchState::Loading;
            shared.generation
        };

        info!(request_id, query = text, %category, "Starting catalog search");

        let transport = Arc::clone(&self.transport);
        let inner = Arc::clone(&self.inner);
        let url = build_search_url(&self.base_url, text, category);

        *in_flight = Some(tokio::spawn(async move {
            let outcome = match url {
                Ok(url) => fetch(transport.as_ref(), &url).await,
                Err(e) => Err(CatalogError::InvalidUrl(e.to_string())),
            };
            inner.finish(request_id, outcome);
        }));

        Some(request_id)
    }

    #[cfg(test)]
    pub(crate) fn finish_for_test(
        &self,
        request_id: RequestId,
        outcome: Result<Vec<SearchResult>, CatalogError>,
    ) -> bool {
        self.inner.finish(request_id, outcome)
    }
}

impl Drop for SearchService {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.get_mut().take() {
            handle.abort();
        }
    }
}

async fn fetch(
    transport: &dyn CatalogTransport,
    url: &url::Url,
) -> Result<Vec<SearchResult>, CatalogError> {
    let response = transport.get(url).await?;
    if response.status != 200 {
        return Err(CatalogError::HttpStatus(response.status));
    }

    let results = parse_body(&response.body)?;
    debug!(
        transport = transport.name(),
        count = results.len(),
        "Normalized catalog response"
    );
    Ok(results)
}
