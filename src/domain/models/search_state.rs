// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::search_result::SearchResult;
use serde::{Deserialize, Serialize};

/// Observable state of a [`SearchService`](crate::domain::services::SearchService).
///
/// `NotSearchedYet` doubles as the state after a failed request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "results", rename_all = "snake_case")]
pub enum SearchState {
    #[default]
    NotSearchedYet,
    Loading,
    NoResults,
    Results(Vec<SearchResult>),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Results of the last successful search, empty in every other state.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchState::Results(list) => list,
            _ => &[],
        }
    }
}
