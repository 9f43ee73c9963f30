// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};
use storesearch::config::settings::ITunesSettings;
use wiremock::MockServer;

/// Settings pointing the client at `server`.
pub fn settings_for(server: &MockServer, timeout_secs: u64) -> ITunesSettings {
    ITunesSettings {
        base_url: format!("{}/search", server.uri()),
        timeout_secs,
        user_agent: "storesearch-test".to_string(),
    }
}

pub fn track(name: &str, artist: &str) -> Value {
    json!({
        "wrapperType": "track",
        "kind": "song",
        "trackName": name,
        "artistName": artist,
        "artworkUrl60": "https://example.com/60.jpg",
        "artworkUrl100": "https://example.com/100.jpg",
        "trackViewUrl": "https://example.com/track",
        "currency": "USD",
        "trakePrice": 1.29,
        "primaryGenreName": "Rock"
    })
}

pub fn audiobook(name: &str, artist: &str) -> Value {
    json!({
        "wrapperType": "audiobook",
        "collectionName": name,
        "artistName": artist,
        "artworkUrl60": "https://example.com/60.jpg",
        "artworkUrl100": "https://example.com/100.jpg",
        "collectionViewUrl": "https://example.com/audiobook",
        "currency": "USD",
        "collectionPrice": 14.95,
        "primaryGenreName": "Biography"
    })
}

pub fn ebook(name: &str, artist: &str, genres: &[&str]) -> Value {
    json!({
        "kind": "ebook",
        "trackName": name,
        "artistName": artist,
        "artworkUrl60": "https://example.com/60.jpg",
        "artworkUrl100": "https://example.com/100.jpg",
        "trackViewUrl": "https://example.com/ebook",
        "currency": "USD",
        "price": 4.99,
        "genres": genres
    })
}

pub fn results(records: Vec<Value>) -> Value {
    json!({ "resultCount": records.len(), "results": records })
}
