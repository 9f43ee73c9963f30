// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{results, settings_for, track};
use std::time::Duration;
use storesearch::config::settings::ITunesSettings;
use storesearch::domain::models::Category;
use storesearch::domain::search::{build_search_url, CatalogError, CatalogTransport};
use storesearch::infrastructure::search::ITunesClient;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_itunes_client_returns_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("term", "hey jude"))
        .and(query_param("limit", "200"))
        .and(query_param("entity", "musicTrack"))
        .and(header("user-agent", "storesearch-test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(results(vec![track("Hey Jude", "The Beatles")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(&server, 5);
    let client = ITunesClient::new(&settings).unwrap();
    let url = build_search_url(&settings.base_url, "hey jude", Category::Music).unwrap();

    let response = client.get(&url).await.unwrap();
    assert_eq!(response.status, 200);

    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body["results"][0]["trackName"], "Hey Jude");
    assert_eq!(client.name(), "itunes");
}

#[tokio::test]
async fn test_itunes_client_passes_error_statuses_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let settings = settings_for(&server, 5);
    let client = ITunesClient::new(&settings).unwrap();
    let url = build_search_url(&settings.base_url, "x", Category::All).unwrap();

    let response = client.get(&url).await.unwrap();
    assert_eq!(response.status, 500);
    assert_eq!(&response.body[..], b"boom");
}

#[tokio::test]
async fn test_itunes_client_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(results(vec![]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let settings = settings_for(&server, 1);
    let client = ITunesClient::new(&settings).unwrap();
    let url = build_search_url(&settings.base_url, "slow", Category::All).unwrap();

    assert_eq!(client.get(&url).await.unwrap_err(), CatalogError::Timeout);
}

#[tokio::test]
async fn test_itunes_client_reports_connection_failures() {
    let settings = ITunesSettings {
        base_url: "http://127.0.0.1:1/search".to_string(),
        timeout_secs: 5,
        user_agent: "storesearch-test".to_string(),
    };
    let client = ITunesClient::new(&settings).unwrap();
    let url = build_search_url(&settings.base_url, "offline", Category::All).unwrap();

    assert!(matches!(
        client.get(&url).await,
        Err(CatalogError::Network(_))
    ));
}

#[test]
fn test_client_rejects_invalid_user_agent() {
    let settings = ITunesSettings {
        user_agent: "storesearch\n/0.1".to_string(),
        ..ITunesSettings::default()
    };

    assert!(matches!(
        ITunesClient::new(&settings),
        Err(CatalogError::ClientBuild(_))
    ));
}
