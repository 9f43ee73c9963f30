// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use storesearch::infrastructure::search::{ArtworkError, ArtworkLoader};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_artwork_download_returns_raw_bytes() {
    let server = MockServer::start().await;
    let image = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a];
    Mock::given(method("GET"))
        .and(path("/art/100.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(image.clone()))
        .mount(&server)
        .await;

    let loader = ArtworkLoader::new(reqwest::Client::new());
    let bytes = loader
        .download(&format!("{}/art/100.png", server.uri()))
        .await
        .unwrap();

    assert_eq!(&bytes[..], &image[..]);
}

#[tokio::test]
async fn test_artwork_download_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let loader = ArtworkLoader::new(reqwest::Client::new());
    let result = loader.download(&format!("{}/art/missing.png", server.uri())).await;

    assert_eq!(result, Err(ArtworkError::HttpStatus(404)));
}

#[tokio::test]
async fn test_artwork_download_rejects_bad_urls() {
    let loader = ArtworkLoader::new(reqwest::Client::new());

    assert!(matches!(
        loader.download("").await,
        Err(ArtworkError::InvalidUrl(_))
    ));
    assert!(matches!(
        loader.download("not a url").await,
        Err(ArtworkError::InvalidUrl(_))
    ));
}
