//! Integration tests for the HTTP image fetcher
//!
//! These tests use wiremock to serve images and error responses and check the
//! full fetch, decode and publish cycle.

use app_core::loader::{HttpFetcherConfig, HttpImageFetcher, ImageFetcher, ImageLoader};
use app_core::media::{ImageLoadState, MediaError};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

// =============================================================================
// Fetcher Tests
// =============================================================================

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;
    let body = png_bytes(12, 12);

    Mock::given(method("GET"))
        .and(path("/avatar.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(body.clone()),
        )
        .mount(&mock_server)
        .await;

    let fetcher = HttpImageFetcher::new().unwrap();
    let bytes = fetcher
        .fetch(&format!("{}/avatar.png", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(bytes, body);
}

#[tokio::test]
async fn test_fetch_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let fetcher = HttpImageFetcher::new().unwrap();
    let err = fetcher
        .fetch(&format!("{}/missing.png", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, MediaError::Http { status: 404 }));
}

#[tokio::test]
async fn test_fetch_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty.png"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let fetcher = HttpImageFetcher::new().unwrap();
    let err = fetcher
        .fetch(&format!("{}/empty.png", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, MediaError::EmptyBody));
}

#[tokio::test]
async fn test_fetch_too_large() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/huge.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 2048]))
        .mount(&mock_server)
        .await;

    let config = HttpFetcherConfig {
        max_bytes: 1024,
        ..Default::default()
    };
    let fetcher = HttpImageFetcher::with_config(config).unwrap();
    let err = fetcher
        .fetch(&format!("{}/huge.png", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, MediaError::FileTooLarge { max: 1024, .. }));
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    let fetcher = HttpImageFetcher::new().unwrap();
    let err = fetcher
        .fetch("http://127.0.0.1:1/nothing-listens-here.png")
        .await
        .unwrap_err();

    assert!(matches!(err, MediaError::Transport(_)));
}

// =============================================================================
// Loader Tests
// =============================================================================

#[tokio::test]
async fn test_loader_resolves_bitmap_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/avatar.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(140, 140)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let loader = ImageLoader::new(Arc::new(HttpImageFetcher::new().unwrap()));
    let url = format!("{}/avatar.png", mock_server.uri());

    let request = loader.load(url.clone());
    let state = request.resolved_state().await;
    assert_eq!(state.bitmap().map(|b| (b.width, b.height)), Some((140, 140)));

    // Served from cache; the mock expects exactly one hit
    let again = loader.load(url);
    assert!(matches!(again.state(), ImageLoadState::Loaded(_)));
}

#[tokio::test]
async fn test_loader_server_error_renders_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/avatar.png"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let loader = ImageLoader::new(Arc::new(HttpImageFetcher::new().unwrap()));
    let request = loader.load(format!("{}/avatar.png", mock_server.uri()));

    let state = request.resolved_state().await;
    assert_eq!(state.error_message(), Some("HTTP error: status 500"));
}
