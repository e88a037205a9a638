//! Gallery controller driving a real relay through `HttpFetcher`.

use axum::http::StatusCode;
use wallhaven_gallery::gallery::{GalleryController, Listing, WallpaperFetcher};
use wallhaven_gallery::{FetchError, HttpFetcher};

use crate::support::{start_relay, FakeUpstream};

fn no_assets() -> std::path::PathBuf {
    std::env::temp_dir().join("wallhaven-gallery-no-assets")
}

#[tokio::test]
async fn initial_load_then_paginate_to_the_end() {
    let upstream = FakeUpstream::paged(5);
    let base = start_relay(&upstream.start().await, &no_assets()).await;
    let controller = GalleryController::new(HttpFetcher::new(&base));

    controller.activate().await;

    let first = &upstream.requests()[0];
    assert_eq!(first["page"], "1");
    assert_eq!(first["q"], "");
    assert!(controller.has_more());

    for _ in 0..4 {
        assert!(controller.load_more().await);
    }

    let session = controller.snapshot();
    assert_eq!(session.current_page, 5);
    assert!(!controller.has_more());
    assert_eq!(session.records.len(), 10);
    assert_eq!(session.records[0].id, "-1-0");
    assert_eq!(session.records[9].id, "-5-1");
    assert_eq!(controller.listing(), Listing::EndOfGallery);
}

#[tokio::test]
async fn search_text_survives_the_round_trip() {
    let upstream = FakeUpstream::paged(2);
    let base = start_relay(&upstream.start().await, &no_assets()).await;
    let controller = GalleryController::new(HttpFetcher::new(&base));

    controller.search("red & blue #1").await;

    assert_eq!(upstream.requests()[0]["q"], "red & blue #1");
    let session = controller.snapshot();
    assert_eq!(session.records[0].id, "red & blue #1-1-0");
    assert!(session.error.is_none());
}

#[tokio::test]
async fn relay_failure_surfaces_as_session_error() {
    let upstream = FakeUpstream::new(|params| match params.get("page").map(String::as_str) {
        Some("1") => (StatusCode::OK, crate::support::page_body("", 1, 3)),
        _ => (StatusCode::SERVICE_UNAVAILABLE, String::new()),
    });
    let base = start_relay(&upstream.start().await, &no_assets()).await;
    let controller = GalleryController::new(HttpFetcher::new(&base));
    controller.activate().await;
    let before = controller.snapshot();

    assert!(controller.load_more().await);

    let session = controller.snapshot();
    assert_eq!(session.error.as_deref(), Some("HTTP error! status: 500"));
    assert!(!session.loading);
    assert_eq!(session.records, before.records);
    assert_eq!(session.current_page, 1);
}

#[tokio::test]
async fn unreachable_relay_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = HttpFetcher::new(&format!("http://{addr}"));
    let result = fetcher.fetch_page(1, "").await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
}
