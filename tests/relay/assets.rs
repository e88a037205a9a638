//! Static assets and SPA fallback.

use std::fs;

use crate::support::{start_relay, FakeUpstream};

const INDEX: &str = "<!doctype html><div id=\"root\"></div>";

fn public_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/app.js"), "console.log('gallery');").unwrap();
    dir
}

#[tokio::test]
async fn serves_files_from_public_dir() {
    let dir = public_dir();
    let base = start_relay(&FakeUpstream::paged(1).start().await, dir.path()).await;

    let resp = reqwest::get(format!("{base}/assets/app.js")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "console.log('gallery');");
}

#[tokio::test]
async fn unknown_paths_fall_back_to_index() {
    let dir = public_dir();
    let base = start_relay(&FakeUpstream::paged(1).start().await, dir.path()).await;

    for path in ["/", "/wallpapers/94x38z", "/search?q=sky"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(resp.status(), 200, "path {path}");
        assert_eq!(resp.text().await.unwrap(), INDEX, "path {path}");
    }
}

#[tokio::test]
async fn api_route_is_not_shadowed_by_assets() {
    let dir = public_dir();
    let upstream = FakeUpstream::paged(1);
    let base = start_relay(&upstream.start().await, dir.path()).await;

    let resp = reqwest::get(format!("{base}/api/wallpapers")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["data"].is_array());
    assert_eq!(upstream.requests().len(), 1);
}
