//! Test fixtures: wallpapers and scripted catalogs.

use serde_json::json;
use wallhaven_gallery::{InMemoryCatalog, Wallpaper};

/// A minimal valid wallpaper with the given id.
pub fn wallpaper(id: &str) -> Wallpaper {
    serde_json::from_value(json!({
        "id": id,
        "url": format!("https://wallhaven.cc/w/{id}"),
        "short_url": format!("https://whvn.cc/{id}"),
        "path": format!("https://w.wallhaven.cc/full/{id}.jpg"),
        "thumbs": {
            "large": format!("https://th.wallhaven.cc/lg/{id}.jpg"),
            "original": format!("https://th.wallhaven.cc/orig/{id}.jpg"),
            "small": format!("https://th.wallhaven.cc/small/{id}.jpg")
        },
        "dimension_x": 1920,
        "dimension_y": 1080,
        "resolution": "1920x1080",
        "category": "general",
        "purity": "sfw",
        "file_size": 1048576,
        "file_type": "image/png"
    }))
    .unwrap()
}

/// `count` pages of `per_page` wallpapers each, ids `"{prefix}-{page}-{n}"`.
pub fn pages(prefix: &str, count: u32, per_page: u32) -> Vec<Vec<Wallpaper>> {
    (1..=count)
        .map(|page| {
            (0..per_page)
                .map(|n| wallpaper(&format!("{prefix}-{page}-{n}")))
                .collect()
        })
        .collect()
}

/// Catalog with five pages for the unfiltered query and two for "sky".
pub fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_per_page(3)
        .with_pages("", pages("all", 5, 3))
        .with_pages("sky", pages("sky", 2, 3))
}

pub fn ids(records: &[Wallpaper]) -> Vec<String> {
    records.iter().map(|w| w.id.clone()).collect()
}
