//! Wallpaper gallery over the Wallhaven catalog.
//!
//! - [`catalog`] — typed wallpaper records and result pages
//! - [`gallery`] — client-side search / pagination state controller
//! - [`relay`] — HTTP relay injecting the server-side API key (`http` feature)

pub mod catalog;
pub mod gallery;

#[cfg(feature = "http")]
pub mod relay;

pub use catalog::{PageMeta, ResultPage, Wallpaper};
pub use gallery::{FetchError, GalleryController, InMemoryCatalog, SearchSession, WallpaperFetcher};

#[cfg(feature = "client")]
pub use gallery::HttpFetcher;

// Re-export the EventEmitter so listeners can be written without a direct dependency
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;

/// Route the relay serves search results on.
pub const WALLPAPERS_PATH: &str = "/api/wallpapers";
