//! Gallery — client-side search and pagination state.
//!
//! A [`GalleryController`] owns one [`SearchSession`] and talks to the
//! catalog through a [`WallpaperFetcher`]:
//!
//! ```text
//!   search(q) ──► page 1 ──► replace records
//!   load_more() ──► page n+1 ──► append records   (refused while loading
//!                                                  or on the last page)
//! ```
//!
//! The presentation layer renders from [`GalleryController::snapshot`] and,
//! with the `emitter` feature, re-renders on the [`events`] it emits.

mod controller;
mod error;
pub mod events;
mod fetcher;
mod in_memory;
mod session;

#[cfg(feature = "client")]
mod http;

pub use controller::GalleryController;
pub use error::FetchError;
pub use fetcher::WallpaperFetcher;
pub use in_memory::{FetchCall, InMemoryCatalog};
pub use session::{Listing, SearchSession};

#[cfg(feature = "client")]
pub use http::HttpFetcher;
