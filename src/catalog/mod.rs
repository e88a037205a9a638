//! Catalog — typed records returned by the Wallhaven search API.
//!
//! The upstream hands back a `data` array of wallpapers and a `meta` object
//! with pagination counters. These types are the schema for that payload:
//! decoding a [`ResultPage`] is where malformed upstream data gets rejected.
//!
//! ```text
//! {
//!   "data": [ { "id": "94x38z", "path": "...", "thumbs": { ... }, ... } ],
//!   "meta": { "current_page": 1, "last_page": 5, "per_page": 24, "total": 120 }
//! }
//! ```

mod format;
mod page;
mod wallpaper;

pub use format::format_file_size;
pub use page::{PageMeta, ResultPage};
pub use wallpaper::{
    Category, DownloadOption, DownloadTarget, Purity, Tag, TagPreview, Thumbs, Wallpaper,
};
