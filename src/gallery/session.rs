use serde::Serialize;

use crate::catalog::{ResultPage, Wallpaper};

/// State of one search session.
///
/// Mutated only by the controller: `search` resets it, `load_more` appends
/// to it. `records` always holds pages `1..=current_page` of `query` in
/// ascending page order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSession {
    pub records: Vec<Wallpaper>,
    pub loading: bool,
    pub error: Option<String>,
    pub current_page: u32,
    pub total_pages: u32,
    pub query: String,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
            total_pages: 1,
            query: String::new(),
        }
    }
}

/// What the listing area should show for a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// An error banner with a retry action; records may still be rendered.
    Failed(String),
    Loading,
    /// More pages are available behind a "load more" action.
    CanLoadMore,
    EndOfGallery,
    /// The active query returned nothing.
    NoResults { query: String },
    /// Nothing loaded yet and nothing requested.
    Idle,
}

impl SearchSession {
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up an accumulated record, for the detail view.
    pub fn wallpaper(&self, id: &str) -> Option<&Wallpaper> {
        self.records.iter().find(|w| w.id == id)
    }

    pub fn listing(&self) -> Listing {
        if let Some(error) = &self.error {
            return Listing::Failed(error.clone());
        }
        if self.loading {
            return Listing::Loading;
        }
        match (self.records.is_empty(), self.has_more()) {
            (false, true) => Listing::CanLoadMore,
            (false, false) => Listing::EndOfGallery,
            (true, _) if !self.query.is_empty() => Listing::NoResults {
                query: self.query.clone(),
            },
            (true, _) => Listing::Idle,
        }
    }

    /// Install `page` as the result of fetching page `number`.
    pub(crate) fn apply(&mut self, number: u32, page: ResultPage, append: bool) {
        if append {
            self.records.extend(page.data);
        } else {
            self.records = page.data;
        }
        self.total_pages = page.meta.last_page;
        self.current_page = number;
    }
}
