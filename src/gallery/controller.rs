use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::events::{self, FetchFailed, FetchStarted, Notifier, PageLoaded};
use super::session::{Listing, SearchSession};
use super::WallpaperFetcher;
use crate::catalog::Wallpaper;

/// Owns one search session and drives it through a [`WallpaperFetcher`].
///
/// The session lives behind a mutex that is never held across an await, so
/// the controller can be shared between tasks (`Arc<GalleryController<_>>`)
/// without sessions of different controllers ever touching each other.
///
/// Concurrency policy:
/// - `load_more` starts at most one fetch at a time; a call made while any
///   fetch is outstanding returns `false` without touching the network.
/// - `search` is never refused. Overlapping searches are applied in
///   completion order, so the response that resolves last wins.
///
/// ## Example
///
/// ```ignore
/// let controller = GalleryController::new(HttpFetcher::new("http://localhost:3001"));
/// controller.activate().await;          // page 1 of the unfiltered catalog
/// controller.search("mountains").await; // replaces the records
/// while controller.has_more() {
///     controller.load_more().await;     // appends the next page
/// }
/// ```
pub struct GalleryController<F> {
    fetcher: F,
    session: Mutex<SearchSession>,
    activated: AtomicBool,
    events: Notifier,
}

impl<F: WallpaperFetcher> GalleryController<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            session: Mutex::new(SearchSession::default()),
            activated: AtomicBool::new(false),
            events: Notifier::new(),
        }
    }

    /// Load page 1 of the unfiltered catalog, once per controller.
    ///
    /// Returns `false` if the controller was already activated.
    pub async fn activate(&self) -> bool {
        if self.activated.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.search("").await;
        true
    }

    /// Start a new search, replacing the records once page 1 arrives.
    ///
    /// Records are not cleared up front: if the request fails, the previous
    /// results stay in place next to the error.
    pub async fn search(&self, query: impl Into<String>) {
        let query = query.into();
        {
            let mut session = self.lock();
            session.query = query.clone();
            session.current_page = 1;
            session.error = None;
            session.loading = true;
        }
        self.fetch(1, query, false).await;
    }

    /// Append the next page of the active query.
    ///
    /// Returns `false` without fetching when there is no next page or a fetch
    /// is already in flight.
    pub async fn load_more(&self) -> bool {
        let (page, query) = {
            let mut session = self.lock();
            if session.loading || !session.has_more() {
                debug!(
                    loading = session.loading,
                    current_page = session.current_page,
                    total_pages = session.total_pages,
                    "load_more skipped"
                );
                return false;
            }
            session.loading = true;
            session.error = None;
            (session.current_page + 1, session.query.clone())
        };
        self.fetch(page, query, true).await;
        true
    }

    /// Re-run the active query from page 1.
    pub async fn retry(&self) {
        let query = self.lock().query.clone();
        self.search(query).await;
    }

    async fn fetch(&self, page: u32, query: String, append: bool) {
        debug!(page, query = %query, append, "fetching wallpapers");
        self.events.emit(
            events::LOADING,
            FetchStarted {
                page,
                query: query.clone(),
            },
        );

        let result = self.fetcher.fetch_page(page, &query).await;

        match result {
            Ok(result_page) => {
                let appended = result_page.data.len() as u64;
                let loaded = {
                    let mut session = self.lock();
                    session.apply(page, result_page, append);
                    session.loading = false;
                    PageLoaded {
                        page,
                        total_pages: session.total_pages,
                        appended,
                        records: session.records.len() as u64,
                    }
                };
                self.events.emit(events::LOADED, loaded);
            }
            Err(err) => {
                warn!(page, query = %query, error = %err, "failed to fetch wallpapers");
                let message = err.to_string();
                {
                    let mut session = self.lock();
                    session.error = Some(message.clone());
                    session.loading = false;
                }
                self.events.emit(events::FAILED, FetchFailed { page, message });
            }
        }
    }

    /// Register a listener for one of the [`events`] names.
    /// Returns an id that can be passed to [`off`](Self::off).
    #[cfg(feature = "emitter")]
    pub fn on<T, L>(&self, event: &str, listener: L) -> String
    where
        for<'de> T: serde::Deserialize<'de>,
        L: Fn(T) + Send + Sync + 'static,
    {
        self.events.on(event, listener)
    }

    #[cfg(feature = "emitter")]
    pub fn off(&self, listener_id: &str) -> bool {
        self.events.remove(listener_id)
    }
}

impl<F> GalleryController<F> {
    /// Copy of the current session for rendering.
    pub fn snapshot(&self) -> SearchSession {
        self.lock().clone()
    }

    pub fn has_more(&self) -> bool {
        self.lock().has_more()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    pub fn listing(&self) -> Listing {
        self.lock().listing()
    }

    /// Record with the given id, for the detail view.
    pub fn wallpaper(&self, id: &str) -> Option<Wallpaper> {
        self.lock().wallpaper(id).cloned()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn lock(&self) -> MutexGuard<'_, SearchSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
