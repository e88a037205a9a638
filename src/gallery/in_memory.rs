//! In-memory catalog for testing and offline development.
//!
//! Serves scripted pages per query and records every request, so tests can
//! assert on exactly which pages were asked for. Two extra knobs exist for
//! exercising the controller's edge cases:
//! - `fail_next` queues an error for an upcoming fetch
//! - `hold` parks fetches until the test releases them one by one, which is
//!   how overlapping requests and out-of-order completions are reproduced

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{FetchError, WallpaperFetcher};
use crate::catalog::{PageMeta, ResultPage, Wallpaper};

/// A single recorded fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub page: u32,
    pub query: String,
}

impl FetchCall {
    pub fn new(page: u32, query: impl Into<String>) -> Self {
        Self {
            page,
            query: query.into(),
        }
    }
}

struct Parked {
    call: FetchCall,
    release: oneshot::Sender<()>,
}

struct Inner {
    pages: Mutex<HashMap<String, Vec<Vec<Wallpaper>>>>,
    per_page: u32,
    calls: Mutex<Vec<FetchCall>>,
    failures: Mutex<VecDeque<FetchError>>,
    holding: AtomicBool,
    parked: Mutex<Vec<Parked>>,
}

/// Scripted, shareable catalog.
///
/// Clones share the same pages and call log, so a test can keep one handle
/// while the controller owns another.
///
/// ## Example
///
/// ```
/// use wallhaven_gallery::gallery::{InMemoryCatalog, WallpaperFetcher};
///
/// # tokio_test_block(async {
/// let catalog = InMemoryCatalog::new();
/// let page = catalog.fetch_page(1, "nature").await.unwrap();
/// assert!(page.data.is_empty());
/// assert_eq!(catalog.call_count(), 1);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct InMemoryCatalog {
    inner: Arc<Inner>,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::with_per_page(24)
    }

    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            inner: Arc::new(Inner {
                pages: Mutex::new(HashMap::new()),
                per_page,
                calls: Mutex::new(Vec::new()),
                failures: Mutex::new(VecDeque::new()),
                holding: AtomicBool::new(false),
                parked: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_pages(self, query: impl Into<String>, pages: Vec<Vec<Wallpaper>>) -> Self {
        self.insert(query, pages);
        self
    }

    /// Set the pages served for `query`, replacing any previous script.
    pub fn insert(&self, query: impl Into<String>, pages: Vec<Vec<Wallpaper>>) {
        self.inner.pages.lock().unwrap().insert(query.into(), pages);
    }

    /// Make the next fetch that reaches the catalog fail with `err`.
    /// Queued errors are consumed in order.
    pub fn fail_next(&self, err: FetchError) {
        self.inner.failures.lock().unwrap().push_back(err);
    }

    /// Park every fetch from now on until it is released.
    pub fn hold(&self) {
        self.inner.holding.store(true, Ordering::SeqCst);
    }

    /// Stop parking fetches and release everything currently parked.
    pub fn resume(&self) {
        self.inner.holding.store(false, Ordering::SeqCst);
        self.release_all();
    }

    /// Release the parked fetch for `page` and `query`.
    /// Returns `false` if no such fetch is parked.
    pub fn release(&self, page: u32, query: &str) -> bool {
        let mut parked = self.inner.parked.lock().unwrap();
        match parked
            .iter()
            .position(|p| p.call.page == page && p.call.query == query)
        {
            Some(index) => {
                let _ = parked.remove(index).release.send(());
                true
            }
            None => false,
        }
    }

    pub fn release_all(&self) {
        for parked in self.inner.parked.lock().unwrap().drain(..) {
            let _ = parked.release.send(());
        }
    }

    /// Number of fetches currently parked.
    pub fn parked(&self) -> usize {
        self.inner.parked.lock().unwrap().len()
    }

    /// Every fetch received so far, in arrival order.
    pub fn calls(&self) -> Vec<FetchCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }

    fn page_for(&self, page: u32, query: &str) -> ResultPage {
        let pages = self.inner.pages.lock().unwrap();
        let script = pages.get(query).map(Vec::as_slice).unwrap_or(&[]);

        let last_page = (script.len() as u32).max(1);
        let total = script.iter().map(|p| p.len() as u64).sum();
        let data = page
            .checked_sub(1)
            .and_then(|index| script.get(index as usize))
            .cloned()
            .unwrap_or_default();

        ResultPage {
            data,
            meta: PageMeta {
                current_page: page,
                last_page,
                per_page: self.inner.per_page,
                total,
            },
        }
    }
}

#[async_trait]
impl WallpaperFetcher for InMemoryCatalog {
    async fn fetch_page(&self, page: u32, query: &str) -> Result<ResultPage, FetchError> {
        let call = FetchCall::new(page, query);
        self.inner.calls.lock().unwrap().push(call.clone());

        if self.inner.holding.load(Ordering::SeqCst) {
            let (release, released) = oneshot::channel();
            self.inner
                .parked
                .lock()
                .unwrap()
                .push(Parked { call, release });
            // A dropped sender means the catalog itself went away; serve anyway.
            let _ = released.await;
        }

        if let Some(err) = self.inner.failures.lock().unwrap().pop_front() {
            return Err(err);
        }

        Ok(self.page_for(page, query))
    }
}
