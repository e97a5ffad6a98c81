use crate::models::{ContentItem, ContentKind, SearchResult};
use crate::normalize::normalize_all;
use crate::tmdb::CatalogApi;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Searches movies and series concurrently; movies first, capped at 20.
/// A failed side contributes nothing. Blank queries never touch the network.
pub async fn search(api: &dyn CatalogApi, query: &str) -> SearchResult {
    if query.trim().is_empty() {
        return SearchResult::default();
    }
    let (movies, series) = tokio::join!(
        search_kind(api, ContentKind::Movie, query),
        search_kind(api, ContentKind::Series, query),
    );
    SearchResult::merge(movies, series)
}

async fn search_kind(
    api: &dyn CatalogApi,
    kind: ContentKind,
    query: &str,
) -> Vec<ContentItem> {
    match api.search(kind, query).await {
        Ok(raw) => normalize_all(raw, kind),
        Err(e) => {
            warn!("{} search for '{}' failed: {:#}", kind.display_label(), query, e);
            Vec::new()
        }
    }
}

/// Latest published search state. `seq` is the input that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub seq: u64,
    pub query: String,
    pub result: SearchResult,
}

/// Debounced search for interactive input.
///
/// Each call to [`SearchSession::input`] restarts the quiet-period timer; only the
/// last query after the delay is dispatched. Dispatches already in flight keep
/// running, but their result is dropped unless they are still the latest input.
pub struct SearchSession {
    api: Arc<dyn CatalogApi>,
    delay: Duration,
    latest: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    tx: Arc<watch::Sender<SearchOutcome>>,
}

impl SearchSession {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self::with_delay(api, DEBOUNCE)
    }

    pub fn with_delay(api: Arc<dyn CatalogApi>, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(SearchOutcome::default());
        Self {
            api,
            delay,
            latest: Arc::new(AtomicU64::new(0)),
            pending: None,
            tx: Arc::new(tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchOutcome> {
        self.tx.subscribe()
    }

    pub fn latest(&self) -> SearchOutcome {
        self.tx.borrow().clone()
    }

    /// Must be called from within a tokio runtime.
    pub fn input(&mut self, query: &str) {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }

        let query = query.to_string();
        if query.trim().is_empty() {
            publish(&self.tx, &self.latest, seq, query, SearchResult::default());
            return;
        }

        let api = Arc::clone(&self.api);
        let latest = Arc::clone(&self.latest);
        let tx = Arc::clone(&self.tx);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so that a later keystroke aborting the timer leaves this running.
            tokio::spawn(async move {
                debug!("Dispatching search #{} for '{}'", seq, query);
                let result = search(api.as_ref(), &query).await;
                publish(&tx, &latest, seq, query, result);
            });
        }));
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
    }
}

fn publish(
    tx: &watch::Sender<SearchOutcome>,
    latest: &AtomicU64,
    seq: u64,
    query: String,
    result: SearchResult,
) {
    let published = tx.send_if_modified(|current| {
        if seq != latest.load(Ordering::SeqCst) || seq <= current.seq {
            return false;
        }
        *current = SearchOutcome { seq, query, result };
        true
    });
    if !published {
        debug!("Discarding stale search result #{}", seq);
    }
}
