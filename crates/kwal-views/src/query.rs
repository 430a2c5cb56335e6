//! Observable data-fetching state.
//!
//! A [`Query`] pairs a fetcher with a key. It fetches on mount, again whenever
//! the key changes by value, and on explicit [`Query::refetch`]. State is
//! published through a `watch` channel so any number of views can follow it.
//!
//! Each fetch takes a new generation number. A fetch that completes after a
//! newer one has started is discarded, so a slow stale response can never
//! overwrite fresher state.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::BoxFuture;
use tokio::sync::watch;
use tracing::debug;

use kwal_client::ApiResult;
use kwal_models::{QueryKey, ToQueryKey};

/// Loads `T` for a key; `Ok(None)` means "nothing there".
pub type Fetcher<K, T> = Arc<dyn Fn(K) -> BoxFuture<'static, ApiResult<Option<T>>> + Send + Sync>;

/// Snapshot of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> QueryState<T> {
    /// Finished without error and without data.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.data.is_none()
    }
}

pub struct Query<K, T> {
    name: &'static str,
    fetcher: Fetcher<K, T>,
    current: Mutex<Option<(K, QueryKey)>>,
    generation: AtomicU64,
    state: watch::Sender<QueryState<T>>,
}

impl<K, T> fmt::Debug for Query<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("name", &self.name)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

impl<K, T> Query<K, T>
where
    K: ToQueryKey + Clone + Send + 'static,
    T: Send + Sync + 'static,
{
    pub fn new(name: &'static str, fetcher: Fetcher<K, T>) -> Self {
        let (state, _) = watch::channel(QueryState::default());
        Self {
            name,
            fetcher,
            current: Mutex::new(None),
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Build from an async closure.
    pub fn from_fn<F, Fut>(name: &'static str, fetch: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ApiResult<Option<T>>> + Send + 'static,
    {
        let fetcher: Fetcher<K, T> =
            Arc::new(move |key: K| -> BoxFuture<'static, ApiResult<Option<T>>> {
                Box::pin(fetch(key))
            });
        Self::new(name, fetcher)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Remember `key` and fetch unconditionally.
    pub async fn mount(&self, key: K) -> bool {
        self.replace_key(key.clone());
        self.run(key).await
    }

    /// Fetch only when `key` differs by value from the current one.
    ///
    /// Returns whether a fetch was issued.
    pub async fn set_key(&self, key: K) -> bool {
        let normalized = key.query_key();
        let unchanged = self
            .lock_current()
            .as_ref()
            .is_some_and(|(_, current)| *current == normalized);
        if unchanged {
            debug!(query = self.name, key = %normalized, "Key unchanged; skipping fetch");
            return false;
        }

        self.replace_key(key.clone());
        self.run(key).await;
        true
    }

    /// Fetch again with the current key. Does nothing before mount.
    pub async fn refetch(&self) -> bool {
        let key = self.lock_current().as_ref().map(|(key, _)| key.clone());
        match key {
            Some(key) => self.run(key).await,
            None => false,
        }
    }

    pub fn key(&self) -> Option<K> {
        self.lock_current().as_ref().map(|(key, _)| key.clone())
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<T>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> QueryState<T>
    where
        T: Clone,
    {
        self.state.borrow().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&QueryState<T>) -> R) -> R {
        f(&self.state.borrow())
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<(K, QueryKey)>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace_key(&self, key: K) {
        let normalized = key.query_key();
        *self.lock_current() = Some((key, normalized));
    }

    /// Returns false when the result was superseded and dropped.
    async fn run(&self, key: K) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = (self.fetcher)(key).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(query = self.name, generation, "Discarding superseded result");
            return false;
        }

        self.state.send_modify(|state| {
            match result {
                Ok(data) => state.data = data,
                Err(e) => {
                    debug!(query = self.name, error = %e, "Query failed");
                    state.error = Some(e.to_string());
                }
            }
            state.loading = false;
        });
        true
    }
}
