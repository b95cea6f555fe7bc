use crate::models::Habit;
use crate::seed::seed_habits;
use crate::state::AppState;
use crate::store::HabitStore;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{info, warn};

const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self {
                message: FALLBACK_MESSAGE.to_string(),
            };
        }
        Self { message }
    }
}

/// Where the initial habit list comes from.
#[async_trait]
pub trait HabitSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Habit>, LoadError>;
}

/// Simulated remote fetch: waits `delay`, then yields the example habits.
#[derive(Debug, Clone)]
pub struct SeedSource {
    delay: Duration,
}

impl SeedSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl HabitSource for SeedSource {
    async fn fetch(&self) -> Result<Vec<Habit>, LoadError> {
        tokio::time::sleep(self.delay).await;
        Ok(seed_habits(Utc::now()))
    }
}

/// Runs one load to completion, or nothing if another load is still
/// pending. The store lock is released while the source is pending, so
/// other mutations may land in between; a successful load then overwrites
/// them.
pub async fn load(store: &Mutex<HabitStore>, source: &dyn HabitSource) {
    if !store.lock().await.begin_load() {
        info!("habit load already in flight");
        return;
    }
    info!("loading habits");

    let outcome = source.fetch().await;
    match &outcome {
        Ok(habits) => info!(count = habits.len(), "habits loaded"),
        Err(err) => warn!("habit load failed: {err}"),
    }

    store.lock().await.finish_load(outcome);
}

pub fn spawn_load(state: &AppState) -> JoinHandle<()> {
    let store = Arc::clone(&state.store);
    let source = SeedSource::new(state.config.load_delay);
    tokio::spawn(async move {
        load(&store, &source).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSource;

    #[async_trait]
    impl HabitSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<Habit>, LoadError> {
            Err(LoadError::new(""))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn seed_load_resolves_after_delay() {
        let store = Arc::new(Mutex::new(HabitStore::new()));
        assert!(!store.lock().await.is_loading());

        let task = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                load(&store, &SeedSource::new(Duration::from_secs(1))).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(999)).await;
        {
            let guard = store.lock().await;
            assert!(guard.is_loading());
            assert!(guard.habits().is_empty());
        }

        task.await.unwrap();
        let guard = store.lock().await;
        assert!(!guard.is_loading());
        assert!(guard.error().is_none());
        assert_eq!(guard.habits().len(), 10);
        let daily = guard
            .habits()
            .iter()
            .filter(|habit| habit.frequency == Frequency::Daily)
            .count();
        assert_eq!(daily, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn mutations_during_load_are_overwritten() {
        let store = Arc::new(Mutex::new(HabitStore::new()));
        let task = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                load(&store, &SeedSource::new(Duration::from_secs(1))).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        store.lock().await.add("Added while loading", Frequency::Daily);
        assert_eq!(store.lock().await.habits().len(), 1);

        task.await.unwrap();
        let guard = store.lock().await;
        assert_eq!(guard.habits().len(), 10);
        assert!(guard.habits().iter().all(|h| h.name != "Added while loading"));
    }

    struct CountingSource {
        inner: SeedSource,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl HabitSource for CountingSource {
        async fn fetch(&self) -> Result<Vec<Habit>, LoadError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_load_does_not_end_loading_early() {
        let store = Arc::new(Mutex::new(HabitStore::new()));
        let source = Arc::new(CountingSource {
            inner: SeedSource::new(Duration::from_secs(1)),
            fetches: AtomicUsize::new(0),
        });
        let start = |store: &Arc<Mutex<HabitStore>>, source: &Arc<CountingSource>| {
            let store = Arc::clone(store);
            let source = Arc::clone(source);
            tokio::spawn(async move {
                load(&store, &*source).await;
            })
        };

        let first = start(&store, &source);
        tokio::time::sleep(Duration::from_millis(500)).await;
        let second = start(&store, &source);
        second.await.unwrap();
        assert!(store.lock().await.is_loading());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(store.lock().await.is_loading());

        first.await.unwrap();
        let guard = store.lock().await;
        assert!(!guard.is_loading());
        assert_eq!(guard.habits().len(), 10);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_load_uses_fallback_message() {
        let store = Mutex::new(HabitStore::new());
        load(&store, &FailingSource).await;

        let guard = store.lock().await;
        assert!(!guard.is_loading());
        assert_eq!(guard.error(), Some(FALLBACK_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_load_replaces_rather_than_merges() {
        let store = Mutex::new(HabitStore::new());
        let source = SeedSource::new(Duration::from_secs(1));
        load(&store, &source).await;
        load(&store, &source).await;

        assert_eq!(store.lock().await.habits().len(), 10);
    }
}
