//! Process-lifetime memo of the provider's genre table.
//!
//! The table is stored after the first successful non-empty fetch and never
//! refreshed. Failed or empty fetches leave it empty so the next caller
//! fetches again. The fetch runs outside the lock: concurrent first callers
//! may each hit the provider, and whichever stores first is kept.

use std::future::Future;

use reelgate_core::Genre;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Default)]
pub struct GenreCache {
    genres: RwLock<Vec<Genre>>,
}

impl GenreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents; empty until the first successful fetch.
    pub async fn snapshot(&self) -> Vec<Genre> {
        self.genres.read().await.clone()
    }

    pub async fn is_populated(&self) -> bool {
        !self.genres.read().await.is_empty()
    }

    /// Return the cached table, or run `fetch` and keep its result.
    pub async fn get_or_fetch<F, Fut, E>(&self, fetch: F) -> Result<Vec<Genre>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Genre>, E>>,
    {
        {
            let cached = self.genres.read().await;
            if !cached.is_empty() {
                return Ok(cached.clone());
            }
        }

        let fetched = fetch().await?;
        if fetched.is_empty() {
            return Ok(fetched);
        }

        let mut slot = self.genres.write().await;
        if slot.is_empty() {
            info!(count = fetched.len(), "genre table cached");
            *slot = fetched;
        }
        Ok(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(id: i64, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn first_success_is_retained() {
        let cache = GenreCache::new();

        let first: Result<_, ()> = cache
            .get_or_fetch(|| async { Ok(vec![genre(28, "Action")]) })
            .await;
        assert_eq!(first.unwrap(), vec![genre(28, "Action")]);

        // A second fetch would surface this error.
        let second: Result<_, ()> = cache.get_or_fetch(|| async { Err(()) }).await;
        assert_eq!(second.unwrap(), vec![genre(28, "Action")]);
    }

    #[tokio::test]
    async fn failure_leaves_cache_empty() {
        let cache = GenreCache::new();

        let failed: Result<Vec<Genre>, &str> = cache.get_or_fetch(|| async { Err("down") }).await;
        assert!(failed.is_err());
        assert!(!cache.is_populated().await);

        let retried: Result<_, &str> = cache
            .get_or_fetch(|| async { Ok(vec![genre(18, "Drama")]) })
            .await;
        assert_eq!(retried.unwrap(), vec![genre(18, "Drama")]);
        assert!(cache.is_populated().await);
    }

    #[tokio::test]
    async fn empty_success_is_not_cached() {
        let cache = GenreCache::new();

        let empty: Result<_, ()> = cache.get_or_fetch(|| async { Ok(Vec::new()) }).await;
        assert!(empty.unwrap().is_empty());
        assert!(cache.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn late_racer_gets_stored_table() {
        let cache = GenreCache::new();

        // Simulate a racer whose fetch finishes after the table was stored.
        let late: Result<_, ()> = cache
            .get_or_fetch(|| async {
                let _: Result<_, ()> = cache
                    .get_or_fetch(|| async { Ok(vec![genre(28, "Action")]) })
                    .await;
                Ok(vec![genre(99, "Documentary")])
            })
            .await;

        assert_eq!(late.unwrap(), vec![genre(28, "Action")]);
        assert_eq!(cache.snapshot().await, vec![genre(28, "Action")]);
    }
}
