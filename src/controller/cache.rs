use crate::error::AppError;
use crate::model::{Category, Game};
use chrono::{DateTime, FixedOffset, Timelike};
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex as AsyncMutex, MutexGuard};
use tracing::debug;

/// Flat-file JSON store, one file per category.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path(&self, category: Category) -> PathBuf {
        self.dir.join(category.cache_file_name())
    }

    /// Empties both category files so a fresh process always starts cold.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the directory cannot be created or a file cannot be written
    pub async fn truncate_all(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        for category in Category::ALL {
            tokio::fs::write(self.path(category), b"").await?;
        }
        Ok(())
    }

    /// Missing, empty or undecodable files all read as an empty schedule.
    pub async fn load(&self, category: Category) -> Vec<Game> {
        let path = self.path(category);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) => {
                debug!(%category, path = %path.display(), error = %e, "cache file unreadable");
                return Vec::new();
            }
        };
        if text.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str::<Vec<Game>>(&text) {
            Ok(games) => games,
            Err(e) => {
                debug!(%category, error = %e, "cache file is not a game list, ignoring");
                Vec::new()
            }
        }
    }

    /// Overwrites the category file. Not atomic.
    ///
    /// # Errors
    ///
    /// Will return `Err` if serialization or the write fails
    pub async fn save(&self, category: Category, games: &[Game]) -> Result<(), AppError> {
        let body = serde_json::to_string(games)?;
        tokio::fs::write(self.path(category), body).await?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CacheEntry {
    pub last_refresh: Option<DateTime<FixedOffset>>,
}

/// Both category caches with independent freshness markers.
///
/// Each category sits behind its own lock so a refresh of one never blocks
/// or freshens the other.
#[derive(Debug)]
pub struct ScheduleCache {
    store: CacheStore,
    entries: [AsyncMutex<CacheEntry>; 2],
}

impl ScheduleCache {
    #[must_use]
    pub fn new(store: CacheStore) -> Self {
        Self {
            store,
            entries: [
                AsyncMutex::new(CacheEntry::default()),
                AsyncMutex::new(CacheEntry::default()),
            ],
        }
    }

    #[must_use]
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Holds the category until the returned guard drops.
    pub async fn lock(&self, category: Category) -> CategoryCache<'_> {
        CategoryCache {
            store: &self.store,
            category,
            entry: self.entries[category.index()].lock().await,
        }
    }
}

pub struct CategoryCache<'a> {
    store: &'a CacheStore,
    category: Category,
    entry: MutexGuard<'a, CacheEntry>,
}

impl CategoryCache<'_> {
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn last_refresh(&self) -> Option<DateTime<FixedOffset>> {
        self.entry.last_refresh
    }

    pub async fn load(&self) -> Vec<Game> {
        self.store.load(self.category).await
    }

    #[must_use]
    pub fn is_fresh(&self, now: &DateTime<FixedOffset>, cached: &[Game]) -> bool {
        is_fresh(self.category, self.entry.last_refresh, now, cached)
    }

    /// Writes the games and stamps this category, and only this one, as refreshed.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the cache file cannot be written
    pub async fn save(&mut self, games: &[Game], now: DateTime<FixedOffset>) -> Result<(), AppError> {
        self.store.save(self.category, games).await?;
        self.entry.last_refresh = Some(now);
        Ok(())
    }
}

/// `future` is fresh within the same clock hour and under an hour old;
/// `past` is fresh under fifteen minutes old. An empty cache is never fresh.
#[must_use]
pub fn is_fresh(
    category: Category,
    last_refresh: Option<DateTime<FixedOffset>>,
    now: &DateTime<FixedOffset>,
    cached: &[Game],
) -> bool {
    let Some(last_refresh) = last_refresh else {
        return false;
    };
    if cached.is_empty() {
        return false;
    }
    let elapsed = now.signed_duration_since(last_refresh).abs();
    match category {
        Category::Future => {
            last_refresh.hour() == now.hour() && elapsed < category.freshness_window()
        }
        Category::Past => elapsed < category.freshness_window(),
    }
}
