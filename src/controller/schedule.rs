use crate::controller::cache::ScheduleCache;
use crate::controller::fetcher::ScheduleFetcher;
use crate::controller::parser::parse_schedule;
use crate::controller::time::DisplayZone;
use crate::error::AppError;
use crate::model::{Category, Game};
use chrono::{DateTime, FixedOffset};
use tracing::info;

/// Everything the handlers share, handed to actix as `web::Data`.
pub struct AppState {
    pub cache: ScheduleCache,
    pub fetcher: Box<dyn ScheduleFetcher>,
    pub zone: DisplayZone,
}

impl AppState {
    #[must_use]
    pub fn new(cache: ScheduleCache, fetcher: Box<dyn ScheduleFetcher>, zone: DisplayZone) -> Self {
        Self {
            cache,
            fetcher,
            zone,
        }
    }

    /// # Errors
    ///
    /// See [`load_games`]
    pub async fn games(&self, category: Category) -> Result<Vec<Game>, AppError> {
        load_games(
            &self.cache,
            self.fetcher.as_ref(),
            category,
            self.zone.now(),
            &self.zone,
        )
        .await
    }
}

/// Serves the category from cache while fresh, otherwise scrapes, stores and
/// returns a new list. The category stays locked for the whole refresh, so
/// concurrent callers wait for it instead of hitting upstream again.
///
/// # Errors
///
/// Will return `Err` if the page cannot be fetched or parsed, or the cache
/// file cannot be written
pub async fn load_games(
    cache: &ScheduleCache,
    fetcher: &dyn ScheduleFetcher,
    category: Category,
    now: DateTime<FixedOffset>,
    zone: &DisplayZone,
) -> Result<Vec<Game>, AppError> {
    let mut entry = cache.lock(category).await;
    let cached = entry.load().await;
    if entry.is_fresh(&now, &cached) {
        info!(%category, games = cached.len(), "used cache");
        return Ok(cached);
    }

    info!(
        %category,
        last_refresh = ?entry.last_refresh(),
        now = %now,
        cached = cached.len(),
        "cache stale, scraping"
    );
    let page = fetcher.fetch_schedule_page(&now).await?;
    let games = parse_schedule(&page, category, &now, zone)?;
    entry.save(&games, now).await?;
    info!(%category, games = games.len(), "cache refreshed");
    Ok(games)
}
