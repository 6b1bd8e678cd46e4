use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, FixedOffset, Months};
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_UPSTREAM: &str = "https://www.basketball-reference.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Source of the raw schedule page for the month containing `now`.
#[async_trait]
pub trait ScheduleFetcher: Send + Sync {
    async fn fetch_schedule_page(&self, now: &DateTime<FixedOffset>) -> Result<String, AppError>;
}

/// Monthly schedule page for the season `now` belongs to. Seasons are named
/// after the year they end in, so the season is the year six months out.
#[must_use]
pub fn schedule_url(base_url: &str, now: &DateTime<FixedOffset>) -> String {
    let season = now
        .date_naive()
        .checked_add_months(Months::new(6))
        .map_or(now.year(), |d| d.year());
    let month = now.format("%B").to_string().to_lowercase();
    format!(
        "{}/leagues/NBA_{season}_games-{month}.html",
        base_url.trim_end_matches('/')
    )
}

pub struct BasketballReferenceClient {
    client: Client,
    base_url: String,
}

impl BasketballReferenceClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Io(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ScheduleFetcher for BasketballReferenceClient {
    async fn fetch_schedule_page(&self, now: &DateTime<FixedOffset>) -> Result<String, AppError> {
        let url = schedule_url(&self.base_url, now);
        info!(%url, "fetching schedule page");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, headers = ?resp.headers(), "schedule page refused");
            return Err(AppError::UpstreamBlocked(format!("{url} returned {status}")));
        }
        Ok(resp.text().await?)
    }
}
