#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Timelike};
use chrono_tz::{Tz, US::Eastern};
use rusty_hoops::AppError;
use rusty_hoops::controller::fetcher::ScheduleFetcher;
use rusty_hoops::controller::time::DisplayZone;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const EASTERN: DisplayZone = DisplayZone::Named(Eastern);

/// Noon Eastern on a game day, with whole-hour offsets giving exact diffs.
pub fn fixed_now() -> DateTime<FixedOffset> {
    Eastern
        .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid eastern time")
        .fixed_offset()
}

pub fn tip_off(now: &DateTime<FixedOffset>, hours_from_now: i64) -> DateTime<Tz> {
    (*now + Duration::hours(hours_from_now)).with_timezone(&Eastern)
}

/// The site's compact clock, e.g. "7:00p".
pub fn compact_time(tip: &DateTime<Tz>) -> String {
    let meridiem = if tip.hour() >= 12 { "p" } else { "a" };
    format!("{}{meridiem}", tip.format("%-I:%M"))
}

pub fn game_row(
    tip: &DateTime<Tz>,
    away: (&str, &str),
    home: (&str, &str),
    away_pts: &str,
    home_pts: &str,
) -> String {
    let date = tip.format("%a, %b %-d, %Y");
    let key = tip.format("%Y%m%d%H%M");
    format!(
        r#"<tr>
  <th scope="row" class="left" data-stat="date_game" csk="{key}{home_code}"><a href="/boxscores/index.fcgi">{date}</a></th>
  <td class="right" data-stat="game_start_time">{time}</td>
  <td class="left" data-stat="visitor_team_name" csk="{away_code}.{key}"><a href="/teams/{away_code}/2024.html">{away_name}</a></td>
  <td class="right" data-stat="visitor_pts">{away_pts}</td>
  <td class="left" data-stat="home_team_name" csk="{home_code}.{key}"><a href="/teams/{home_code}/2024.html">{home_name}</a></td>
  <td class="right" data-stat="home_pts">{home_pts}</td>
</tr>"#,
        time = compact_time(tip),
        away_code = away.0,
        away_name = away.1,
        home_code = home.0,
        home_name = home.1,
    )
}

/// Row for a matchup whose start time is still blank on the site.
pub fn unscheduled_row(date: &str) -> String {
    format!(
        r#"<tr>
  <th scope="row" data-stat="date_game"><a href="/boxscores/index.fcgi">{date}</a></th>
  <td data-stat="game_start_time"></td>
  <td data-stat="visitor_team_name" csk="TBD.0"><a>To Be Determined</a></td>
  <td data-stat="visitor_pts"></td>
  <td data-stat="home_team_name" csk="TBD.0"><a>To Be Determined</a></td>
  <td data-stat="home_pts"></td>
</tr>"#
    )
}

pub fn separator_row() -> String {
    r#"<tr class="thead"><th>Date</th><td>Start (ET)</td></tr>"#.to_string()
}

pub fn schedule_page(rows: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><body>
<table id="schedule" class="sortable stats_table">
<thead><tr><th>Date</th><th>Start (ET)</th><th>Visitor/Neutral</th><th>PTS</th><th>Home/Neutral</th><th>PTS</th></tr></thead>
<tbody>
{}
</tbody>
</table>
</body></html>"#,
        rows.join("\n")
    )
}

pub fn blocked_page() -> String {
    "<html><body><h1>Too Many Requests</h1></body></html>".to_string()
}

/// Serves a canned page and counts how often it was asked.
pub struct StubFetcher {
    pub page: String,
    pub calls: Arc<AtomicUsize>,
}

impl StubFetcher {
    pub fn new(page: String) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                page,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl ScheduleFetcher for StubFetcher {
    async fn fetch_schedule_page(&self, _now: &DateTime<FixedOffset>) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.page.clone())
    }
}

/// Page spanning both windows around [`fixed_now`], oldest first.
pub fn mixed_page(now: &DateTime<FixedOffset>) -> String {
    schedule_page(&[
        game_row(&tip_off(now, -30), ("MIA", "Miami Heat"), ("NYK", "New York Knicks"), "98", "104"),
        game_row(&tip_off(now, -20), ("GSW", "Golden State Warriors"), ("BOS", "Boston Celtics"), "110", "112"),
        separator_row(),
        game_row(&tip_off(now, -1), ("LAL", "Los Angeles Lakers"), ("DEN", "Denver Nuggets"), "", ""),
        unscheduled_row("Fri, Mar 1, 2024"),
        game_row(&tip_off(now, 3), ("PHI", "Philadelphia 76ers"), ("MIL", "Milwaukee Bucks"), "", ""),
        game_row(&tip_off(now, 20), ("CHI", "Chicago Bulls"), ("ATL", "Atlanta Hawks"), "", ""),
        game_row(&tip_off(now, 30), ("DAL", "Dallas Mavericks"), ("PHO", "Phoenix Suns"), "", ""),
        game_row(&tip_off(now, 2), ("UTA", "Utah Jazz"), ("SAC", "Sacramento Kings"), "", ""),
    ])
}
