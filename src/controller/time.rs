use crate::error::AppError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::{Tz, US::Eastern};
use std::str::FromStr;

/// How the schedule page writes a game day plus our normalized start time,
/// e.g. `Fri, Mar 1, 2024 7:00PM`.
const SCHEDULE_FORMAT: &str = "%a, %b %d, %Y %I:%M%p";

/// Zone that game start times are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Local,
    Named(Tz),
}

impl DisplayZone {
    #[must_use]
    pub fn localize<T: TimeZone>(&self, instant: &DateTime<T>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => instant.with_timezone(&chrono::Local).fixed_offset(),
            Self::Named(tz) => instant.with_timezone(tz).fixed_offset(),
        }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.localize(&Utc::now())
    }
}

impl FromStr for DisplayZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        s.parse::<Tz>()
            .map(Self::Named)
            .map_err(|e| format!("unknown timezone '{s}': {e}"))
    }
}

/// Converts a schedule row's day and compact start time (`7:00p`) from
/// US/Eastern wall clock into `zone`.
///
/// Returns `Ok(None)` when the start time is blank, i.e. not announced yet.
///
/// # Errors
///
/// Will return `Err` if the date or time tokens do not parse, or if the
/// wall-clock time falls in a daylight-saving gap.
pub fn game_to_local_time(
    game_date: &str,
    game_start_time: &str,
    zone: &DisplayZone,
) -> Result<Option<DateTime<FixedOffset>>, AppError> {
    let start = game_start_time.trim();
    let Some(meridiem) = start.chars().last() else {
        return Ok(None);
    };
    if !matches!(meridiem.to_ascii_lowercase(), 'a' | 'p') {
        return Err(AppError::Parse(format!(
            "start time '{start}' does not end in a or p"
        )));
    }

    let clock = &start[..start.len() - meridiem.len_utf8()];
    let stamp = format!(
        "{} {}{}M",
        game_date.trim(),
        clock,
        meridiem.to_ascii_uppercase()
    );
    let naive = NaiveDateTime::parse_from_str(&stamp, SCHEDULE_FORMAT)
        .map_err(|e| AppError::Parse(format!("bad game time '{stamp}': {e}")))?;

    // fall-back hour is ambiguous; take the first occurrence
    let eastern = Eastern
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::Parse(format!("'{stamp}' does not exist in US/Eastern")))?;

    Ok(Some(zone.localize(&eastern)))
}

/// Whole hours from `now` until `game_time`, truncated toward zero. Negative
/// once the game has started.
#[must_use]
pub fn diff_in_hours(now: &DateTime<FixedOffset>, game_time: &DateTime<FixedOffset>) -> i64 {
    game_time.signed_duration_since(*now).num_hours()
}

#[must_use]
pub fn to_iso8601(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
