use chrono::{DateTime, Datelike, Utc};
use chrono_tz::America::New_York;

use crate::error::StatsError;

/// Month (league-local) in which a new regular season is considered started.
const SEASON_START_MONTH: u32 = 10;

fn parse_year(s: &str) -> Option<i32> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) { s.parse().ok() } else { None }
}

fn short_form(start: i32) -> String {
    format!("{}-{:02}", start, (start + 1) % 100)
}

/// Bring a season token into the provider's `YYYY-YY` form.
/// Accepts `2023-24` (returned as is) and `2023-2024`; the years must be consecutive.
pub fn normalize_season(season: &str) -> Result<String, StatsError> {
    let invalid = || StatsError::InvalidSeason(season.to_string());
    let (start, end) = season.trim().split_once('-').ok_or_else(invalid)?;
    let start_year = parse_year(start).ok_or_else(invalid)?;

    let consecutive = match end.len() {
        2 if end.bytes().all(|b| b.is_ascii_digit()) => end.parse::<i32>().ok() == Some((start_year + 1) % 100),
        4 => parse_year(end) == Some(start_year + 1),
        _ => false,
    };
    if !consecutive {
        return Err(invalid());
    }
    Ok(short_form(start_year))
}

/// The season in progress (or most recently finished) at `now`, judged on the league's Eastern clock.
pub fn current_season(now: DateTime<Utc>) -> String {
    let local = now.with_timezone(&New_York);
    let start = if local.month() >= SEASON_START_MONTH { local.year() } else { local.year() - 1 };
    short_form(start)
}
