//! Aggregation of per-game or per-season rows into a single `AggregateRecord`.
//!
//! Everything here is a pure function of its input. Division by zero is an
//! expected case (injured players, zero-attempt games) and resolves to `0`.

use std::collections::BTreeMap;

use tracing::warn;

use crate::model::aggregate::{AdvancedStats, AggregateRecord};
use crate::model::result_set::RawRow;
use crate::model::rows::{GameRow, SeasonTotalsRow, StatLine};
use crate::model::stat_field::StatField;

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `(FGM + 0.5 * FG3M) / FGA`, or 0 when no shots were attempted.
pub fn effective_fg_pct(totals: &StatLine) -> f64 {
    let fga = totals.get(StatField::Fga).as_f64();
    if fga == 0.0 {
        return 0.0;
    }
    let fgm = totals.get(StatField::Fgm).as_f64();
    let fg3m = totals.get(StatField::Fg3m).as_f64();
    (fgm + 0.5 * fg3m) / fga
}

/// `PTS / (2 * (FGA + 0.44 * FTA))`, or 0 when the denominator is 0.
pub fn true_shooting_pct(totals: &StatLine) -> f64 {
    let denominator =
        2.0 * (totals.get(StatField::Fga).as_f64() + 0.44 * totals.get(StatField::Fta).as_f64());
    if denominator == 0.0 {
        return 0.0;
    }
    totals.get(StatField::Pts).as_f64() / denominator
}

fn build_record(game_count: i64, totals: StatLine) -> AggregateRecord {
    let avg_stats: BTreeMap<StatField, f64> = totals
        .iter()
        .map(|(field, total)| {
            let avg = if game_count == 0 { 0.0 } else { round_to(total.as_f64() / game_count as f64, 1) };
            (field, avg)
        })
        .collect();

    AggregateRecord {
        game_count,
        avg_stats,
        advanced_stats: AdvancedStats {
            efg_pct: round_to(effective_fg_pct(&totals), 3),
            tsp_pct: round_to(true_shooting_pct(&totals), 3),
        },
        total_stats: totals.iter().collect(),
        error: None,
    }
}

/// Sum a set of game rows. The game count is the number of rows.
pub fn aggregate_games<'a, I>(rows: I) -> AggregateRecord
where
    I: IntoIterator<Item = &'a GameRow>,
{
    let (count, totals) = rows
        .into_iter()
        .fold((0i64, StatLine::default()), |(n, totals), row| (n + 1, totals + row.stats));
    build_record(count, totals)
}

/// A season totals row is already summed; its games-played column is the game count.
pub fn aggregate_season(row: &SeasonTotalsRow) -> AggregateRecord {
    build_record(row.games_played, row.stats)
}

/// Coerce raw game rows and aggregate them. A bad cell fails this record only.
pub fn game_log_record<'a, I>(raw_rows: I) -> AggregateRecord
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let rows = raw_rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| GameRow::from_raw(raw, i))
        .collect::<Result<Vec<_>, _>>();
    match rows {
        Ok(rows) => aggregate_games(&rows),
        Err(e) => {
            warn!(error = %e, "Game log aggregation failed");
            AggregateRecord::empty(e.to_string())
        }
    }
}

/// Coerce a raw season totals row and aggregate it.
pub fn season_record(raw: &RawRow) -> AggregateRecord {
    match SeasonTotalsRow::from_raw(raw, 0) {
        Ok(row) => aggregate_season(&row),
        Err(e) => {
            warn!(error = %e, "Season totals aggregation failed");
            AggregateRecord::empty(e.to_string())
        }
    }
}
