//! Head-to-head reconciliation of two game logs.
//!
//! The join is an intersection of game ids followed by an independent filter
//! of each side; each filtered side is then aggregated on its own.

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use crate::error::StatsError;
use crate::model::aggregate::{AggregateRecord, HeadToHead};
use crate::model::result_set::RawRow;
use crate::model::rows::{GameLog, GameRow};
use crate::stats;

const NO_GAME_LOG: &str = "No game log data for one or both players";

/// Anything carrying the game identifier shared by both players' logs.
trait GameKeyed {
    fn game_key(&self) -> Option<String>;
}

impl GameKeyed for GameRow {
    fn game_key(&self) -> Option<String> {
        Some(self.game_id.clone())
    }
}

impl GameKeyed for RawRow {
    fn game_key(&self) -> Option<String> {
        self.text("GAME_ID")
    }
}

/// Game ids of one log; fails on a row without an id or on a repeated id.
fn unique_keys<T: GameKeyed>(rows: &[T]) -> Result<HashSet<String>, StatsError> {
    let mut keys = HashSet::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let key = row
            .game_key()
            .ok_or_else(|| StatsError::MissingField { field: "GAME_ID".to_string(), row: i })?;
        if keys.contains(&key) {
            return Err(StatsError::DuplicateGame(key));
        }
        keys.insert(key);
    }
    Ok(keys)
}

fn only_common<'a, T: GameKeyed>(rows: &'a [T], common: &HashSet<String>) -> Vec<&'a T> {
    rows.iter()
        .filter(|r| r.game_key().is_some_and(|k| common.contains(&k)))
        .collect()
}

/// Aggregate both players over the games they both appeared in.
#[instrument(level = "debug", skip_all, fields(games_a = log_a.len(), games_b = log_b.len()))]
pub fn reconcile(log_a: &GameLog, log_b: &GameLog) -> HeadToHead {
    if log_a.is_empty() || log_b.is_empty() {
        return HeadToHead::no_games(NO_GAME_LOG);
    }

    let ids_b = log_b.game_ids();
    let common: HashSet<String> = log_a
        .game_ids()
        .into_iter()
        .filter(|id| ids_b.contains(id))
        .map(str::to_string)
        .collect();
    if common.is_empty() {
        return HeadToHead::no_games(StatsError::NoCommonGames.to_string());
    }
    debug!(common_games = common.len(), "Reconciled game logs");

    HeadToHead {
        player_a: stats::aggregate_games(only_common(log_a.rows(), &common)),
        player_b: stats::aggregate_games(only_common(log_b.rows(), &common)),
    }
}

/// Reconcile raw provider rows. Ids are matched before any stat is coerced, so a
/// non-numeric cell on one side leaves the other side's record intact.
#[instrument(level = "info", skip_all, fields(rows_a = rows_a.len(), rows_b = rows_b.len()))]
pub fn reconcile_raw(rows_a: &[RawRow], rows_b: &[RawRow]) -> HeadToHead {
    if rows_a.is_empty() || rows_b.is_empty() {
        return HeadToHead::no_games(NO_GAME_LOG);
    }

    let (ids_a, ids_b) = match (unique_keys(rows_a), unique_keys(rows_b)) {
        (Ok(a), Ok(b)) => (a, b),
        (a, b) => {
            let side = |r: Result<HashSet<String>, StatsError>| match r {
                Ok(_) => AggregateRecord::empty("Head-to-head unavailable: opponent game log is invalid"),
                Err(e) => AggregateRecord::empty(e.to_string()),
            };
            warn!("Invalid game log, skipping head-to-head");
            return HeadToHead { player_a: side(a), player_b: side(b) };
        }
    };

    let common: HashSet<String> = ids_a.intersection(&ids_b).cloned().collect();
    if common.is_empty() {
        info!("No common games between players");
        return HeadToHead::no_games(StatsError::NoCommonGames.to_string());
    }
    info!(common_games = common.len(), "Reconciled game logs");

    HeadToHead {
        player_a: stats::game_log_record(only_common(rows_a, &common)),
        player_b: stats::game_log_record(only_common(rows_b, &common)),
    }
}
