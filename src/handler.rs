use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::error::StatsError;
use crate::h2h;
use crate::model::aggregate::{AggregateRecord, ComparisonResult, HeadToHead, PlayerComparison};
use crate::model::player::Player;
use crate::model::result_set::RawRow;
use crate::nba_stats::NbaStats;
use crate::roster::Roster;
use crate::season::{current_season, normalize_season};
use crate::stats;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Request {
    Compare {
        player_a_id: i64,
        player_b_id: i64,
        /// `YYYY-YY` or `YYYY-YYYY`; defaults to the current season.
        #[serde(default)]
        season: Option<String>,
    },
    Players,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
}

/// Everything fetched for one player before the two sides are combined.
#[derive(Debug, Clone)]
pub struct PlayerData {
    pub player_id: i64,
    pub season_stats: AggregateRecord,
    pub game_log: Result<Vec<RawRow>, String>,
}

impl PlayerData {
    fn failed(player_id: i64, reason: String) -> Self {
        PlayerData { player_id, season_stats: AggregateRecord::empty(reason.clone()), game_log: Err(reason) }
    }
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let config = Config::from_env();

    match event.payload {
        Request::Players => {
            let players = Roster::load(&config.roster_path)?.list();
            let message = format!("{} players", players.len());
            info!(message = %message, "Listed roster");
            Ok(Response { message, comparison: None, players: Some(players) })
        }
        Request::Compare { player_a_id, player_b_id, season } => {
            let season = match season {
                Some(s) => normalize_season(&s)?,
                None => current_season(chrono::Utc::now()),
            };
            let comparison = compare(&config, player_a_id, player_b_id, &season).await;
            let message = format!(
                "Compared {} and {} for {} ({} common games)",
                player_a_id, player_b_id, season, comparison.head_to_head.player_a.game_count
            );
            info!(message = %message, "Prepared comparison");
            Ok(Response { message, comparison: Some(comparison), players: None })
        }
    }
}

/// Fetch both players concurrently and combine them. Per-player failures end up
/// in the records' error fields; this never fails as a whole.
pub async fn compare(config: &Config, player_a_id: i64, player_b_id: i64, season: &str) -> ComparisonResult {
    let client = NbaStats::new(config);
    let handle_a = spawn_fetch(&client, player_a_id, season);
    let handle_b = spawn_fetch(&client, player_b_id, season);

    let a = join_fetch(handle_a, player_a_id).await;
    let b = join_fetch(handle_b, player_b_id).await;
    build_comparison(season, a, b)
}

fn spawn_fetch(client: &NbaStats, player_id: i64, season: &str) -> tokio::task::JoinHandle<PlayerData> {
    // spawn_blocking needs 'static owned inputs
    let client = client.clone();
    let season = season.to_string();
    tokio::task::spawn_blocking(move || fetch_player(&client, player_id, &season))
}

async fn join_fetch(handle: tokio::task::JoinHandle<PlayerData>, player_id: i64) -> PlayerData {
    match handle.await {
        Ok(data) => data,
        Err(e) => {
            error!(error = %e, player_id, "Player fetch task failed");
            PlayerData::failed(player_id, format!("Player fetch task failed: {}", e))
        }
    }
}

fn fetch_player(client: &NbaStats, player_id: i64, season: &str) -> PlayerData {
    let season_stats = match client.fetch_season_totals(player_id, season) {
        Ok(Some(raw)) => stats::season_record(&raw),
        Ok(None) => {
            let e = StatsError::MissingData { player_id, season: season.to_string() };
            info!(error = %e, "No season totals");
            AggregateRecord::empty(e.to_string())
        }
        Err(e) => AggregateRecord::empty(e.to_string()),
    };
    let game_log = client.fetch_game_log(player_id, season).map_err(|e| e.to_string());
    PlayerData { player_id, season_stats, game_log }
}

/// Combine two fetched players into the response payload (no network).
pub fn build_comparison(season: &str, a: PlayerData, b: PlayerData) -> ComparisonResult {
    let head_to_head = match (&a.game_log, &b.game_log) {
        (Ok(log_a), Ok(log_b)) => h2h::reconcile_raw(log_a, log_b),
        (log_a, log_b) => {
            let side = |log: &Result<Vec<RawRow>, String>| match log {
                Ok(_) => AggregateRecord::empty("Head-to-head unavailable: opponent game log could not be fetched"),
                Err(e) => AggregateRecord::empty(e.clone()),
            };
            HeadToHead { player_a: side(log_a), player_b: side(log_b) }
        }
    };

    ComparisonResult {
        season: season.to_string(),
        player_a: PlayerComparison { player_id: a.player_id, season_stats: a.season_stats },
        player_b: PlayerComparison { player_id: b.player_id, season_stats: b.season_stats },
        head_to_head,
    }
}
