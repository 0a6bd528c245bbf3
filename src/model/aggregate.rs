use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::stat_field::StatField;
use crate::model::stat_value::StatValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedStats {
    pub efg_pct: f64,
    pub tsp_pct: f64,
}

/// Derived view over one player's rows: counts, per-game averages, efficiency and raw totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub game_count: i64,
    pub avg_stats: BTreeMap<StatField, f64>,
    pub advanced_stats: AdvancedStats,
    pub total_stats: BTreeMap<StatField, StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AggregateRecord {
    /// Zero-filled record carrying an explanation; used for every degraded outcome.
    pub fn empty(error: impl Into<String>) -> Self {
        AggregateRecord {
            game_count: 0,
            avg_stats: StatField::ALL.into_iter().map(|f| (f, 0.0)).collect(),
            advanced_stats: AdvancedStats::default(),
            total_stats: StatField::ALL.into_iter().map(|f| (f, StatValue::Int(0))).collect(),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Stats restricted to the games both players appeared in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub player_a: AggregateRecord,
    pub player_b: AggregateRecord,
}

impl HeadToHead {
    /// Same sentinel on both sides.
    pub fn no_games(reason: impl Into<String>) -> Self {
        let record = AggregateRecord::empty(reason);
        HeadToHead { player_a: record.clone(), player_b: record }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerComparison {
    pub player_id: i64,
    pub season_stats: AggregateRecord,
}

/// Full response for one comparison request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub season: String,
    pub player_a: PlayerComparison,
    pub player_b: PlayerComparison,
    pub head_to_head: HeadToHead,
}
