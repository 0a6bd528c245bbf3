//! Error types shared by the provider client, the aggregation core and the handler.
//!
//! None of these escape a comparison: the core turns every variant into an
//! `AggregateRecord` carrying the rendered message.

use thiserror::Error;

use crate::model::stat_field::StatField;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("No stats found for player {player_id} in season {season}")]
    MissingData { player_id: i64, season: String },

    #[error("Field {field} is missing from row {row}")]
    MissingField { field: String, row: usize },

    #[error("Field {field} in row {row} is not numeric: {value}")]
    NonNumericField { field: String, row: usize, value: String },

    #[error("Game {0} appears more than once in the game log")]
    DuplicateGame(String),

    #[error("No common games found between the two players")]
    NoCommonGames,

    #[error("Result set {0} not found in provider response")]
    MissingResultSet(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid season {0}, expected YYYY-YY or YYYY-YYYY")]
    InvalidSeason(String),

    #[error("Failed to load roster: {0}")]
    Roster(String),
}

impl StatsError {
    /// Shorthand used by the row coercion code, which knows the field as a `StatField`.
    pub fn non_numeric(field: StatField, row: usize, value: &serde_json::Value) -> Self {
        StatsError::NonNumericField { field: field.name().to_string(), row, value: value.to_string() }
    }
}
