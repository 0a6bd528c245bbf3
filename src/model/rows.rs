use std::collections::HashSet;
use std::ops::Add;

use crate::error::StatsError;
use crate::model::result_set::RawRow;
use crate::model::stat_field::StatField;
use crate::model::stat_value::StatValue;

/// The sixteen counting stats of one row, indexed by `StatField`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatLine([StatValue; StatField::COUNT]);

impl StatLine {
    pub fn get(&self, field: StatField) -> StatValue {
        self.0[field.index()]
    }

    pub fn set(&mut self, field: StatField, value: StatValue) {
        self.0[field.index()] = value;
    }

    /// Build a line from the given pairs; unnamed fields are zero.
    pub fn from_pairs(pairs: &[(StatField, StatValue)]) -> Self {
        let mut line = StatLine::default();
        for (field, value) in pairs {
            line.set(*field, *value);
        }
        line
    }

    /// Coerce every counting stat of a raw provider row. The first bad field fails the row.
    pub fn from_raw(raw: &RawRow, row: usize) -> Result<Self, StatsError> {
        let mut line = StatLine::default();
        for field in StatField::ALL {
            line.set(field, raw.stat(field, row)?);
        }
        Ok(line)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatField, StatValue)> + '_ {
        StatField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

impl Add for StatLine {
    type Output = StatLine;

    fn add(self, rhs: StatLine) -> StatLine {
        let mut out = self;
        for field in StatField::ALL {
            out.set(field, self.get(field) + rhs.get(field));
        }
        out
    }
}

/// One player's boxscore line for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub game_id: String,
    pub stats: StatLine,
}

impl GameRow {
    pub fn new(game_id: impl Into<String>, stats: StatLine) -> Self {
        GameRow { game_id: game_id.into(), stats }
    }

    pub fn from_raw(raw: &RawRow, row: usize) -> Result<Self, StatsError> {
        let game_id = raw
            .text("GAME_ID")
            .ok_or_else(|| StatsError::MissingField { field: "GAME_ID".to_string(), row })?;
        Ok(GameRow { game_id, stats: StatLine::from_raw(raw, row)? })
    }
}

/// One player's cumulative totals for one season (and one team, for traded players).
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTotalsRow {
    pub season_id: String,
    pub team_id: Option<i64>,
    pub team_abbreviation: Option<String>,
    pub games_played: i64,
    pub stats: StatLine,
}

impl SeasonTotalsRow {
    pub fn from_raw(raw: &RawRow, row: usize) -> Result<Self, StatsError> {
        let season_id = raw
            .text("SEASON_ID")
            .ok_or_else(|| StatsError::MissingField { field: "SEASON_ID".to_string(), row })?;
        let games_played = match raw.number("GP", row)? {
            StatValue::Int(v) if v >= 0 => v,
            StatValue::Float(v) if v >= 0.0 && v.fract() == 0.0 && v <= i64::MAX as f64 => v as i64,
            // Games played must be a whole, non-negative count
            _ => {
                return Err(StatsError::NonNumericField {
                    field: "GP".to_string(),
                    row,
                    value: raw.get("GP").map(|v| v.to_string()).unwrap_or_default(),
                });
            }
        };
        let team_id = match raw.get("TEAM_ID") {
            Some(v) => StatValue::coerce(v).map(|n| n.as_f64() as i64),
            None => None,
        };
        Ok(SeasonTotalsRow {
            season_id,
            team_id,
            team_abbreviation: raw.text("TEAM_ABBREVIATION"),
            games_played,
            stats: StatLine::from_raw(raw, row)?,
        })
    }
}

/// A player's game log with unique game ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameLog {
    rows: Vec<GameRow>,
}

impl GameLog {
    /// Rejects a log that lists the same game twice.
    pub fn new(rows: Vec<GameRow>) -> Result<Self, StatsError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.game_id.as_str()) {
                return Err(StatsError::DuplicateGame(row.game_id.clone()));
            }
        }
        Ok(GameLog { rows })
    }

    /// Coerce raw provider rows into a validated log.
    pub fn from_raw(raw_rows: &[RawRow]) -> Result<Self, StatsError> {
        let rows = raw_rows
            .iter()
            .enumerate()
            .map(|(i, raw)| GameRow::from_raw(raw, i))
            .collect::<Result<Vec<_>, _>>()?;
        GameLog::new(rows)
    }

    pub fn rows(&self) -> &[GameRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn game_ids(&self) -> HashSet<&str> {
        self.rows.iter().map(|r| r.game_id.as_str()).collect()
    }
}
