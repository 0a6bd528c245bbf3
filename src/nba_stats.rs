use tracing::{error, info, info_span, instrument};

use crate::config::Config;
use crate::error::StatsError;
use crate::model::result_set::{RawRow, StatsDocument};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const REFERER: &str = "https://www.nba.com/";

pub const SEASON_TOTALS_SET: &str = "SeasonTotalsRegularSeason";
pub const GAME_LOG_SET: &str = "PlayerGameLog";

/// Team abbreviation the provider uses for a traded player's combined season row.
const COMBINED_TEAM: &str = "TOT";

/// Blocking client for the stats provider's player endpoints.
#[derive(Debug, Clone)]
pub struct NbaStats {
    agent: ureq::Agent,
    base_url: String,
}

impl NbaStats {
    pub fn new(config: &Config) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();
        NbaStats { agent, base_url: config.stats_base_url.clone() }
    }

    /// Fetch the career totals table and pick the row for `season`.
    /// `Ok(None)` means the player has no row for that season.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_season_totals(&self, player_id: i64, season: &str) -> Result<Option<RawRow>, StatsError> {
        let url = format!("{}/playercareerstats", self.base_url);
        let body = self.get(&url, &[("PlayerID", player_id.to_string()), ("PerMode", "Totals".to_string())])?;
        Self::parse_season_totals(&body, season)
    }

    /// Fetch every regular season game the player appeared in.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_game_log(&self, player_id: i64, season: &str) -> Result<Vec<RawRow>, StatsError> {
        let url = format!("{}/playergamelog", self.base_url);
        let params = [
            ("PlayerID", player_id.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", "Regular Season".to_string()),
        ];
        let body = self.get(&url, &params)?;
        let rows = Self::parse_game_log(&body)?;
        info!(games = rows.len(), "Fetched game log");
        Ok(rows)
    }

    fn get(&self, url: &str, params: &[(&str, String)]) -> Result<String, StatsError> {
        let mut request = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Referer", REFERER)
            .header("Accept", "application/json");
        for (key, value) in params {
            request = request.query(*key, value);
        }

        let response_result = {
            let _span = info_span!("stats_fetch", url = %url).entered();
            request.call()
        };
        match response_result {
            Ok(response) => {
                let mut body_reader = response.into_body();
                body_reader.read_to_string().map_err(|e| {
                    error!(error = %e, "Failed to read response body");
                    StatsError::Request(format!("Failed to read response body: {}", e))
                })
            }
            Err(e) => {
                error!(error = %e, url = %url, "Request failed");
                Err(StatsError::Request(e.to_string()))
            }
        }
    }

    /// Decode a `playergamelog` body (no network).
    #[instrument(level = "debug", skip(body), fields(bytes = body.len()))]
    pub fn parse_game_log(body: &str) -> Result<Vec<RawRow>, StatsError> {
        let doc: StatsDocument = serde_json::from_str(body)?;
        Ok(doc.take_result_set(GAME_LOG_SET)?.into_rows())
    }

    /// Decode a `playercareerstats` body and select the row for `season` (no network).
    #[instrument(level = "debug", skip(body), fields(bytes = body.len()))]
    pub fn parse_season_totals(body: &str, season: &str) -> Result<Option<RawRow>, StatsError> {
        let doc: StatsDocument = serde_json::from_str(body)?;
        let rows = doc.take_result_set(SEASON_TOTALS_SET)?.into_rows();
        Ok(Self::select_season(rows, season))
    }

    /// Exact match on `SEASON_ID`. A traded player has one row per team plus a
    /// combined `TOT` row; the combined row wins, otherwise the first match.
    pub fn select_season(rows: Vec<RawRow>, season: &str) -> Option<RawRow> {
        let mut matching: Vec<RawRow> = rows
            .into_iter()
            .filter(|r| r.text("SEASON_ID").as_deref() == Some(season))
            .collect();
        match matching
            .iter()
            .position(|r| r.text("TEAM_ABBREVIATION").as_deref() == Some(COMBINED_TEAM))
        {
            Some(i) => Some(matching.swap_remove(i)),
            None if matching.is_empty() => None,
            None => Some(matching.remove(0)),
        }
    }
}
