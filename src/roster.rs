use tracing::{error, info, instrument};

use crate::error::StatsError;
use crate::model::player::Player;

/// Read-only view of the stored player roster.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Load the roster from a JSON array file on disk.
    #[instrument(level = "info")]
    pub fn load(path: &str) -> Result<Self, StatsError> {
        let body = std::fs::read_to_string(path).map_err(|e| {
            error!(error = %e, "Failed to read roster file");
            StatsError::Roster(format!("{}: {}", path, e))
        })?;
        let roster = Self::from_json(&body)?;
        info!(players = roster.players.len(), "Loaded roster");
        Ok(roster)
    }

    /// Parse a roster from a raw JSON body (no filesystem).
    pub fn from_json(body: &str) -> Result<Self, StatsError> {
        let players: Vec<Player> =
            serde_json::from_str(body).map_err(|e| StatsError::Roster(e.to_string()))?;
        Ok(Roster { players })
    }

    /// All players ordered by last name, then first name.
    pub fn list(&self) -> Vec<Player> {
        let mut players = self.players.clone();
        players.sort_by(|a, b| a.last_name.cmp(&b.last_name).then_with(|| a.first_name.cmp(&b.first_name)));
        players
    }
}
