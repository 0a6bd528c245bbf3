use serde::{Deserialize, Serialize};

/// Roster entry. `api_id` is the provider's player id and the roster's primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub api_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub team_api_id: Option<i64>,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub team_abbreviation: String,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.team_abbreviation)
    }
}
