use serde::{Deserialize, Serialize};

/// The sixteen counting stats tracked for every boxscore or season row.
/// Declaration order is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatField {
    Min,
    Fgm,
    Fga,
    Fg3m,
    Fg3a,
    Ftm,
    Fta,
    Oreb,
    Dreb,
    Reb,
    Ast,
    Stl,
    Blk,
    Tov,
    Pf,
    Pts,
}

impl StatField {
    pub const COUNT: usize = 16;

    pub const ALL: [StatField; Self::COUNT] = [
        StatField::Min,
        StatField::Fgm,
        StatField::Fga,
        StatField::Fg3m,
        StatField::Fg3a,
        StatField::Ftm,
        StatField::Fta,
        StatField::Oreb,
        StatField::Dreb,
        StatField::Reb,
        StatField::Ast,
        StatField::Stl,
        StatField::Blk,
        StatField::Tov,
        StatField::Pf,
        StatField::Pts,
    ];

    /// Column header used by the provider and the output maps.
    pub fn name(self) -> &'static str {
        match self {
            StatField::Min => "MIN",
            StatField::Fgm => "FGM",
            StatField::Fga => "FGA",
            StatField::Fg3m => "FG3M",
            StatField::Fg3a => "FG3A",
            StatField::Ftm => "FTM",
            StatField::Fta => "FTA",
            StatField::Oreb => "OREB",
            StatField::Dreb => "DREB",
            StatField::Reb => "REB",
            StatField::Ast => "AST",
            StatField::Stl => "STL",
            StatField::Blk => "BLK",
            StatField::Tov => "TOV",
            StatField::Pf => "PF",
            StatField::Pts => "PTS",
        }
    }

    /// Position of this field inside a `StatLine`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
