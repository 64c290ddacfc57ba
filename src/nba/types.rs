use crate::cli::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests;

/// Partial team identification. Any field may be missing before tip-off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub score: Option<i32>,
}

impl TeamInfo {
    /// Abbreviation, or `-` when unknown
    pub fn abbreviation_or_dash(&self) -> &str {
        self.abbreviation.as_deref().unwrap_or("-")
    }

    /// Score, or `0` when not yet reported
    pub fn score_or_zero(&self) -> i32 {
        self.score.unwrap_or(0)
    }
}

/// One scheduled or played game from `/games/summary`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct GameSummary {
    pub game_id: String,
    pub status: String,
    /// Kept as the server's string; not parsed into a timestamp.
    pub start_time: String,
    pub arena: String,
    pub home_team: TeamInfo,
    pub away_team: TeamInfo,
}

impl GameSummary {
    pub fn id(&self) -> &str {
        &self.game_id
    }

    /// `"BOS @ LAL"` style label
    pub fn matchup(&self) -> String {
        format!(
            "{} @ {}",
            self.away_team.abbreviation_or_dash(),
            self.home_team.abbreviation_or_dash()
        )
    }

    /// True if either side carries exactly this abbreviation.
    pub fn involves(&self, abbreviation: &str) -> bool {
        self.home_team.abbreviation.as_deref() == Some(abbreviation)
            || self.away_team.abbreviation.as_deref() == Some(abbreviation)
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>3}-{:<3} {} | {} | {}",
            self.matchup(),
            self.away_team.score_or_zero(),
            self.home_team.score_or_zero(),
            self.status,
            self.start_time,
            self.arena
        )
    }
}

/// Top-level envelope for `/games/summary`
#[derive(Debug, Deserialize)]
pub struct GamesEnvelope {
    pub games: Vec<GameSummary>,
}

/// Search result from `/players/search`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

impl Player {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Retired"
        }
    }
}

/// One regular season's totals for a player
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CareerRow {
    /// Season label, e.g. `"2023-24"`
    #[serde(rename = "SEASON_ID")]
    pub season: String,
    #[serde(rename = "PTS")]
    pub pts: f64,
    #[serde(rename = "GP")]
    pub games_played: u32,
    #[serde(rename = "TEAM_ABBREVIATION")]
    pub team_abbreviation: String,
}

impl CareerRow {
    /// Starting year of the season label, if it begins with four digits.
    pub fn start_year(&self) -> Option<i32> {
        self.season.get(..4)?.parse().ok()
    }
}

/// Top-level envelope for `/player/{id}/career`
#[derive(Debug, Deserialize)]
pub struct CareerEnvelope {
    #[serde(rename = "SeasonTotalsRegularSeason")]
    pub season_totals: Vec<CareerRow>,
}

/// Model output from `/player/{id}/predict`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Prediction {
    pub last_season: i32,
    #[serde(rename = "predicted_points_next_season")]
    pub predicted: f64,
}

impl Prediction {
    /// Season the prediction is for.
    pub fn target_season(&self) -> i32 {
        self.last_season + 1
    }
}

/// `/player/{id}/predict` answers with either a prediction or an error body.
///
/// The prediction shape is tried first, so a body carrying both a prediction
/// and an `error` key still yields the prediction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PredictionPayload {
    Available(Prediction),
    Unavailable { error: String },
}

impl PredictionPayload {
    pub fn into_prediction(self) -> Option<Prediction> {
        match self {
            PredictionPayload::Available(p) => Some(p),
            PredictionPayload::Unavailable { .. } => None,
        }
    }
}

/// One point of a player's points-per-season series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonPoints {
    pub year: i32,
    pub points: f64,
    pub predicted: bool,
}
