//! Decoders for the four NBA API response shapes.
//!
//! Each takes the raw body bytes and fails with [`NbaError::Decode`] when the
//! payload does not match the expected schema.
//!
//! [`NbaError::Decode`]: crate::error::NbaError::Decode

use std::collections::HashSet;

use tracing::warn;

use crate::{
    nba::types::{
        CareerEnvelope, CareerRow, GameSummary, GamesEnvelope, Player, PredictionPayload,
    },
    Result,
};

/// `{"games": [...]}`. A repeated `game_id` keeps its first occurrence.
pub fn decode_games(bytes: &[u8]) -> Result<Vec<GameSummary>> {
    let envelope: GamesEnvelope = serde_json::from_slice(bytes)?;

    let mut seen = HashSet::new();
    let total = envelope.games.len();
    let games: Vec<GameSummary> = envelope
        .games
        .into_iter()
        .filter(|g| seen.insert(g.game_id.clone()))
        .collect();

    if games.len() != total {
        warn!(
            dropped = total - games.len(),
            "games payload repeated game_id values"
        );
    }
    Ok(games)
}

/// Flat `[Player, ...]` array
pub fn decode_players(bytes: &[u8]) -> Result<Vec<Player>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// `{"SeasonTotalsRegularSeason": [...]}`
pub fn decode_career(bytes: &[u8]) -> Result<Vec<CareerRow>> {
    let envelope: CareerEnvelope = serde_json::from_slice(bytes)?;
    Ok(envelope.season_totals)
}

/// Prediction object or `{"error": "..."}`
pub fn decode_prediction(bytes: &[u8]) -> Result<PredictionPayload> {
    Ok(serde_json::from_slice(bytes)?)
}
