//! Route functions for the NBA stats backend.

use crate::{
    cli::types::{GameDate, PlayerId},
    core::http::ApiClient,
    nba::{
        decode::{decode_career, decode_games, decode_players, decode_prediction},
        types::{CareerRow, GameSummary, Player, PredictionPayload},
    },
    Result,
};


/// `GET /games/summary?date=MM/DD/YYYY`
pub async fn get_games_summary(api: &ApiClient, date: GameDate) -> Result<Vec<GameSummary>> {
    let date = date.to_string();
    let url = api.endpoint(&["games", "summary"], &[("date", date.as_str())])?;
    decode_games(&api.get_bytes(url).await?)
}

/// `GET /players/search?name=<name>`
pub async fn search_players(api: &ApiClient, name: &str) -> Result<Vec<Player>> {
    let url = api.endpoint(&["players", "search"], &[("name", name)])?;
    decode_players(&api.get_bytes(url).await?)
}

/// `GET /player/{id}/career`
pub async fn get_career(api: &ApiClient, player_id: PlayerId) -> Result<Vec<CareerRow>> {
    let id = player_id.to_string();
    let url = api.endpoint(&["player", id.as_str(), "career"], &[])?;
    decode_career(&api.get_bytes(url).await?)
}

/// `GET /player/{id}/predict`
///
/// An `{"error": ...}` body is a successful [`PredictionPayload::Unavailable`],
/// not an `Err`.
pub async fn get_prediction(api: &ApiClient, player_id: PlayerId) -> Result<PredictionPayload> {
    let id = player_id.to_string();
    let url = api.endpoint(&["player", id.as_str(), "predict"], &[])?;
    decode_prediction(&api.get_bytes(url).await?)
}
