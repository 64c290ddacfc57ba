//! Player search, career, prediction, and detail commands

use serde::Serialize;

use crate::{
    cli::types::{GameDate, PlayerId},
    nba::types::{CareerRow, GameSummary, Player, Prediction, SeasonPoints},
    view_models::{GamesViewModel, PlayersViewModel},
    Result,
};

use super::{
    common::{to_pretty_json, warn_line, CommandContext},
    games::render_games,
};

/// Everything the `player` command shows for one player
#[derive(Debug, Serialize)]
pub struct PlayerDetail<'a> {
    pub player_id: PlayerId,
    pub team: Option<&'a str>,
    pub career: &'a [CareerRow],
    pub prediction: Option<Prediction>,
    pub points_series: Vec<SeasonPoints>,
    pub date: GameDate,
    pub matches: Vec<&'a GameSummary>,
}

pub fn render_players(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players found".to_string();
    }
    players
        .iter()
        .map(|p| format!("{:>8}  {:<28} {}", p.id.as_u64(), p.full_name, p.status_label()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Season / GP / PTS / Team table
pub fn render_career(rows: &[CareerRow]) -> String {
    let mut out = format!("{:<10}{:>4}{:>9}  {}", "Season", "GP", "PTS", "Team");
    for row in rows {
        out.push_str(&format!(
            "\n{:<10}{:>4}{:>9.1}  {}",
            row.season, row.games_played, row.pts, row.team_abbreviation
        ));
    }
    out
}

pub fn render_prediction(prediction: Option<&Prediction>) -> String {
    match prediction {
        Some(p) => format!(
            "Predicted {}: {:.0} pts (based on seasons through {})",
            p.target_season(),
            p.predicted,
            p.last_season
        ),
        None => "No prediction available".to_string(),
    }
}

/// Handle the search command
pub async fn handle_search(ctx: &CommandContext, name: &str) -> Result<()> {
    let vm = PlayersViewModel::new(ctx.api.clone());
    vm.search(name).await;
    let state = vm.snapshot();

    if let Some(err) = &state.error {
        eprintln!("{}", warn_line(&format!("Player search for '{}'", name), err));
        return Ok(());
    }

    if ctx.as_json {
        println!("{}", to_pretty_json(&state.players)?); // tarpaulin::skip
    } else {
        println!("{}", render_players(&state.players)); // tarpaulin::skip
    }
    Ok(())
}

/// Handle the career command
pub async fn handle_career(ctx: &CommandContext, player_id: PlayerId) -> Result<()> {
    let vm = PlayersViewModel::new(ctx.api.clone());
    vm.fetch_career(player_id).await;
    let state = vm.snapshot();

    if let Some(err) = &state.error {
        eprintln!("{}", warn_line(&format!("Player {}", player_id), err));
        return Ok(());
    }

    if ctx.as_json {
        println!("{}", to_pretty_json(&state.career)?); // tarpaulin::skip
    } else {
        println!("{}", render_career(&state.career)); // tarpaulin::skip
    }
    Ok(())
}

/// Handle the predict command. A missing prediction is not an error.
pub async fn handle_predict(ctx: &CommandContext, player_id: PlayerId) -> Result<()> {
    let vm = PlayersViewModel::new(ctx.api.clone());
    vm.fetch_prediction(player_id).await;
    let state = vm.snapshot();

    if ctx.as_json {
        println!("{}", to_pretty_json(&state.prediction)?); // tarpaulin::skip
    } else {
        println!("{}", render_prediction(state.prediction.as_ref())); // tarpaulin::skip
    }
    Ok(())
}

/// Handle the player command: career, prediction, and team games on `date`.
///
/// The three requests run concurrently; the games join happens afterwards
/// against whatever career came back.
pub async fn handle_player(
    ctx: &CommandContext,
    player_id: PlayerId,
    date: GameDate,
    opponent: Option<String>,
) -> Result<()> {
    let players = PlayersViewModel::new(ctx.api.clone());
    let games = GamesViewModel::new(ctx.api.clone());

    tokio::join!(players.load_player(player_id), games.fetch_games(date));

    let player_state = players.snapshot();
    let games_state = games.snapshot();

    if let Some(err) = &player_state.error {
        eprintln!("{}", warn_line(&format!("Player {}", player_id), err));
    }
    if let Some(err) = &games_state.error {
        eprintln!("{}", warn_line(&format!("Could not load games for {}", date), err));
    }

    let detail = PlayerDetail {
        player_id,
        team: player_state.current_team(),
        career: &player_state.career,
        prediction: player_state.prediction,
        points_series: player_state.points_series(),
        date,
        matches: player_state.team_matches(&games_state.games, opponent.as_deref()),
    };

    if ctx.as_json {
        println!("{}", to_pretty_json(&detail)?); // tarpaulin::skip
    } else {
        println!("{}", render_detail(&detail)); // tarpaulin::skip
    }
    Ok(())
}

pub fn render_detail(detail: &PlayerDetail<'_>) -> String {
    let team = detail.team.unwrap_or("-");
    format!(
        "Player {} ({})\n\n{}\n\n{}\n\nMatches on {}:\n{}",
        detail.player_id,
        team,
        render_career(detail.career),
        render_prediction(detail.prediction.as_ref()),
        detail.date,
        render_games(&detail.matches, detail.date)
    )
}
