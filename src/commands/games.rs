//! Games command implementation

use crate::{
    cli::types::GameDate,
    nba::types::GameSummary,
    view_models::GamesViewModel,
    Result,
};

use super::common::{to_pretty_json, warn_line, CommandContext};

/// Text lines for a game list, or a "no games" line.
pub fn render_games(games: &[&GameSummary], date: GameDate) -> String {
    if games.is_empty() {
        return format!("No games on {}", date);
    }
    games
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle the games command
pub async fn handle_games(ctx: &CommandContext, date: GameDate, filter: Option<String>) -> Result<()> {
    let vm = GamesViewModel::new(ctx.api.clone());
    vm.fetch_games(date).await;
    let state = vm.snapshot();

    if let Some(err) = &state.error {
        eprintln!("{}", warn_line(&format!("Could not load games for {}", date), err));
        return Ok(());
    }

    let games = state.filtered(filter.as_deref().unwrap_or(""));
    if ctx.as_json {
        println!("{}", to_pretty_json(&games)?); // tarpaulin::skip
    } else {
        println!("{}", render_games(&games, date)); // tarpaulin::skip
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nba::types::TeamInfo;

    #[test]
    fn test_render_games_empty() {
        let date = GameDate::from_ymd(2024, 7, 4).unwrap();
        assert_eq!(render_games(&[], date), "No games on 07/04/2024");
    }

    #[test]
    fn test_render_games_one_line_per_game() {
        let game = GameSummary {
            game_id: "1".to_string(),
            status: "Final".to_string(),
            start_time: "7:00 pm ET".to_string(),
            arena: "TD Garden".to_string(),
            home_team: TeamInfo {
                abbreviation: Some("BOS".to_string()),
                score: Some(120),
                ..TeamInfo::default()
            },
            away_team: TeamInfo::default(),
        };
        let date = GameDate::from_ymd(2024, 1, 1).unwrap();
        let out = render_games(&[&game, &game], date);

        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("- @ BOS"));
    }
}
