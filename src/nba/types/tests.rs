//! Unit tests for NBA API types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    fn sample_game() -> GameSummary {
        serde_json::from_value(json!({
            "game_id": "0022300001",
            "status": "Final",
            "start_time": "7:30 pm ET",
            "arena": "Crypto.com Arena",
            "home_team": {"name": "Lakers", "abbreviation": "LAL", "score": 110},
            "away_team": {"name": "Celtics", "abbreviation": "BOS", "score": 104}
        }))
        .unwrap()
    }

    #[test]
    fn test_game_summary_deserialization() {
        let game = sample_game();
        assert_eq!(game.id(), "0022300001");
        assert_eq!(game.status, "Final");
        assert_eq!(game.home_team.name.as_deref(), Some("Lakers"));
        assert_eq!(game.away_team.score, Some(104));
    }

    #[test]
    fn test_team_info_missing_fields_are_absent() {
        let team: TeamInfo = serde_json::from_value(json!({})).unwrap();
        assert_eq!(team, TeamInfo::default());

        let team: TeamInfo =
            serde_json::from_value(json!({"abbreviation": "MIA", "score": null})).unwrap();
        assert_eq!(team.abbreviation.as_deref(), Some("MIA"));
        assert_eq!(team.score, None);
        assert_eq!(team.name, None);
    }

    #[test]
    fn test_game_summary_requires_arena() {
        let result = serde_json::from_value::<GameSummary>(json!({
            "game_id": "1",
            "status": "Scheduled",
            "start_time": "8:00 pm ET",
            "home_team": {},
            "away_team": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_game_summary_rejects_numeric_game_id() {
        let result = serde_json::from_value::<GameSummary>(json!({
            "game_id": 22300001,
            "status": "Final",
            "start_time": "",
            "arena": "TD Garden",
            "home_team": {},
            "away_team": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_matchup_and_display() {
        let game = sample_game();
        assert_eq!(game.matchup(), "BOS @ LAL");

        let line = game.to_string();
        assert!(line.starts_with("BOS @ LAL"));
        assert!(line.contains("104"));
        assert!(line.contains("110"));
        assert!(line.contains("Crypto.com Arena"));
    }

    #[test]
    fn test_matchup_with_unknown_teams() {
        let mut game = sample_game();
        game.home_team = TeamInfo::default();
        assert_eq!(game.matchup(), "BOS @ -");
        assert_eq!(game.home_team.score_or_zero(), 0);
    }

    #[test]
    fn test_involves_is_exact() {
        let game = sample_game();
        assert!(game.involves("LAL"));
        assert!(game.involves("BOS"));
        assert!(!game.involves("LA"));
        assert!(!game.involves("lal"));
    }

    #[test]
    fn test_player_deserialization() {
        let player: Player = serde_json::from_value(json!({
            "id": 2544,
            "full_name": "LeBron James",
            "first_name": "LeBron",
            "last_name": "James",
            "is_active": true
        }))
        .unwrap();

        assert_eq!(player.id, PlayerId::new(2544));
        assert_eq!(player.full_name, "LeBron James");
        assert_eq!(player.status_label(), "Active");
    }

    #[test]
    fn test_player_status_label_retired() {
        let player = Player {
            id: PlayerId::new(76375),
            full_name: "Kareem Abdul-Jabbar".to_string(),
            first_name: "Kareem".to_string(),
            last_name: "Abdul-Jabbar".to_string(),
            is_active: false,
        };
        assert_eq!(player.status_label(), "Retired");
    }

    #[test]
    fn test_career_row_integer_points() {
        let row: CareerRow = serde_json::from_value(json!({
            "SEASON_ID": "2023-24",
            "PTS": 1822,
            "GP": 71,
            "TEAM_ABBREVIATION": "LAL"
        }))
        .unwrap();

        assert_eq!(row.pts, 1822.0);
        assert_eq!(row.games_played, 71);
        assert_eq!(row.start_year(), Some(2023));
    }

    #[test]
    fn test_career_row_start_year_unparsable() {
        let row = CareerRow {
            season: "N/A".to_string(),
            pts: 0.0,
            games_played: 0,
            team_abbreviation: "TOT".to_string(),
        };
        assert_eq!(row.start_year(), None);
    }

    #[test]
    fn test_career_row_serializes_wire_names() {
        let row = CareerRow {
            season: "2003-04".to_string(),
            pts: 1654.0,
            games_played: 79,
            team_abbreviation: "CLE".to_string(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["SEASON_ID"], "2003-04");
        assert_eq!(value["TEAM_ABBREVIATION"], "CLE");
    }

    #[test]
    fn test_prediction_payload_available() {
        let payload: PredictionPayload = serde_json::from_value(json!({
            "last_season": 2023,
            "predicted_points_next_season": 1710.5
        }))
        .unwrap();

        let prediction = payload.into_prediction().unwrap();
        assert_eq!(prediction.last_season, 2023);
        assert_eq!(prediction.predicted, 1710.5);
        assert_eq!(prediction.target_season(), 2024);
    }

    #[test]
    fn test_prediction_payload_error_shape() {
        let payload: PredictionPayload =
            serde_json::from_value(json!({"error": "not enough data"})).unwrap();

        assert_eq!(
            payload,
            PredictionPayload::Unavailable {
                error: "not enough data".to_string()
            }
        );
        assert!(payload.into_prediction().is_none());
    }

    #[test]
    fn test_prediction_payload_fields_win_over_error() {
        let payload: PredictionPayload = serde_json::from_value(json!({
            "error": "model stale",
            "last_season": 2023,
            "predicted_points_next_season": 1500.0
        }))
        .unwrap();
        assert_eq!(
            payload.into_prediction(),
            Some(Prediction {
                last_season: 2023,
                predicted: 1500.0
            })
        );
    }
}
