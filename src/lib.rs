//! NBA Client Library
//!
//! Data layer for an NBA scores and player-stats app: a GET-only client for
//! the stats backend, decoders for its four response shapes, and observable
//! view-models that hold the last fetched results.
//!
//! ## Features
//!
//! - **Game Summaries**: scores and status for every game on a date
//! - **Player Search**: look up players by name
//! - **Career Totals**: regular season points, games played, and team per season
//! - **Predictions**: next-season point estimate, absent when the model has too little data
//! - **Derived Views**: text filtering, a player's team games, points-per-season series
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_client::{core::{ApiClient, ClientConfig}, view_models::PlayersViewModel, PlayerId};
//!
//! # async fn example() -> nba_client::Result<()> {
//! let api = ApiClient::new(&ClientConfig::resolve(None)?)?;
//! let players = PlayersViewModel::new(api);
//!
//! players.load_player(PlayerId::new(2544)).await;
//! let state = players.snapshot();
//! println!("{} seasons, prediction: {:?}", state.career.len(), state.prediction);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a backend other than `http://127.0.0.1:8000`:
//! ```bash
//! export NBA_API_BASE_URL=http://stats.internal:8000
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;
pub mod view_models;

// Re-export commonly used types
pub use cli::types::{GameDate, PlayerId};
pub use error::{NbaError, Result};
pub use nba::types::{CareerRow, GameSummary, Player, Prediction, TeamInfo};

pub const BASE_URL_ENV_VAR: &str = "NBA_API_BASE_URL";
