//! Core utilities for the NBA client
//!
//! - `config`: base endpoint resolution
//! - `http`: the GET-only API client
//! - `filters`: pure filters over fetched game lists

pub mod config;
pub mod filters;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use filters::{filter_games, game_matches_text, team_matches};
pub use http::ApiClient;
