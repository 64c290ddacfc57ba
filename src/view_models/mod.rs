//! Observable state containers over the NBA routes.
//!
//! A view-model owns a `tokio::sync::watch` channel holding its current
//! snapshot. Every mutation happens in a single `send_modify` step, so a
//! reader (or subscriber) never sees a half-applied fetch.

pub mod games;
pub mod players;
mod sequence;


pub use games::{GamesState, GamesViewModel, LoadState};
pub use players::{PlayersState, PlayersViewModel};
