//! Type-safe wrappers for NBA API arguments.

pub mod ids;
pub mod time;

pub use ids::PlayerId;
pub use time::{GameDate, GAME_DATE_FORMAT};
