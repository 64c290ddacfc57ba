//! Command implementations for the NBA client CLI

pub mod common;
pub mod games;
pub mod players;

pub use common::CommandContext;
