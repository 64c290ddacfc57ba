//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{GameDate, PlayerId};

/// Connection and output options shared by every command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// API base URL (or set `NBA_API_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the game summaries for a date.
    Games {
        /// Game date, MM/DD/YYYY or YYYY-MM-DD (defaults to today).
        #[clap(long, short, default_value_t = GameDate::default())]
        date: GameDate,

        /// Only show games whose team abbreviation or arena contains this text.
        #[clap(long, short)]
        filter: Option<String>,
    },

    /// Search players by name.
    Search {
        /// Full or partial player name.
        name: String,
    },

    /// Regular season totals for a player.
    Career {
        /// NBA player ID (e.g. 2544).
        player_id: PlayerId,
    },

    /// Predicted points for a player's next season.
    Predict {
        /// NBA player ID (e.g. 2544).
        player_id: PlayerId,
    },

    /// Career, prediction, and that player's team games on a date.
    ///
    /// The player's team is taken from the most recent career row.
    Player {
        /// NBA player ID (e.g. 2544).
        player_id: PlayerId,

        /// Game date, MM/DD/YYYY or YYYY-MM-DD (defaults to today).
        #[clap(long, short, default_value_t = GameDate::default())]
        date: GameDate,

        /// Narrow the matches to an opponent abbreviation (substring match).
        #[clap(long, short)]
        opponent: Option<String>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-client", about = "NBA games, players, and career stats")]
pub struct NbaCli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
