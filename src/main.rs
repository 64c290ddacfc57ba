//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_client::{
    cli::{Commands, NbaCli},
    commands::{
        games::handle_games,
        players::{handle_career, handle_player, handle_predict, handle_search},
        CommandContext,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let app = NbaCli::parse();
    let ctx = CommandContext::new(app.common.base_url, app.common.json)?;

    match app.command {
        Commands::Games { date, filter } => handle_games(&ctx, date, filter).await?,
        Commands::Search { name } => handle_search(&ctx, &name).await?,
        Commands::Career { player_id } => handle_career(&ctx, player_id).await?,
        Commands::Predict { player_id } => handle_predict(&ctx, player_id).await?,
        Commands::Player {
            player_id,
            date,
            opponent,
        } => handle_player(&ctx, player_id, date, opponent).await?,
    }

    Ok(())
}
