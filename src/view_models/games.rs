//! Games view-model: one date's game summaries plus load/error state.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    cli::types::GameDate,
    core::{filters::filter_games, http::ApiClient},
    nba::{http::get_games_summary, types::GameSummary},
};

use super::sequence::RequestSequence;

/// Lifecycle of a fetch-backed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Immutable snapshot of a [`GamesViewModel`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GamesState {
    pub phase: LoadState,
    /// Date of the most recently started fetch.
    pub date: Option<GameDate>,
    pub games: Vec<GameSummary>,
    pub error: Option<String>,
}

impl GamesState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadState::Loading
    }

    /// Games matching `text` on team abbreviation or arena.
    pub fn filtered(&self, text: &str) -> Vec<&GameSummary> {
        filter_games(&self.games, text)
    }
}

#[derive(Debug)]
struct Inner {
    api: ApiClient,
    state: watch::Sender<GamesState>,
    sequence: RequestSequence,
}

/// Holds the games for one date and notifies subscribers on every change.
///
/// Clones share state, so a clone can be moved into a spawned task. When
/// fetches overlap, only the most recently started one is applied.
///
/// # Examples
///
/// ```rust,no_run
/// use nba_client::{core::{ApiClient, ClientConfig}, GameDate, view_models::GamesViewModel};
///
/// # async fn example() -> nba_client::Result<()> {
/// let vm = GamesViewModel::new(ApiClient::new(&ClientConfig::default())?);
/// vm.fetch_games(GameDate::today()).await;
///
/// for game in vm.snapshot().filtered("bos") {
///     println!("{}", game);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GamesViewModel {
    inner: Arc<Inner>,
}

impl GamesViewModel {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(GamesState::default());
        Self {
            inner: Arc::new(Inner {
                api,
                state,
                sequence: RequestSequence::default(),
            }),
        }
    }

    pub fn snapshot(&self) -> GamesState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that wakes on every state change.
    pub fn subscribe(&self) -> watch::Receiver<GamesState> {
        self.inner.state.subscribe()
    }

    /// Replace the game list with the summaries for `date`.
    ///
    /// Moves to `Loading` and clears games and error immediately. On success
    /// the list is replaced in one step (`Loaded`); on failure the error text
    /// is stored and the list stays empty (`Failed`).
    pub async fn fetch_games(&self, date: GameDate) {
        let inner = &self.inner;
        let mut ticket = 0;
        inner.state.send_modify(|s| {
            ticket = inner.sequence.begin();
            s.phase = LoadState::Loading;
            s.date = Some(date);
            s.games.clear();
            s.error = None;
        });

        let result = get_games_summary(&inner.api, date).await;

        inner.state.send_if_modified(|s| {
            if !inner.sequence.is_current(ticket) {
                debug!(ticket, %date, "discarding stale games response");
                return false;
            }
            match result {
                Ok(games) => {
                    info!(%date, count = games.len(), "games loaded");
                    s.games = games;
                    s.phase = LoadState::Loaded;
                }
                Err(e) => {
                    info!(%date, error = %e, "games fetch failed");
                    s.games.clear();
                    s.error = Some(e.to_string());
                    s.phase = LoadState::Failed;
                }
            }
            true
        });
    }
}
