//! Players view-model: search results, one player's career, and prediction.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    cli::types::PlayerId,
    core::{filters::team_matches, http::ApiClient},
    nba::{
        http::{get_career, get_prediction, search_players},
        types::{CareerRow, GameSummary, Player, Prediction, PredictionPayload, SeasonPoints},
    },
};

use super::sequence::RequestSequence;

/// Immutable snapshot of a [`PlayersViewModel`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayersState {
    pub players: Vec<Player>,
    pub career: Vec<CareerRow>,
    pub prediction: Option<Prediction>,
    /// Last search or career failure. Prediction failures never land here.
    pub error: Option<String>,
}

impl PlayersState {
    /// Team of the most recent career row.
    pub fn current_team(&self) -> Option<&str> {
        self.career.last().map(|row| row.team_abbreviation.as_str())
    }

    /// Games in `games` involving the player's current team.
    ///
    /// `games` is usually fetched separately, so nothing ties it to the
    /// career rows; with no career loaded there are no matches.
    pub fn team_matches<'a>(
        &self,
        games: &'a [GameSummary],
        opponent: Option<&str>,
    ) -> Vec<&'a GameSummary> {
        match self.current_team() {
            Some(team) => team_matches(games, team, opponent),
            None => Vec::new(),
        }
    }

    /// Points per season, followed by the predicted season when present.
    ///
    /// Rows whose season label doesn't start with a year are skipped.
    pub fn points_series(&self) -> Vec<SeasonPoints> {
        let mut series: Vec<SeasonPoints> = self
            .career
            .iter()
            .filter_map(|row| {
                Some(SeasonPoints {
                    year: row.start_year()?,
                    points: row.pts,
                    predicted: false,
                })
            })
            .collect();

        if let Some(p) = self.prediction {
            series.push(SeasonPoints {
                year: p.target_season(),
                points: p.predicted,
                predicted: true,
            });
        }
        series
    }
}

#[derive(Debug)]
struct Inner {
    api: ApiClient,
    state: watch::Sender<PlayersState>,
    search_seq: RequestSequence,
    career_seq: RequestSequence,
    prediction_seq: RequestSequence,
}

/// Holds player search results and the selected player's stats.
///
/// Each of the three operations is sequenced on its own: a late response
/// from an older `search` can't overwrite a newer one, but a `search` and a
/// `fetch_career` never cancel each other.
#[derive(Debug, Clone)]
pub struct PlayersViewModel {
    inner: Arc<Inner>,
}

impl PlayersViewModel {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(PlayersState::default());
        Self {
            inner: Arc::new(Inner {
                api,
                state,
                search_seq: RequestSequence::default(),
                career_seq: RequestSequence::default(),
                prediction_seq: RequestSequence::default(),
            }),
        }
    }

    pub fn snapshot(&self) -> PlayersState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlayersState> {
        self.inner.state.subscribe()
    }

    /// Replace the player list with the results for `name`.
    pub async fn search(&self, name: &str) {
        let inner = &self.inner;
        let mut ticket = 0;
        inner.state.send_modify(|s| {
            ticket = inner.search_seq.begin();
            s.players.clear();
            s.error = None;
        });

        let result = search_players(&inner.api, name).await;

        inner.state.send_if_modified(|s| {
            if !inner.search_seq.is_current(ticket) {
                debug!(ticket, query = name, "discarding stale search response");
                return false;
            }
            match result {
                Ok(players) => {
                    info!(query = name, count = players.len(), "player search done");
                    s.players = players;
                }
                Err(e) => {
                    s.players.clear();
                    s.error = Some(format!("Search failed: {}", e));
                }
            }
            true
        });
    }

    /// Replace the career rows with `player_id`'s regular season totals.
    ///
    /// Rows are cleared before the request goes out.
    pub async fn fetch_career(&self, player_id: PlayerId) {
        let inner = &self.inner;
        let mut ticket = 0;
        inner.state.send_modify(|s| {
            ticket = inner.career_seq.begin();
            s.career.clear();
            s.error = None;
        });

        let result = get_career(&inner.api, player_id).await;

        inner.state.send_if_modified(|s| {
            if !inner.career_seq.is_current(ticket) {
                debug!(ticket, %player_id, "discarding stale career response");
                return false;
            }
            match result {
                Ok(rows) => {
                    info!(%player_id, seasons = rows.len(), "career loaded");
                    s.career = rows;
                }
                Err(e) => {
                    s.career.clear();
                    s.error = Some(format!("Failed to load stats: {}", e));
                }
            }
            true
        });
    }

    /// Replace the prediction slot for `player_id`.
    ///
    /// Any failure, including an `{"error": ...}` body, leaves the slot empty
    /// and does not touch `error`.
    pub async fn fetch_prediction(&self, player_id: PlayerId) {
        let inner = &self.inner;
        let mut ticket = 0;
        inner.state.send_modify(|s| {
            ticket = inner.prediction_seq.begin();
            s.prediction = None;
        });

        let prediction = match get_prediction(&inner.api, player_id).await {
            Ok(PredictionPayload::Available(p)) => Some(p),
            Ok(PredictionPayload::Unavailable { error }) => {
                debug!(%player_id, reason = %error, "no prediction available");
                None
            }
            Err(e) => {
                debug!(%player_id, error = %e, "prediction fetch failed");
                None
            }
        };

        inner.state.send_if_modified(|s| {
            if !inner.prediction_seq.is_current(ticket) {
                debug!(ticket, %player_id, "discarding stale prediction response");
                return false;
            }
            s.prediction = prediction;
            true
        });
    }

    /// Career and prediction for one player, fetched concurrently.
    pub async fn load_player(&self, player_id: PlayerId) {
        tokio::join!(
            self.fetch_career(player_id),
            self.fetch_prediction(player_id)
        );
    }
}
