//! Client-side filters over fetched game lists.
//!
//! All filters are pure: they borrow the stored games and never mutate them.

use crate::nba::types::GameSummary;

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// True if a game matches free text on either team abbreviation or the arena.
///
/// Case-insensitive substring match on the text as given. Only the empty
/// string matches every game; whitespace is matched literally.
pub fn game_matches_text(game: &GameSummary, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();

    [&game.home_team.abbreviation, &game.away_team.abbreviation]
        .into_iter()
        .flatten()
        .any(|abbr| contains_ignore_case(abbr, &needle))
        || contains_ignore_case(&game.arena, &needle)
}

/// Games matching `text`, in their original order.
pub fn filter_games<'a>(games: &'a [GameSummary], text: &str) -> Vec<&'a GameSummary> {
    games
        .iter()
        .filter(|game| game_matches_text(game, text))
        .collect()
}

/// Games involving `team`, optionally narrowed by an opponent substring.
///
/// The team must equal one side's abbreviation exactly. The opponent text is
/// upper-cased and matched as a substring of either abbreviation, so the
/// player's own team also satisfies it.
pub fn team_matches<'a>(
    games: &'a [GameSummary],
    team: &str,
    opponent: Option<&str>,
) -> Vec<&'a GameSummary> {
    let opponent = opponent
        .filter(|o| !o.is_empty())
        .map(str::to_uppercase);

    games
        .iter()
        .filter(|game| game.involves(team))
        .filter(|game| match &opponent {
            None => true,
            Some(o) => [&game.home_team.abbreviation, &game.away_team.abbreviation]
                .into_iter()
                .flatten()
                .any(|abbr| abbr.contains(o.as_str())),
        })
        .collect()
}
