//! Date type for the games summary route.

use crate::error::{NbaError, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire format expected by `/games/summary?date=`.
pub const GAME_DATE_FORMAT: &str = "%m/%d/%Y";

/// Calendar day of a game slate.
///
/// Displays as zero-padded `MM/DD/YYYY` regardless of locale. Parses that
/// form as well as ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameDate(pub NaiveDate);

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from calendar parts, `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl Default for GameDate {
    fn default() -> Self {
        Self::today()
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(GAME_DATE_FORMAT))
    }
}

impl FromStr for GameDate {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, GAME_DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .map(Self)
            .map_err(|_| NbaError::InvalidDate {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_date_display_is_zero_padded() {
        let date = GameDate::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(date.to_string(), "01/05/2024");
    }

    #[test]
    fn test_game_date_from_str_us_format() {
        let date = GameDate::from_str("12/25/2023").unwrap();
        assert_eq!(date, GameDate::from_ymd(2023, 12, 25).unwrap());
    }

    #[test]
    fn test_game_date_from_str_iso_format() {
        let date = GameDate::from_str("2023-12-25").unwrap();
        assert_eq!(date.to_string(), "12/25/2023");
    }

    #[test]
    fn test_game_date_from_str_unpadded_input() {
        let date = GameDate::from_str("3/7/2024").unwrap();
        assert_eq!(date.to_string(), "03/07/2024");
    }

    #[test]
    fn test_game_date_from_str_invalid() {
        match GameDate::from_str("02/30/2024") {
            Err(NbaError::InvalidDate { input }) => assert_eq!(input, "02/30/2024"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_game_date_from_ymd_rejects_impossible_day() {
        assert!(GameDate::from_ymd(2023, 2, 29).is_none());
        assert!(GameDate::from_ymd(2024, 2, 29).is_some());
    }
}
