use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Target time range in seconds for a difficulty tier
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TimeRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Fixed difficulty table: wider range means less to go on
    pub fn range(self) -> TimeRange {
        match self {
            Difficulty::Easy => TimeRange { min: 5.0, max: 10.0 },
            Difficulty::Medium => TimeRange { min: 3.0, max: 15.0 },
            Difficulty::Hard => TimeRange { min: 1.0, max: 20.0 },
        }
    }

    /// Total token lookup. Anything that isn't easy or medium plays as hard.
    pub fn from_token(token: &str) -> Difficulty {
        match token {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    /// Settings menu cycle order
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", token)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Hidden,
    Visible,
}

impl Mode {
    /// Boundary parse for surface input; unknown tokens are rejected
    pub fn from_token(token: &str) -> Result<Mode> {
        match token {
            "hidden" => Ok(Mode::Hidden),
            "visible" => Ok(Mode::Visible),
            other => Err(Error::InvalidInput(format!("unknown mode '{}'", other))),
        }
    }

    pub fn toggle(self) -> Mode {
        match self {
            Mode::Hidden => Mode::Visible,
            Mode::Visible => Mode::Hidden,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Hidden => "Hidden",
            Mode::Visible => "Visible",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Hidden
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Mode::Hidden => "hidden",
            Mode::Visible => "visible",
        };
        write!(f, "{}", token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_range_is_well_formed() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let range = d.range();
            assert!(range.min < range.max, "{d}: min must be below max");
            assert!(range.min > 0.0);
        }
    }

    #[test]
    fn unknown_difficulty_tokens_fall_back_to_hard() {
        assert_eq!(Difficulty::from_token("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_token("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_token("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_token("nightmare"), Difficulty::Hard);
        assert_eq!(Difficulty::from_token(""), Difficulty::Hard);
    }

    #[test]
    fn mode_tokens_are_strict() {
        assert_eq!(Mode::from_token("hidden").unwrap(), Mode::Hidden);
        assert_eq!(Mode::from_token("visible").unwrap(), Mode::Visible);
        assert!(Mode::from_token("translucent").is_err());
    }

    #[test]
    fn difficulty_cycle_visits_all_tiers() {
        let start = Difficulty::Easy;
        assert_eq!(start.next(), Difficulty::Medium);
        assert_eq!(start.next().next(), Difficulty::Hard);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn tokens_round_trip_through_serde() {
        let json = serde_json::to_string(&Difficulty::Easy).unwrap();
        assert_eq!(json, "\"easy\"");
        let back: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Difficulty::Easy);

        let json = serde_json::to_string(&Mode::Visible).unwrap();
        assert_eq!(json, "\"visible\"");
    }
}
