//! Difficulty levels
//!
//! A difficulty only decides how many attempts a round allows.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Named setting controlling the attempt limit of a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Difficulty {
    /// 8 attempts
    #[value(alias = "facil")]
    Easy,
    /// 6 attempts
    #[default]
    #[value(alias = "medio")]
    Medium,
    /// 4 attempts
    #[value(alias = "dificil")]
    Hard,
}

impl Difficulty {
    /// All levels, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of attempts a round at this difficulty allows
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        match self {
            Self::Easy => 8,
            Self::Medium => 6,
            Self::Hard => 4,
        }
    }

    /// Stable lowercase name, used for persistence
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Accepts English names and the Portuguese names stored by older versions
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "facil" | "fácil" => Ok(Self::Easy),
            "medium" | "medio" | "médio" => Ok(Self::Medium),
            "hard" | "dificil" | "difícil" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_per_difficulty() {
        assert_eq!(Difficulty::Easy.max_attempts(), 8);
        assert_eq!(Difficulty::Medium.max_attempts(), 6);
        assert_eq!(Difficulty::Hard.max_attempts(), 4);
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("easy".parse(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse(), Ok(Difficulty::Hard));
        assert_eq!("médio".parse(), Ok(Difficulty::Medium));
        assert_eq!("dificil".parse(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn name_round_trips_through_parse() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.name().parse(), Ok(difficulty));
        }
    }
}
