use std::{error::Error, fmt, str::FromStr};

/// Game mode chosen at the start of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn win_target(self) -> u32 {
        match self {
            Self::Easy => 256,
            Self::Medium => 512,
            Self::Hard => 1024,
        }
    }

    /// Highest draw in `1..=10` that spawns a 2 rather than a 4.
    pub const fn two_threshold(self) -> u32 {
        match self {
            Self::Easy => 5,
            Self::Medium => 7,
            Self::Hard => 9,
        }
    }

    pub const fn spawn_value(self, draw: u32) -> u32 {
        if draw <= self.two_threshold() {
            2
        } else {
            4
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Easy => "E",
            Self::Medium => "M",
            Self::Hard => "H",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };

        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDifficultyError(String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid mode {:?}, expected E, M or H", self.0)
    }
}

impl Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E" => Ok(Self::Easy),
            "M" => Ok(Self::Medium),
            "H" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_targets() {
        assert_eq!(Difficulty::Easy.win_target(), 256);
        assert_eq!(Difficulty::Medium.win_target(), 512);
        assert_eq!(Difficulty::Hard.win_target(), 1024);
    }

    #[test]
    fn spawn_weights() {
        let twos = |difficulty: Difficulty| {
            (1..=10)
                .filter(|&draw| difficulty.spawn_value(draw) == 2)
                .count()
        };

        assert_eq!(twos(Difficulty::Easy), 5);
        assert_eq!(twos(Difficulty::Medium), 7);
        assert_eq!(twos(Difficulty::Hard), 9);
        assert_eq!(Difficulty::Hard.spawn_value(10), 4);
    }

    #[test]
    fn parses_only_exact_codes() {
        assert_eq!("E".parse(), Ok(Difficulty::Easy));
        assert_eq!("M".parse(), Ok(Difficulty::Medium));
        assert_eq!("H".parse(), Ok(Difficulty::Hard));

        for invalid in ["e", "Easy", "", "EM", " H"] {
            assert!(invalid.parse::<Difficulty>().is_err(), "{invalid:?}");
        }
    }

    #[test]
    fn code_round_trips() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(difficulty.code().parse(), Ok(difficulty));
        }
    }
}
