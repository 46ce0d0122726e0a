use std::{error::Error, fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        [Self::Up, Self::Down, Self::Right, Self::Left].into_iter()
    }

    /// Maps a move code (`U`, `D`, `L`, `R`, either case) to a direction.
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'R' => Some(Self::Right),
            'L' => Some(Self::Left),
            _ => None,
        }
    }

    pub const fn code(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Right => 'R',
            Self::Left => 'L',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
        };

        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move {:?}, expected one of U, D, L or R", self.0)
    }
}

impl Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let direction = match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => None,
        };

        direction.ok_or_else(|| ParseDirectionError(s.to_owned()))
    }
}
