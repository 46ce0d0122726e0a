pub use core_2048::*;

pub mod difficulty;
pub mod direction;
pub mod logic;
pub mod random;

pub use difficulty::Difficulty;
pub use direction::Direction;
pub use logic::{Board, GameState};
pub use random::RandomSource;
