//! Game rules: difficulty, the round state machine and its controller

mod difficulty;
mod engine;
mod error;
mod round;

pub use difficulty::Difficulty;
pub use engine::Game;
pub use error::GameError;
pub use round::{Evaluation, Round, RoundStatus};
