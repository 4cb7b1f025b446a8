//! Session layer between the presentation adapters and the game core

mod controller;
mod input;

pub use controller::{DEFAULT_RESTART_DELAY, Session, SessionOptions, SubmitOutcome};
pub use input::InputLine;
