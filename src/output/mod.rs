//! Terminal output formatting
//!
//! Display utilities for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_round, print_round_end, print_stats};
