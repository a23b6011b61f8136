//! CLI command implementations

pub mod guess;

pub use guess::{GuessArgs, handle_guess};
