//! Terminal front end for strictly_tictactoe.
//!
//! The binary is a thin collaborator around the core crate: it renders the
//! board, reads human moves, waits out the AI's thinking delay, and prints
//! the outcome.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use play::play;
