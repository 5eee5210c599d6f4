//! vh-shell library
//!
//! Wires configuration, logging and the session store together and renders
//! pages as JSON so the binary stays a thin dispatcher.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod views;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{Result as ShellResult, ShellError};
