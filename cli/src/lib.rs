//! transfer-graph-cli: command-line front end for transfer-graph-core.
//!
//! Loads the configured transfer tables into a graph, then answers one
//! query per invocation or runs the interactive menu.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod shell;
pub mod state;

pub use cli::{CliArgs, Command, OutputFormat};
pub use config::TransferConfig;
pub use error::{CliError, Result};
pub use state::MarketState;
