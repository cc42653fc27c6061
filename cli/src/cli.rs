//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand, ValueEnum};

// ============================================================================
// CLI argument types
// ============================================================================

/// Explore football transfers as a directed graph of clubs.
#[derive(Parser, Debug)]
#[command(name = "transfer-graph", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "TRANSFER_GRAPH_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory containing the transfer tables.
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Transfer table to load; repeat to load several. Replaces the configured list.
    #[arg(long = "source", global = true)]
    pub sources: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute. Defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the transfers from one club to another.
    Transfers {
        /// Selling club.
        from: String,
        /// Buying club.
        to: String,
    },

    /// Find the shortest chain of transfers between two clubs.
    Path {
        /// Starting club.
        from: String,
        /// Destination club.
        to: String,
    },

    /// Show the clubs with the most transfer connections.
    Top {
        /// Number of clubs to show (defaults to `ranking.default_top_n`).
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Print the Wikipedia link for a club.
    Wiki {
        /// Club name, spaces allowed.
        club: String,
    },

    /// Show graph size and per-source load counts.
    Stats,

    /// Run the interactive menu.
    Interactive,

    /// Configuration operations.
    Config(ConfigCommand),
}

#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved configuration as TOML.
    Show,

    /// Print the resolved config file path.
    Path,
}

// ============================================================================
// Tests
// ============================================================================
