//! Application entry: logging, configuration, graph loading and dispatch.

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command, ConfigAction, OutputFormat};
use crate::config::TransferConfig;
use crate::error::Result;
use crate::handlers;
use crate::shell;
use crate::state::MarketState;

/// Initialise tracing-based logging on stderr.
///
/// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
/// `log` records from the core crate are bridged into the same subscriber.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Resolve configuration: file or defaults, then command-line overrides.
pub fn resolve_config(args: &CliArgs) -> Result<TransferConfig> {
    let mut config = TransferConfig::load(args.config.as_deref())?;
    config.apply_overrides(args.data_dir.clone(), args.sources.clone());
    Ok(config)
}

pub fn run(args: CliArgs) -> Result<()> {
    init_logging(args.verbose, args.quiet);
    let config = resolve_config(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Interactive) {
        Command::Config(cmd) => {
            handle_config(&config, args.config.as_deref(), cmd.command, &mut out)
        }
        command => {
            let state = MarketState::load(config)?;
            dispatch(&state, command, args.format, &mut out)
        }
    }
}

fn dispatch<W: Write>(
    state: &MarketState,
    command: Command,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Transfers { from, to } => {
            handlers::handle_transfers(state, &from, &to, format, out)
        }
        Command::Path { from, to } => handlers::handle_path(state, &from, &to, format, out),
        Command::Top { count } => handlers::handle_top(state, count, format, out),
        Command::Wiki { club } => handlers::handle_wiki(state, &club, format, out),
        Command::Stats => handlers::handle_stats(state, format, out),
        Command::Interactive => {
            writeln!(
                out,
                "\nLoaded {} clubs and {} transfer connections.",
                state.graph.club_count(),
                state.graph.edge_count()
            )?;
            let stdin = io::stdin();
            shell::run_menu(state, stdin.lock(), out)
        }
        // Answered before the graph is loaded.
        Command::Config(_) => Ok(()),
    }
}

fn handle_config<W: Write>(
    config: &TransferConfig,
    explicit: Option<&str>,
    action: ConfigAction,
    out: &mut W,
) -> Result<()> {
    match action {
        ConfigAction::Show => write!(out, "{}", config.to_toml_string()?)?,
        ConfigAction::Path => match TransferConfig::resolve_config_path(explicit) {
            Some(path) => writeln!(out, "{}", path.display())?,
            None => writeln!(out, "(no config directory available)")?,
        },
    }
    Ok(())
}
