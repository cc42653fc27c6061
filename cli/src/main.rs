use std::process::ExitCode;

use clap::Parser;
use transfer_graph_cli::{app, CliArgs};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
