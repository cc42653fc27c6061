//! Interactive menu over a loaded transfer graph.

use std::io::{BufRead, Write};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::handlers;
use crate::state::MarketState;

const MENU: &str = "\n--- European Football Transfer Market ---\n\
1. View transfers between two clubs\n\
2. Find shortest path between two clubs\n\
3. Show the most connected clubs\n\
4. Get Wikipedia link for a club\n\
Or type 'exit' to quit the program.";

/// Print `message` and read one line. `None` on end of input.
///
/// Only the line terminator is stripped; club names keep inner and
/// surrounding spaces exactly as typed.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Parse the "how many clubs" answer; anything but plain digits means default.
fn parse_top_n(answer: &str, default: usize) -> usize {
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return default;
    }
    answer.parse().unwrap_or(default)
}

/// Run the menu loop until `exit` or end of input.
pub fn run_menu<R: BufRead, W: Write>(state: &MarketState, mut input: R, mut out: W) -> Result<()> {
    let text = OutputFormat::Text;

    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, &mut out, "Choose an option (1–4): ")? else {
            break;
        };

        match choice.trim() {
            "1" | "2" => {
                let Some(from) = prompt(&mut input, &mut out, "Enter the FROM club: ")? else {
                    break;
                };
                let Some(to) = prompt(&mut input, &mut out, "Enter the TO club: ")? else {
                    break;
                };
                if choice.trim() == "1" {
                    handlers::handle_transfers(state, &from, &to, text, &mut out)?;
                } else {
                    handlers::handle_path(state, &from, &to, text, &mut out)?;
                }
            }
            "3" => {
                let question = format!(
                    "How many top clubs do you want to see? (default is {}): ",
                    state.default_top_n()
                );
                let Some(answer) = prompt(&mut input, &mut out, &question)? else {
                    break;
                };
                let top_n = parse_top_n(answer.trim(), state.default_top_n());
                handlers::handle_top(state, Some(top_n), text, &mut out)?;
            }
            "4" => {
                let Some(club) = prompt(&mut input, &mut out, "Enter the club name: ")? else {
                    break;
                };
                handlers::handle_wiki(state, &club, text, &mut out)?;
            }
            "exit" => break,
            _ => writeln!(out, "Invalid choice. Please select a number from 1 to 4.")?,
        }
    }

    tracing::debug!("interactive session ended");
    Ok(())
}
