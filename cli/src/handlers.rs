//! Handler functions for the query subcommands.
//!
//! Every handler writes to the supplied writer so the interactive menu and
//! tests can reuse them. Query misses (unknown club, no route) are reported
//! as output, not as errors.

use std::io::Write;

use serde::Serialize;
use transfer_graph_core::{most_connected, shortest_path, ClubDegree, Error, SourceStats, Transfer};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::state::MarketState;

// ============================================================================
// Output types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Ok,
    ClubNotFound,
    NoPath,
}

impl QueryStatus {
    fn of_error(err: &Error) -> Self {
        match err {
            Error::NoPath { .. } => Self::NoPath,
            _ => Self::ClubNotFound,
        }
    }
}

#[derive(Serialize)]
struct TransfersOutput<'a> {
    from: &'a str,
    to: &'a str,
    status: QueryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    transfers: &'a [Transfer],
}

#[derive(Serialize)]
struct PathOutput<'a> {
    from: &'a str,
    to: &'a str,
    status: QueryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    hops: Option<usize>,
    path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct RankedClub<'a> {
    rank: usize,
    #[serde(flatten)]
    degree: &'a ClubDegree,
}

#[derive(Serialize)]
struct LinkOutput<'a> {
    club: &'a str,
    url: String,
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    clubs: usize,
    connections: usize,
    transfers: usize,
    load_time_ms: f64,
    sources: &'a [SourceStats],
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Render a fee the way the source tables print them: whole amounts keep
/// one decimal place.
pub fn format_fee(fee: f64) -> String {
    if fee.is_finite() && fee.fract() == 0.0 {
        format!("{:.1}", fee)
    } else {
        format!("{}", fee)
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn handle_transfers<W: Write>(
    state: &MarketState,
    from: &str,
    to: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    if format == OutputFormat::Json {
        let output = match state.graph.lookup_transfers(from, to) {
            Ok(transfers) => TransfersOutput {
                from,
                to,
                status: QueryStatus::Ok,
                error: None,
                transfers,
            },
            Err(e) => TransfersOutput {
                from,
                to,
                status: QueryStatus::of_error(&e),
                error: Some(e.to_string()),
                transfers: &[],
            },
        };
        return write_json(out, &output);
    }

    let transfers = state.graph.transfers_between(from, to);
    if transfers.is_empty() {
        writeln!(out, "No direct transfers from {} to {}.", from, to)?;
        return Ok(());
    }

    writeln!(out, "Transfers from {} to {}:", from, to)?;
    for t in transfers {
        writeln!(
            out,
            "- {}: {} ({}) for €{}",
            t.year,
            t.player_name,
            t.position,
            format_fee(t.fee)
        )?;
    }
    Ok(())
}

pub fn handle_path<W: Write>(
    state: &MarketState,
    from: &str,
    to: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let result = shortest_path(&state.graph, from, to);
    if let Err(ref e) = result {
        if !e.is_query_miss() {
            tracing::warn!("path query failed: {}", e);
        }
    }

    if format == OutputFormat::Json {
        let output = match result {
            Ok(path) => PathOutput {
                from,
                to,
                status: QueryStatus::Ok,
                hops: Some(path.len() - 1),
                path,
                error: None,
            },
            Err(e) => PathOutput {
                from,
                to,
                status: QueryStatus::of_error(&e),
                hops: None,
                path: Vec::new(),
                error: Some(e.to_string()),
            },
        };
        return write_json(out, &output);
    }

    match result {
        Ok(path) => writeln!(out, "{}", path.join(" -> "))?,
        Err(Error::NoPath { .. }) => writeln!(out, "No path exists between {} and {}.", from, to)?,
        Err(Error::ClubNotFound(_)) => writeln!(out, "One or both clubs not found in the network.")?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub fn handle_top<W: Write>(
    state: &MarketState,
    count: Option<usize>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let top_n = count.unwrap_or_else(|| state.default_top_n());
    let ranked = most_connected(&state.graph, top_n);

    if format == OutputFormat::Json {
        let output: Vec<RankedClub<'_>> = ranked
            .iter()
            .enumerate()
            .map(|(i, degree)| RankedClub { rank: i + 1, degree })
            .collect();
        return write_json(out, &output);
    }

    writeln!(out, "Top connected clubs:")?;
    for (i, d) in ranked.iter().enumerate() {
        writeln!(out, "{}. {} - {} connections", i + 1, d.club, d.total_degree)?;
    }
    Ok(())
}

pub fn handle_wiki<W: Write>(
    state: &MarketState,
    club: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let url = state.wiki_link(club);
    match format {
        OutputFormat::Json => write_json(out, &LinkOutput { club, url }),
        OutputFormat::Text => {
            writeln!(out, "Wikipedia link: {}", url)?;
            Ok(())
        }
    }
}

pub fn handle_stats<W: Write>(state: &MarketState, format: OutputFormat, out: &mut W) -> Result<()> {
    let graph = &state.graph;

    if format == OutputFormat::Json {
        return write_json(
            out,
            &StatsOutput {
                clubs: graph.club_count(),
                connections: graph.edge_count(),
                transfers: graph.transfer_count(),
                load_time_ms: state.load_time_ms,
                sources: &state.summary.sources,
            },
        );
    }

    writeln!(out, "Clubs:       {}", graph.club_count())?;
    writeln!(out, "Connections: {}", graph.edge_count())?;
    writeln!(out, "Transfers:   {}", graph.transfer_count())?;
    writeln!(out, "Load time:   {:.1}ms", state.load_time_ms)?;
    if !state.summary.sources.is_empty() {
        writeln!(out, "Sources:")?;
        for s in &state.summary.sources {
            writeln!(
                out,
                "  {}: {} loaded, {} skipped",
                s.path.display(),
                s.transfers_loaded,
                s.rows_skipped
            )?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
