//! CSV ingestion of per-club transfer tables.
//!
//! Each source is a table of one league's transfers, one row per player
//! movement, seen from the side of `club_name`. Columns are addressed by
//! header; extra columns are ignored. Rows without a usable cleaned fee are
//! skipped, as are rows whose year is not an integer.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Transfer, TransferGraph, TransferRecord};

#[derive(Debug, Deserialize)]
struct TransferRow {
    club_name: String,
    club_involved_name: String,
    #[serde(default)]
    transfer_movement: String,
    #[serde(default)]
    player_name: String,
    #[serde(default)]
    position: String,
    #[serde(default)]
    fee_cleaned: Option<String>,
    #[serde(default)]
    year: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum SkipReason {
    MissingFee,
    InvalidFee(String),
    InvalidYear(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingFee => write!(f, "missing fee"),
            SkipReason::InvalidFee(raw) => write!(f, "invalid fee '{}'", raw),
            SkipReason::InvalidYear(raw) => write!(f, "invalid year '{}'", raw),
        }
    }
}

/// Parse a cleaned fee. Empty and `nan` cells mean the fee is unknown.
fn parse_fee(raw: Option<&str>) -> std::result::Result<f64, SkipReason> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Err(SkipReason::MissingFee);
    }
    match raw.parse::<f64>() {
        Ok(fee) if fee.is_finite() && fee >= 0.0 => Ok(fee),
        _ => Err(SkipReason::InvalidFee(raw.to_string())),
    }
}

/// Parse a year, accepting whole floats such as `1998.0` written by
/// tools that widen integer columns containing blanks.
fn parse_year(raw: Option<&str>) -> std::result::Result<i32, SkipReason> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if let Ok(year) = raw.parse::<i32>() {
        return Ok(year);
    }
    match raw.parse::<f64>() {
        Ok(y) if y.fract() == 0.0 && y >= i32::MIN as f64 && y <= i32::MAX as f64 => Ok(y as i32),
        _ => Err(SkipReason::InvalidYear(raw.to_string())),
    }
}

impl TransferRow {
    fn into_record(self) -> std::result::Result<TransferRecord, SkipReason> {
        let fee = parse_fee(self.fee_cleaned.as_deref())?;
        let year = parse_year(self.year.as_deref())?;

        // "in" rows are purchases by club_name; everything else is a sale.
        let (from_club, to_club) = if self.transfer_movement == "in" {
            (self.club_involved_name, self.club_name)
        } else {
            (self.club_name, self.club_involved_name)
        };

        Ok(TransferRecord {
            from_club,
            to_club,
            transfer: Transfer {
                player_name: self.player_name,
                position: self.position,
                fee,
                year,
            },
        })
    }
}

/// Records parsed from one source, plus row accounting.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub path: PathBuf,
    pub records: Vec<TransferRecord>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

/// Per-source counts after loading into a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStats {
    pub path: PathBuf,
    pub rows_read: usize,
    pub transfers_loaded: usize,
    pub rows_skipped: usize,
}

/// Outcome of loading a list of sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadSummary {
    pub sources: Vec<SourceStats>,
}

impl LoadSummary {
    pub fn transfers_loaded(&self) -> usize {
        self.sources.iter().map(|s| s.transfers_loaded).sum()
    }

    pub fn rows_skipped(&self) -> usize {
        self.sources.iter().map(|s| s.rows_skipped).sum()
    }
}

/// Parse one CSV source file.
pub fn read_source(path: &Path) -> Result<SourceReport> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_reader(file, path)
}

/// Parse CSV from any reader. `path` only labels errors and the report.
pub fn read_reader<R: Read>(reader: R, path: &Path) -> Result<SourceReport> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    let mut rows_read = 0;
    let mut rows_skipped = 0;

    for (idx, row) in csv_reader.deserialize::<TransferRow>().enumerate() {
        let row = row.map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows_read += 1;

        match row.into_record() {
            Ok(record) => records.push(record),
            Err(reason) => {
                rows_skipped += 1;
                // +2: one for the header, one for 1-based line numbers.
                log::debug!("{}:{}: skipped row ({})", path.display(), idx + 2, reason);
            }
        }
    }

    Ok(SourceReport {
        path: path.to_path_buf(),
        records,
        rows_read,
        rows_skipped,
    })
}

/// Read every source in order and load its records into `graph`.
///
/// Stops at the first source that cannot be opened or parsed; sources
/// loaded before it stay in the graph.
pub fn load_sources<P: AsRef<Path>>(graph: &mut TransferGraph, paths: &[P]) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();

    for path in paths {
        let report = read_source(path.as_ref())?;
        let transfers_loaded = report.records.len();
        graph.load_records(report.records);

        log::info!(
            "loaded {} transfers from {} ({} rows skipped)",
            transfers_loaded,
            report.path.display(),
            report.rows_skipped
        );
        summary.sources.push(SourceStats {
            path: report.path,
            rows_read: report.rows_read,
            transfers_loaded,
            rows_skipped: report.rows_skipped,
        });
    }

    Ok(summary)
}
