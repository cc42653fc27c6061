//! Error types for transfer graph operations.
//!
//! Graph construction never fails. Query misses, ingestion failures and
//! configuration problems all surface as variants of [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when querying or loading a transfer graph.
#[derive(Error, Debug)]
pub enum Error {
    /// A queried club has never appeared as an edge endpoint.
    #[error("club not found: {0}")]
    ClubNotFound(String),

    /// Both clubs exist but no directed route connects them.
    #[error("no path exists between {from} and {to}")]
    NoPath { from: String, to: String },

    /// A transfer source could not be opened.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A transfer source is not a well-formed CSV table.
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a club-not-found error.
    pub fn not_found(club: impl Into<String>) -> Self {
        Self::ClubNotFound(club.into())
    }

    /// Create a no-path error.
    pub fn no_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NoPath {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors that mean "the graph has no answer" rather than a failure
    /// to read input.
    pub fn is_query_miss(&self) -> bool {
        matches!(self, Self::ClubNotFound(_) | Self::NoPath { .. })
    }
}

/// Result type alias using the transfer graph [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::not_found("Ajax").to_string(), "club not found: Ajax");
        assert_eq!(
            Error::no_path("Ajax", "PSV").to_string(),
            "no path exists between Ajax and PSV"
        );
        assert_eq!(
            Error::config("bad toml").to_string(),
            "configuration error: bad toml"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = Error::Io {
            path: PathBuf::from("data/serie-a.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/serie-a.csv"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_query_miss_classification() {
        assert!(Error::not_found("x").is_query_miss());
        assert!(Error::no_path("a", "b").is_query_miss());
        assert!(!Error::config("x").is_query_miss());
    }
}
