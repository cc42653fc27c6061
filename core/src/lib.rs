//! transfer-graph-core: In-memory football transfer graph.
//!
//! Clubs are nodes keyed by name; each directed edge collects every player
//! transfer from one club to another. Provides lookup of the transfers on an
//! edge, BFS shortest path between clubs, degree ranking, and Wikipedia link
//! derivation. CSV ingestion lives in [`ingest`]; the graph itself never
//! touches the filesystem.

mod error;
mod graph;
pub mod ingest;
mod link;
mod traversal;

pub use error::{Error, Result};
pub use graph::{Transfer, TransferEdge, TransferGraph, TransferRecord};
pub use ingest::{load_sources, read_source, LoadSummary, SourceReport, SourceStats};
pub use link::{wiki_link, wiki_link_with_base, WIKIPEDIA_BASE_URL};
pub use traversal::{most_connected, shortest_path, ClubDegree, DEFAULT_TOP_N};
