use std::time::Instant;

use transfer_graph_core::{load_sources, wiki_link_with_base, LoadSummary, Result, TransferGraph};

use crate::config::TransferConfig;

/// The loaded graph plus what it was loaded from.
pub struct MarketState {
    pub graph: TransferGraph,
    pub summary: LoadSummary,
    pub config: TransferConfig,
    pub load_time_ms: f64,
}

impl MarketState {
    /// Build the graph from every configured source.
    pub fn load(config: TransferConfig) -> Result<Self> {
        let start = Instant::now();
        let mut graph = TransferGraph::new();
        let summary = load_sources(&mut graph, &config.source_paths())?;
        let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        tracing::info!(
            clubs = graph.club_count(),
            connections = graph.edge_count(),
            transfers = graph.transfer_count(),
            "graph loaded in {:.1}ms",
            load_time_ms
        );

        Ok(Self {
            graph,
            summary,
            config,
            load_time_ms,
        })
    }

    /// Wrap an already-built graph.
    pub fn from_graph(graph: TransferGraph, config: TransferConfig) -> Self {
        Self {
            graph,
            summary: LoadSummary::default(),
            config,
            load_time_ms: 0.0,
        }
    }

    pub fn wiki_link(&self, club: &str) -> String {
        wiki_link_with_base(&self.config.links.wiki_base_url, club)
    }

    pub fn default_top_n(&self) -> usize {
        self.config.ranking.default_top_n
    }
}
