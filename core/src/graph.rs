use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single player transfer recorded on an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub player_name: String,
    pub position: String,
    /// Cleaned fee, non-negative.
    pub fee: f64,
    pub year: i32,
}

impl Transfer {
    pub fn new(
        player_name: impl Into<String>,
        position: impl Into<String>,
        fee: f64,
        year: i32,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            position: position.into(),
            fee,
            year,
        }
    }
}

/// All transfers from one club to another, in ingestion order.
///
/// Never empty: an edge is created together with its first transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferEdge {
    pub from: String,
    pub to: String,
    pub transfers: Vec<Transfer>,
}

impl TransferEdge {
    /// Sum of all fees on this edge.
    pub fn total_fee(&self) -> f64 {
        self.transfers.iter().map(|t| t.fee).sum()
    }
}

/// An already-parsed transfer ready for ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub from_club: String,
    pub to_club: String,
    pub transfer: Transfer,
}

impl TransferRecord {
    pub fn new(from_club: impl Into<String>, to_club: impl Into<String>, transfer: Transfer) -> Self {
        Self {
            from_club: from_club.into(),
            to_club: to_club.into(),
            transfer,
        }
    }
}

/// In-memory directed transfer graph keyed by club name.
///
/// `outgoing[a][b]` holds the edge a → b. `incoming[b]` holds the set of
/// clubs with an edge into b. Every known club has an entry in both maps,
/// possibly empty, so either key set is the club set. Both maps are ordered
/// by club name, which fixes neighbor iteration order for traversal.
#[derive(Debug, Clone, Default)]
pub struct TransferGraph {
    outgoing: BTreeMap<String, BTreeMap<String, TransferEdge>>,
    incoming: BTreeMap<String, BTreeSet<String>>,
}

impl TransferGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert empty adjacency entries for `club` if it is new.
    fn ensure_club(&mut self, club: &str) {
        if !self.outgoing.contains_key(club) {
            self.outgoing.insert(club.to_string(), BTreeMap::new());
            self.incoming.insert(club.to_string(), BTreeSet::new());
        }
    }

    /// Record one transfer from `from` to `to`, creating either club if needed.
    ///
    /// Appends to the existing edge when there is one; otherwise the edge is
    /// created with this transfer as its only entry.
    pub fn add_transfer(&mut self, from: &str, to: &str, transfer: Transfer) {
        self.ensure_club(from);
        self.ensure_club(to);

        let Some(edges) = self.outgoing.get_mut(from) else {
            return;
        };
        if let Some(edge) = edges.get_mut(to) {
            edge.transfers.push(transfer);
            return;
        }

        edges.insert(
            to.to_string(),
            TransferEdge {
                from: from.to_string(),
                to: to.to_string(),
                transfers: vec![transfer],
            },
        );
        if let Some(preds) = self.incoming.get_mut(to) {
            preds.insert(from.to_string());
        }
    }

    /// Bulk load already-parsed records in order.
    pub fn load_records<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = TransferRecord>,
    {
        for record in records {
            self.add_transfer(&record.from_club, &record.to_club, record.transfer);
        }
    }

    /// Transfers on the edge `from` → `to`, in insertion order.
    ///
    /// Empty when the edge or either club is unknown.
    pub fn transfers_between(&self, from: &str, to: &str) -> &[Transfer] {
        self.edge(from, to)
            .map(|e| e.transfers.as_slice())
            .unwrap_or(&[])
    }

    /// Like [`transfers_between`](Self::transfers_between), but reports
    /// unknown clubs as [`Error::ClubNotFound`] instead of an empty slice.
    pub fn lookup_transfers(&self, from: &str, to: &str) -> Result<&[Transfer]> {
        for club in [from, to] {
            if !self.contains_club(club) {
                return Err(Error::not_found(club));
            }
        }
        Ok(self.transfers_between(from, to))
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&TransferEdge> {
        self.outgoing.get(from).and_then(|edges| edges.get(to))
    }

    pub fn contains_club(&self, club: &str) -> bool {
        self.outgoing.contains_key(club)
    }

    /// The graph-owned name for `club`, if it is known.
    pub fn club(&self, club: &str) -> Option<&str> {
        self.outgoing.get_key_value(club).map(|(k, _)| k.as_str())
    }

    /// All clubs in name order.
    pub fn clubs(&self) -> impl Iterator<Item = &str> {
        self.outgoing.keys().map(String::as_str)
    }

    /// Clubs that `club` has sold to, in name order.
    pub fn successors(&self, club: &str) -> impl Iterator<Item = &str> {
        self.outgoing
            .get(club)
            .into_iter()
            .flat_map(|edges| edges.keys().map(String::as_str))
    }

    /// Clubs that have sold to `club`, in name order.
    pub fn predecessors(&self, club: &str) -> impl Iterator<Item = &str> {
        self.incoming
            .get(club)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Every edge, ordered by (from, to).
    pub fn edges(&self) -> impl Iterator<Item = &TransferEdge> {
        self.outgoing.values().flat_map(|edges| edges.values())
    }

    pub fn out_degree(&self, club: &str) -> usize {
        self.outgoing.get(club).map_or(0, BTreeMap::len)
    }

    pub fn in_degree(&self, club: &str) -> usize {
        self.incoming.get(club).map_or(0, BTreeSet::len)
    }

    /// Total degree (in + out, counted in edges). None for unknown clubs.
    pub fn degree(&self, club: &str) -> Option<usize> {
        self.contains_club(club)
            .then(|| self.out_degree(club) + self.in_degree(club))
    }

    pub fn club_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of distinct directed club pairs.
    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(BTreeMap::len).sum()
    }

    /// Number of individual transfers across all edges.
    pub fn transfer_count(&self) -> usize {
        self.edges().map(|e| e.transfers.len()).sum()
    }
}
