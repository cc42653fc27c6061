//! Property tests over small random transfer graphs.

use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;
use transfer_graph_core::{most_connected, shortest_path, Error, Transfer, TransferGraph};

const CLUBS: [&str; 8] = [
    "Ajax", "Benfica", "Celtic", "Dortmund", "Everton", "Fiorentina", "Galatasaray", "Hajduk",
];

fn build(edges: &[(usize, usize)]) -> TransferGraph {
    let mut g = TransferGraph::new();
    for (i, &(from, to)) in edges.iter().enumerate() {
        g.add_transfer(
            CLUBS[from],
            CLUBS[to],
            Transfer::new(format!("player-{}", i), "Midfield", i as f64, 2000 + i as i32),
        );
    }
    g
}

/// Hop distances from `start`, computed independently of `shortest_path`.
fn distances(g: &TransferGraph, start: &str) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start.to_string(), 0);
    queue.push_back(start.to_string());
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for next in g.successors(&current) {
            if !dist.contains_key(next) {
                dist.insert(next.to_string(), d + 1);
                queue.push_back(next.to_string());
            }
        }
    }
    dist
}

fn edge_list() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..CLUBS.len(), 0..CLUBS.len()), 1..24)
}

proptest! {
    #[test]
    fn path_is_valid_and_minimal(edges in edge_list(), a in 0..CLUBS.len(), b in 0..CLUBS.len()) {
        let g = build(&edges);
        let (from, to) = (CLUBS[a], CLUBS[b]);

        match shortest_path(&g, from, to) {
            Ok(path) => {
                prop_assert_eq!(path.first().map(String::as_str), Some(from));
                prop_assert_eq!(path.last().map(String::as_str), Some(to));
                for pair in path.windows(2) {
                    prop_assert!(g.edge(&pair[0], &pair[1]).is_some());
                }
                let dist = distances(&g, from);
                prop_assert_eq!(Some(&(path.len() - 1)), dist.get(to));
            }
            Err(Error::ClubNotFound(club)) => {
                prop_assert!(!g.contains_club(&club));
            }
            Err(Error::NoPath { .. }) => {
                prop_assert!(g.contains_club(from) && g.contains_club(to));
                prop_assert!(!distances(&g, from).contains_key(to));
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn lookup_grows_by_one_per_add(edges in edge_list(), a in 0..CLUBS.len(), b in 0..CLUBS.len()) {
        let mut g = build(&edges);
        let before = g.transfers_between(CLUBS[a], CLUBS[b]).len();
        let added = Transfer::new("Newcomer", "Goalkeeper", 3.25, 2024);
        g.add_transfer(CLUBS[a], CLUBS[b], added.clone());

        let after = g.transfers_between(CLUBS[a], CLUBS[b]);
        prop_assert_eq!(after.len(), before + 1);
        prop_assert_eq!(after.last(), Some(&added));
    }

    #[test]
    fn ranking_covers_every_club_in_order(edges in edge_list()) {
        let g = build(&edges);
        let ranked = most_connected(&g, CLUBS.len());

        prop_assert_eq!(ranked.len(), g.club_count());
        let names: HashSet<&str> = ranked.iter().map(|d| d.club.as_str()).collect();
        prop_assert_eq!(names.len(), ranked.len());
        for w in ranked.windows(2) {
            prop_assert!(w[0].total_degree >= w[1].total_degree);
        }
        for d in &ranked {
            prop_assert_eq!(Some(d.total_degree), g.degree(&d.club));
        }
    }

    #[test]
    fn self_path_is_singleton(edges in edge_list(), a in 0..CLUBS.len()) {
        let g = build(&edges);
        if g.contains_club(CLUBS[a]) {
            prop_assert_eq!(shortest_path(&g, CLUBS[a], CLUBS[a]).unwrap(), vec![CLUBS[a].to_string()]);
        }
    }
}
