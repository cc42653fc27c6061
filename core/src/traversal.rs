use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::TransferGraph;

/// Number of clubs returned by a ranking when the caller does not say.
pub const DEFAULT_TOP_N: usize = 10;

/// Degree information for a single club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubDegree {
    pub club: String,
    pub out_degree: usize,
    pub in_degree: usize,
    pub total_degree: usize,
}

/// Shortest chain of transfers from `from` to `to` (unweighted BFS over
/// directed edges).
///
/// The frontier holds whole candidate paths. A club is marked visited when a
/// path ending at it is dequeued, not when it is enqueued, so the same club
/// may be queued as the tail of several paths before its first expansion.
/// Neighbors are expanded in club-name order, which fixes which of several
/// equally short paths is returned.
///
/// Returns the path including both endpoints; `from == to` yields `[from]`.
/// Fails with [`Error::ClubNotFound`] if either club is unknown, checking
/// `from` first, and with [`Error::NoPath`] if `to` is unreachable.
pub fn shortest_path(graph: &TransferGraph, from: &str, to: &str) -> Result<Vec<String>> {
    let start = graph.club(from).ok_or_else(|| Error::not_found(from))?;
    let target = graph.club(to).ok_or_else(|| Error::not_found(to))?;

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let Some(&current) = path.last() else {
            continue;
        };

        if current == target {
            log::debug!(
                "path {} -> {}: {} hops, {} clubs expanded",
                from,
                to,
                path.len() - 1,
                visited.len()
            );
            return Ok(path.into_iter().map(str::to_string).collect());
        }

        if visited.insert(current) {
            for neighbor in graph.successors(current) {
                if !visited.contains(neighbor) {
                    let mut next = Vec::with_capacity(path.len() + 1);
                    next.extend_from_slice(&path);
                    next.push(neighbor);
                    queue.push_back(next);
                }
            }
        }
    }

    log::debug!(
        "path {} -> {}: unreachable after expanding {} clubs",
        from,
        to,
        visited.len()
    );
    Err(Error::no_path(from, to))
}

/// Clubs ranked by total degree (in + out edges), highest first.
///
/// Ties are broken by club name ascending. Returns at most `top_n` entries;
/// `top_n == 0` returns nothing.
pub fn most_connected(graph: &TransferGraph, top_n: usize) -> Vec<ClubDegree> {
    if top_n == 0 {
        return Vec::new();
    }

    let mut results: Vec<ClubDegree> = graph
        .clubs()
        .map(|club| {
            let out_degree = graph.out_degree(club);
            let in_degree = graph.in_degree(club);
            ClubDegree {
                club: club.to_string(),
                out_degree,
                in_degree,
                total_degree: out_degree + in_degree,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.total_degree
            .cmp(&a.total_degree)
            .then_with(|| a.club.cmp(&b.club))
    });
    results.truncate(top_n);

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Transfer, TransferRecord};

    fn club(i: u32) -> String {
        format!("club-{:02}", i)
    }

    fn record(from: &str, to: &str) -> TransferRecord {
        TransferRecord::new(from, to, Transfer::new("Player", "Midfield", 1.5, 2010))
    }

    fn graph_of(pairs: &[(&str, &str)]) -> TransferGraph {
        let mut g = TransferGraph::new();
        g.load_records(pairs.iter().map(|(f, t)| record(f, t)));
        g
    }

    fn make_chain(n: u32) -> TransferGraph {
        let mut g = TransferGraph::new();
        g.load_records((0..n - 1).map(|i| record(&club(i), &club(i + 1))));
        g
    }

    fn make_star(leaves: u32) -> TransferGraph {
        let mut g = TransferGraph::new();
        g.load_records((1..=leaves).map(|i| record("Hub", &club(i))));
        g
    }

    fn make_cycle(n: u32) -> TransferGraph {
        let mut g = TransferGraph::new();
        g.load_records((0..n).map(|i| record(&club(i), &club((i + 1) % n))));
        g
    }

    // --- shortest path ---

    #[test]
    fn test_shortest_path_chain() {
        let g = make_chain(6);
        let path = shortest_path(&g, &club(0), &club(5)).unwrap();
        let expected: Vec<String> = (0..6).map(club).collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_shortest_path_self() {
        let g = make_chain(3);
        assert_eq!(shortest_path(&g, &club(1), &club(1)).unwrap(), vec![club(1)]);
    }

    #[test]
    fn test_shortest_path_is_directed() {
        let g = make_chain(4);
        match shortest_path(&g, &club(3), &club(0)) {
            Err(Error::NoPath { from, to }) => {
                assert_eq!(from, club(3));
                assert_eq!(to, club(0));
            }
            other => panic!("expected NoPath, got {:?}", other),
        }
    }

    #[test]
    fn test_shortest_path_disconnected() {
        let g = graph_of(&[("Ajax", "PSV"), ("Celtic", "Rangers")]);
        assert!(matches!(
            shortest_path(&g, "Ajax", "Rangers"),
            Err(Error::NoPath { .. })
        ));
    }

    #[test]
    fn test_shortest_path_start_not_in_graph() {
        let g = make_chain(3);
        match shortest_path(&g, "Nowhere FC", &club(1)) {
            Err(Error::ClubNotFound(c)) => assert_eq!(c, "Nowhere FC"),
            other => panic!("expected ClubNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_shortest_path_target_not_in_graph() {
        let g = make_chain(3);
        match shortest_path(&g, &club(0), "Nowhere FC") {
            Err(Error::ClubNotFound(c)) => assert_eq!(c, "Nowhere FC"),
            other => panic!("expected ClubNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_shortest_path_both_unknown_reports_from() {
        let g = TransferGraph::new();
        match shortest_path(&g, "X", "X") {
            Err(Error::ClubNotFound(c)) => assert_eq!(c, "X"),
            other => panic!("expected ClubNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_shortest_path_prefers_fewer_hops() {
        // Long way round: A -> B -> C -> D -> E, shortcut A -> X -> E.
        let g = graph_of(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
            ("D", "E"),
            ("A", "X"),
            ("X", "E"),
        ]);
        assert_eq!(shortest_path(&g, "A", "E").unwrap(), ["A", "X", "E"]);
    }

    #[test]
    fn test_shortest_path_tie_break_by_name() {
        // Diamond: both A->B->D and A->C->D have two hops.
        let g = graph_of(&[("A", "C"), ("A", "B"), ("C", "D"), ("B", "D")]);
        assert_eq!(shortest_path(&g, "A", "D").unwrap(), ["A", "B", "D"]);
    }

    #[test]
    fn test_shortest_path_duplicate_enqueue() {
        // D is queued behind both B and C before it is ever dequeued; the
        // first queued copy (via B) wins.
        let g = graph_of(&[
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("C", "D"),
            ("D", "E"),
        ]);
        assert_eq!(shortest_path(&g, "A", "E").unwrap(), ["A", "B", "D", "E"]);
    }

    #[test]
    fn test_shortest_path_cycle() {
        let g = make_cycle(5);
        assert_eq!(
            shortest_path(&g, &club(3), &club(1)).unwrap(),
            [club(3), club(4), club(0), club(1)]
        );
    }

    #[test]
    fn test_shortest_path_self_loop_terminates() {
        let g = graph_of(&[("A", "A"), ("B", "B")]);
        assert!(matches!(
            shortest_path(&g, "A", "B"),
            Err(Error::NoPath { .. })
        ));
    }

    #[test]
    fn test_shortest_path_star() {
        let g = make_star(50);
        assert_eq!(shortest_path(&g, "Hub", &club(37)).unwrap(), ["Hub".to_string(), club(37)]);
        assert!(shortest_path(&g, &club(37), "Hub").is_err());
    }

    #[test]
    fn test_scenario_two_hops() {
        let g = graph_of(&[("A", "B"), ("B", "C")]);
        assert!(g.transfers_between("A", "C").is_empty());
        assert_eq!(shortest_path(&g, "A", "C").unwrap(), ["A", "B", "C"]);
        assert_eq!(g.degree("B"), Some(2));
        assert_eq!(g.degree("A"), Some(1));
    }

    #[test]
    fn test_path_edges_exist() {
        let g = graph_of(&[
            ("Benfica", "Porto"),
            ("Porto", "Chelsea"),
            ("Benfica", "Atlético"),
            ("Atlético", "Chelsea"),
            ("Chelsea", "Milan"),
        ]);
        let path = shortest_path(&g, "Benfica", "Milan").unwrap();
        assert_eq!(path.len(), 4);
        for pair in path.windows(2) {
            assert!(g.edge(&pair[0], &pair[1]).is_some(), "missing edge {:?}", pair);
        }
    }

    // --- degree ranking ---

    #[test]
    fn test_degree_star() {
        let g = make_star(10);
        let result = most_connected(&g, 1);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].club, "Hub");
        assert_eq!(result[0].out_degree, 10);
        assert_eq!(result[0].in_degree, 0);
        assert_eq!(result[0].total_degree, 10);
    }

    #[test]
    fn test_degree_chain() {
        let g = make_chain(5);
        let result = most_connected(&g, 10);
        assert_eq!(result.len(), 5);
        // Interior clubs tie at 2, ends tie at 1; ties ordered by name.
        let ranked: Vec<(&str, usize)> = result
            .iter()
            .map(|d| (d.club.as_str(), d.total_degree))
            .collect();
        assert_eq!(
            ranked,
            [
                ("club-01", 2),
                ("club-02", 2),
                ("club-03", 2),
                ("club-00", 1),
                ("club-04", 1),
            ]
        );
    }

    #[test]
    fn test_degree_counts_edges_not_transfers() {
        let mut g = TransferGraph::new();
        for _ in 0..5 {
            g.add_transfer("Ajax", "PSV", Transfer::new("p", "GK", 1.0, 2000));
        }
        g.add_transfer("Feyenoord", "Ajax", Transfer::new("q", "GK", 1.0, 2000));
        g.add_transfer("Utrecht", "Ajax", Transfer::new("r", "GK", 1.0, 2000));

        let result = most_connected(&g, DEFAULT_TOP_N);
        assert_eq!(result[0].club, "Ajax");
        assert_eq!(result[0].total_degree, 3);
        assert_eq!(result[1].club, "Feyenoord");
        assert_eq!(result[1].total_degree, 1);
    }

    #[test]
    fn test_degree_top_n() {
        let g = make_star(20);
        assert_eq!(most_connected(&g, 5).len(), 5);
        assert_eq!(most_connected(&g, DEFAULT_TOP_N).len(), 10);
    }

    #[test]
    fn test_degree_top_n_exceeds_clubs() {
        let g = make_cycle(4);
        let result = most_connected(&g, 100);
        assert_eq!(result.len(), 4);
        let mut names: Vec<&str> = result.iter().map(|d| d.club.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_degree_top_zero() {
        let g = make_star(3);
        assert!(most_connected(&g, 0).is_empty());
    }

    #[test]
    fn test_degree_sorted() {
        let g = graph_of(&[
            ("A", "B"),
            ("A", "C"),
            ("A", "D"),
            ("B", "C"),
            ("E", "B"),
        ]);
        let result = most_connected(&g, 10);
        for w in result.windows(2) {
            assert!(w[0].total_degree >= w[1].total_degree);
        }
        assert_eq!(result[0].club, "A");
        assert_eq!(result[0].total_degree, 3);
        assert_eq!(result[1].club, "B");
        assert_eq!(result[1].total_degree, 3);
    }

    #[test]
    fn test_degree_empty() {
        let g = TransferGraph::new();
        assert!(most_connected(&g, 10).is_empty());
    }
}
