use std::time::Instant;

use transfer_graph_core::{most_connected, shortest_path, Transfer, TransferGraph};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let club_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(5_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: transfer-graph-bench [mode] [club_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  market      Preferential attachment (big clubs buy from everyone)");
        println!("  random      Uniform random transfers");
        println!("  pyramid     Tiered leagues, players moving up and down one tier");
        println!();
        println!("Default club_count: 5000");
        return;
    }

    if club_count < 2 {
        eprintln!("club_count must be at least 2");
        return;
    }

    println!("transfer-graph-bench");
    println!("====================");
    println!();

    let generators: Vec<(&str, fn(u64) -> TransferGraph)> = match mode {
        "market" => vec![("Preferential market", gen_market)],
        "random" => vec![("Uniform random", gen_random)],
        "pyramid" => vec![("League pyramid", gen_pyramid)],
        "all" => vec![
            ("Preferential market", gen_market as fn(u64) -> TransferGraph),
            ("Uniform random", gen_random),
            ("League pyramid", gen_pyramid),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, club_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> TransferGraph, club_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} clubs", club_count);

    let t = Instant::now();
    let graph = generator(club_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} clubs, {} connections, {} transfers",
        gen_time.as_secs_f64(),
        graph.club_count(),
        graph.edge_count(),
        graph.transfer_count()
    );

    let t = Instant::now();
    let top = most_connected(&graph, 10);
    let elapsed = t.elapsed();
    println!();
    println!("Ranking top 10 in {:.1}ms", elapsed.as_secs_f64() * 1000.0);
    for (i, d) in top.iter().take(3).enumerate() {
        println!("  {}. {} ({} connections)", i + 1, d.club, d.total_degree);
    }

    // Paths from the first club to clubs spread across the name range.
    println!();
    println!("{:>12} {:>12} {:>8} {:>10}", "from", "to", "hops", "time");
    println!("{:->12} {:->12} {:->8} {:->10}", "", "", "", "");

    let source = club_name(0);
    for target_idx in [1, club_count / 10, club_count / 2, club_count - 1] {
        let target = club_name(target_idx);
        let t = Instant::now();
        let result = shortest_path(&graph, &source, &target);
        let elapsed = t.elapsed();
        let hops = match result {
            Ok(path) => (path.len() - 1).to_string(),
            Err(_) => "-".to_string(),
        };
        println!(
            "{:>12} {:>12} {:>8} {:>8.1}ms",
            source,
            target,
            hops,
            elapsed.as_secs_f64() * 1000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: single-threaded and deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

const POSITIONS: [&str; 5] = ["Goalkeeper", "Centre-Back", "Central Midfield", "Left Winger", "Centre-Forward"];

fn club_name(i: u64) -> String {
    format!("club-{:06}", i)
}

fn random_transfer(rng: &mut FastRng, serial: u64) -> Transfer {
    Transfer::new(
        format!("player-{}", serial),
        POSITIONS[rng.next(POSITIONS.len() as u64) as usize],
        rng.next(100_000) as f64 / 1000.0,
        1992 + rng.next(30) as i32,
    )
}

/// Preferential attachment via endpoint sampling.
///
/// Each new club trades with clubs picked from the list of past transfer
/// endpoints, so clubs that already trade a lot keep attracting deals.
fn gen_market(club_count: u64) -> TransferGraph {
    let deals_per_club = 6u64;
    let mut graph = TransferGraph::new();
    let mut rng = FastRng::new(12345);
    let mut endpoints: Vec<u64> = Vec::with_capacity((club_count * deals_per_club * 2) as usize);
    let mut serial = 0u64;

    // Seed: a small group of clubs all trading with each other
    let seed = 5u64.min(club_count);
    for i in 0..seed {
        for j in 0..seed {
            if i != j {
                graph.add_transfer(&club_name(i), &club_name(j), random_transfer(&mut rng, serial));
                serial += 1;
                endpoints.push(i);
                endpoints.push(j);
            }
        }
    }

    for new_club in seed..club_count {
        for _ in 0..deals_per_club {
            let other = endpoints[rng.next(endpoints.len() as u64) as usize];
            // Alternate buying and selling so hubs gain both in- and out-edges.
            let (from, to) = if rng.next(2) == 0 { (new_club, other) } else { (other, new_club) };
            graph.add_transfer(&club_name(from), &club_name(to), random_transfer(&mut rng, serial));
            serial += 1;
            endpoints.push(from);
            endpoints.push(to);
        }
    }

    graph
}

/// Uniform random transfers, about ten per club.
fn gen_random(club_count: u64) -> TransferGraph {
    let mut graph = TransferGraph::new();
    let mut rng = FastRng::new(54321);

    for serial in 0..club_count * 10 {
        let from = rng.next(club_count);
        let to = rng.next(club_count);
        if from != to {
            graph.add_transfer(&club_name(from), &club_name(to), random_transfer(&mut rng, serial));
        }
    }

    graph
}

/// Tiered league pyramid.
///
/// Clubs are split into tiers of 20. Players move within a tier or one tier
/// up or down, so long chains are needed to cross the pyramid.
fn gen_pyramid(club_count: u64) -> TransferGraph {
    let tier_size = 20u64;
    let mut graph = TransferGraph::new();
    let mut rng = FastRng::new(77777);
    let mut serial = 0u64;

    for club in 0..club_count {
        let tier = club / tier_size;
        for _ in 0..4 {
            let target_tier = match rng.next(3) {
                0 => tier.saturating_sub(1),
                1 => tier,
                _ => tier + 1,
            };
            let target = target_tier * tier_size + rng.next(tier_size);
            if target != club && target < club_count {
                graph.add_transfer(&club_name(club), &club_name(target), random_transfer(&mut rng, serial));
                serial += 1;
            }
        }
    }

    graph
}
