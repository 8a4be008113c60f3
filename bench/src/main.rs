use graph_search_core::{
    bfs, component_scan, dfs, edge_to_adjacency_list, shortest_path, IntEdgeList, RawId, Readable,
};
use std::collections::VecDeque;
use std::time::Instant;

/// The component scan allocates a full-size traversal per seed, so it is
/// quadratic on graphs with many seeds. Skip it above this size.
const SCAN_LIMIT: u64 = 20_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-search-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  lsystem     Fractal branching tree (deep paths)");
        println!("  scalefree   Preferential attachment via edge sampling (hub-and-spoke)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense cliques connected by a thin bridge");
        println!("  dla         Diffusion-limited aggregation (organic branching)");
        println!();
        println!("Default node_count: 200000");
        println!("Component scan runs only for node_count <= {}", SCAN_LIMIT);
        return;
    }

    if node_count < 16 {
        eprintln!("node_count must be at least 16");
        return;
    }

    println!("graph-search-bench");
    println!("==================");
    println!();

    let generators: Vec<(&str, fn(u64) -> IntEdgeList)> = match mode {
        "lsystem" => vec![("L-system tree", gen_lsystem)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("L-system tree", gen_lsystem as fn(u64) -> IntEdgeList),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: fn(u64) -> IntEdgeList, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let edges = generator(node_count);
    println!("Generated {} edges in {:.1}ms", edges.0.len(), ms(t));

    let t = Instant::now();
    let normalized = match edge_to_adjacency_list(&edges) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("normalization failed: {}", e);
            return;
        }
    };
    let graph = normalized.graph.as_ref();
    println!(
        "Normalized in {:.1}ms, {} vertices",
        ms(t),
        graph.size()
    );

    println!();
    println!("{:>14} {:>12} {:>12} {:>10}", "search", "finalized", "edges seen", "time");
    println!("{:->14} {:->12} {:->12} {:->10}", "", "", "", "");

    for label in ["bfs", "dfs"] {
        let t = Instant::now();
        let result = if label == "bfs" {
            bfs(graph, 0, None)
        } else {
            dfs(graph, 0, None)
        };
        match result {
            Ok(tr) => println!(
                "{:>14} {:>12} {:>12} {:>8.1}ms",
                label,
                tr.vertex_ordering.len(),
                tr.edge_ordering.len(),
                ms(t)
            ),
            Err(e) => println!("{:>14} failed: {}", label, e),
        }
    }

    if node_count <= SCAN_LIMIT {
        let t = Instant::now();
        match component_scan(graph, dfs) {
            Ok(components) => println!(
                "{:>14} {:>12} {:>12} {:>8.1}ms",
                "scan",
                components.len(),
                components.iter().map(|c| c.edge_ordering.len()).sum::<usize>(),
                ms(t)
            ),
            Err(e) => println!("{:>14} failed: {}", "scan", e),
        }
    }

    // Shortest path: first vertex to last vertex
    let far = graph.size() - 1;
    println!();
    let t = Instant::now();
    match shortest_path(graph, 0, far) {
        Some(tr) => println!(
            "Shortest path 0 → {}: {} hops in {:.1}ms",
            far,
            tr.distance[far],
            ms(t)
        ),
        None => println!("Shortest path 0 → {}: no path ({:.1}ms)", far, ms(t)),
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: O(n) or O(n + edges), single-threaded and deterministic.
// Node i is emitted as raw id `raw(i)`, so normalization has real work to do.
// ---------------------------------------------------------------------------

fn raw(i: u64) -> RawId {
    (i * 7 + 3) as RawId
}

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
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// L-system fractal tree: every node spawns three children. Deep BFS from the root.
fn gen_lsystem(node_count: u64) -> IntEdgeList {
    let branching = 3u64;
    let mut edges = Vec::with_capacity(node_count as usize);

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                edges.push((raw(parent), raw(child)));
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    IntEdgeList(edges)
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Each new node attaches to endpoints of randomly picked existing edges, so
/// well-connected nodes keep attracting more edges.
fn gen_scale_free(node_count: u64) -> IntEdgeList {
    let edges_per_node = 10u64;
    let mut edges = Vec::with_capacity((node_count * edges_per_node) as usize);
    let mut rng = FastRng::new(12345);
    let mut endpoints: Vec<u64> = Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    // Seed: small clique, wired both ways.
    let seed = 5u64;
    for i in 0..seed {
        for j in (i + 1)..seed {
            edges.push((raw(i), raw(j)));
            edges.push((raw(j), raw(i)));
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for new_node in seed..node_count {
        let attach = edges_per_node.min(new_node);
        for _ in 0..attach {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target != new_node {
                edges.push((raw(target), raw(new_node)));
                endpoints.push(new_node);
                endpoints.push(target);
            }
        }
    }

    IntEdgeList(edges)
}

/// Small-world (Watts-Strogatz): ring lattice with a few random rewires.
fn gen_small_world(node_count: u64) -> IntEdgeList {
    let k = 10u64;
    let p = 0.05f64;
    let mut edges = Vec::with_capacity((node_count * k) as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                let target = if rewired != i { rewired } else { neighbor };
                edges.push((raw(i), raw(target)));
            } else {
                edges.push((raw(i), raw(neighbor)));
            }
        }
    }

    IntEdgeList(edges)
}

/// Erdos-Renyi: ~10 uniform random out-edges per node. Self-loops skipped.
fn gen_random(node_count: u64) -> IntEdgeList {
    let target_edges = node_count * 10;
    let mut edges = Vec::with_capacity(target_edges as usize);
    let mut rng = FastRng::new(54321);

    // Touch every node once so the vertex count matches node_count.
    for i in 0..node_count {
        edges.push((raw(i), raw((i + 1) % node_count)));
    }
    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            edges.push((raw(from), raw(to)));
        }
    }

    IntEdgeList(edges)
}

/// Barbell: two dense cliques joined by a chain of ten bridge nodes.
/// Worst case for finding a path through a bottleneck.
fn gen_barbell(node_count: u64) -> IntEdgeList {
    let bridge_len = 10u64;
    let clique_size = (node_count - bridge_len) / 2;
    let mut edges = Vec::with_capacity((clique_size * 40 + bridge_len) as usize);
    let mut rng = FastRng::new(99999);

    let mut clique = |edges: &mut Vec<(RawId, RawId)>, start: u64| {
        for i in 0..clique_size {
            // Keep the clique strongly connected regardless of the random picks.
            edges.push((raw(start + i), raw(start + (i + 1) % clique_size)));
            for _ in 0..20u64.min(clique_size - 1) {
                let target = rng.next(clique_size);
                if target != i {
                    edges.push((raw(start + i), raw(start + target)));
                }
            }
        }
    };

    clique(&mut edges, 0);

    let bridge_start = clique_size;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        let prev = if i == 0 { clique_size - 1 } else { id - 1 };
        edges.push((raw(prev), raw(id)));
    }

    let b_start = bridge_start + bridge_len;
    edges.push((raw(b_start - 1), raw(b_start)));
    clique(&mut edges, b_start);

    IntEdgeList(edges)
}

/// DLA (diffusion-limited aggregation): organic branching growth.
///
/// Each new node hangs off a recent "surface" node, with an occasional
/// second edge to any older node.
fn gen_dla(node_count: u64) -> IntEdgeList {
    let mut edges = Vec::with_capacity((node_count * 2) as usize);
    let mut rng = FastRng::new(77777);

    let mut surface: VecDeque<u64> = VecDeque::with_capacity(10001);
    surface.push_back(0);
    let surface_max = 10000usize;

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        edges.push((raw(attach_to), raw(new_node)));

        // 10% chance of a second edge (creates shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                edges.push((raw(other), raw(new_node)));
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    IntEdgeList(edges)
}
