//! Benchmark comparing the search engines on random mazes.
//!
//! Run with: cargo run --example maze_benchmark --release
//!
//! Generates random walled grids and compares:
//! - BFS distances against Dijkstra distances (unit weights, same answers)
//! - Single-path against all-paths reconstruction
//! - DistanceMatrix on the global pool against a single-threaded pool

use aoc_graph::{
    Coord, DistanceMatrix, Grid, GridGraph, bfs, dijkstra_all_paths, dijkstra_any_path,
    dijkstra_distances,
};
use rayon::ThreadPoolBuilder;
use std::time::Instant;

const GRID_SIZE: usize = 120;
const NUM_GRIDS: usize = 20;
const SMALL_GRID_SIZE: usize = 8;
const NUM_POINTS: usize = 16;

/// Generate a random maze where roughly one cell in `wall_ratio` is a wall.
/// The corners are always open.
fn generate_random_maze(seed: u64, size: usize, wall_ratio: u64) -> Grid<char> {
    let mut rng = seed;
    let rows = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
                    let corner = (row == 0 || row == size - 1) && (col == 0 || col == size - 1);
                    if !corner && (rng >> 33) % wall_ratio == 0 {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("generated rows are rectangular")
}

fn walls(grid: Grid<char>) -> GridGraph<char, impl Fn(Coord, &char) -> bool + Sync> {
    GridGraph::new(grid).with_filter(|_, &cell| cell != '#')
}

fn main() {
    println!("Maze Search Benchmark");
    println!("=====================\n");

    let graphs: Vec<_> = (0..NUM_GRIDS)
        .map(|i| walls(generate_random_maze(42 + i as u64, GRID_SIZE, 4)))
        .collect();
    let corner = (0, 0);
    let far = (GRID_SIZE - 1, GRID_SIZE - 1);

    println!("Sample maze[0] top-left corner:");
    for row in graphs[0].grid().rows().take(5) {
        println!("  {}", row.iter().take(20).collect::<String>());
    }

    // =========================================================================
    // Single source distances
    // =========================================================================
    println!("\n=== Single source ({}x{}, {} grids) ===", GRID_SIZE, GRID_SIZE, NUM_GRIDS);

    println!("Running BFS...");
    let start = Instant::now();
    let bfs_results: Vec<usize> = graphs
        .iter()
        .map(|graph| bfs(graph, [corner], |_, _, _, _| {}).len())
        .collect();
    let bfs_time = start.elapsed();
    println!("BFS:                         {:?}", bfs_time);

    println!("Running dijkstra_distances...");
    let start = Instant::now();
    let dijkstra_results: Vec<usize> = graphs
        .iter()
        .map(|graph| dijkstra_distances(graph, &corner).len())
        .collect();
    let dijkstra_time = start.elapsed();
    println!("dijkstra_distances:          {:?}", dijkstra_time);

    assert_eq!(bfs_results, dijkstra_results, "reachable cell counts differ");
    println!("✓ Reachable cell counts match");

    // =========================================================================
    // Path reconstruction
    // =========================================================================
    println!("\n=== Corner to corner paths ===");

    println!("Running dijkstra_any_path...");
    let start = Instant::now();
    let any_results: Vec<usize> = graphs
        .iter()
        .map(|graph| dijkstra_any_path(graph, &corner, &far).0)
        .collect();
    let any_time = start.elapsed();
    println!("dijkstra_any_path:           {:?}", any_time);
    println!(
        "  {} of {} far corners reachable",
        any_results.iter().filter(|&&d| d != usize::MAX).count(),
        NUM_GRIDS
    );

    // Shortest path counts grow combinatorially, so all-paths runs on small mazes
    let small_graphs: Vec<_> = (0..NUM_GRIDS)
        .map(|i| walls(generate_random_maze(42 + i as u64, SMALL_GRID_SIZE, 4)))
        .collect();
    let small_far = (SMALL_GRID_SIZE - 1, SMALL_GRID_SIZE - 1);

    println!("Running dijkstra_all_paths ({}x{})...", SMALL_GRID_SIZE, SMALL_GRID_SIZE);
    let start = Instant::now();
    let all_results: Vec<(usize, usize)> = small_graphs
        .iter()
        .map(|graph| {
            let (distance, paths) = dijkstra_all_paths(graph, &corner, &small_far);
            (distance, paths.len())
        })
        .collect();
    let all_time = start.elapsed();
    println!("dijkstra_all_paths:          {:?}", all_time);

    for (i, (graph, (distance, count))) in small_graphs.iter().zip(&all_results).enumerate().take(5) {
        let (expected, _) = dijkstra_any_path(graph, &corner, &small_far);
        assert_eq!(*distance, expected, "distances differ for grid {}", i);
        println!("  grid {}: distance {}, {} shortest paths", i, distance, count);
    }
    println!("✓ Distances match");

    // =========================================================================
    // Distance matrix
    // =========================================================================
    println!("\n=== Distance matrix ({} points) ===", NUM_POINTS);

    let graph = &graphs[0];
    let points: Vec<Coord> = graph
        .grid()
        .positions(|&cell| cell == '.')
        .into_iter()
        .step_by(GRID_SIZE * GRID_SIZE / NUM_POINTS / 2)
        .take(NUM_POINTS)
        .collect();

    println!("Running DistanceMatrix (global pool)...");
    let start = Instant::now();
    let parallel = DistanceMatrix::between(graph, &points);
    let parallel_time = start.elapsed();
    println!("Global pool:                 {:?}", parallel_time);

    println!("Running DistanceMatrix (1 thread)...");
    let pool = ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .expect("failed to build thread pool");
    let start = Instant::now();
    let sequential = DistanceMatrix::between_in(&pool, graph, &points);
    let sequential_time = start.elapsed();
    println!("Single thread:               {:?}", sequential_time);

    for from in parallel.keys() {
        for to in parallel.keys() {
            assert_eq!(parallel.get(from, to), sequential.get(from, to));
        }
    }
    println!("✓ Matrices match");

    println!("\n=== Summary ===");
    println!(
        "Parallel speedup: {:.2}x",
        sequential_time.as_secs_f64() / parallel_time.as_secs_f64()
    );
}
