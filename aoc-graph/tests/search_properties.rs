//! Property-based tests for the search engines
//!
//! Random small grids with walls are searched with BFS and Dijkstra and the
//! results are checked against brute-force reference computations.

use std::collections::{HashMap, HashSet};

use aoc_graph::{
    Coord, Graph, Grid, GridGraph, PriorityQueue, Weight, bfs, dijkstra, dijkstra_all_paths,
    dijkstra_any_path, path_weight,
};
use proptest::prelude::*;

/// Grid where `true` marks a wall
fn maze(rows: usize, cols: usize, walls: &[bool]) -> GridGraph<bool, impl Fn(Coord, &bool) -> bool> {
    let grid = Grid::from_rows(walls.chunks(cols).map(<[bool]>::to_vec).collect()).unwrap();
    assert_eq!(grid.height(), rows);
    GridGraph::new(grid).with_filter(|_, &wall| !wall)
}

fn maze_strategy(max_side: usize) -> impl Strategy<Value = (usize, usize, Vec<bool>)> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(rows, cols)| {
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(prop::bool::weighted(0.3), rows * cols),
        )
    })
}

/// All-pairs distances by Floyd-Warshall, indexed by grid key
fn floyd_warshall<G>(graph: &G, nodes: &[Coord]) -> Vec<Vec<usize>>
where
    G: Graph<Node = Coord, Key = usize, Weight = usize>,
{
    let n = nodes.len();
    let mut dist = vec![vec![usize::INFINITY; n]; n];
    for &node in nodes {
        let from = graph.key_for(&node);
        dist[from][from] = 0;
        for next in graph.neighbours(&node) {
            let to = graph.key_for(&next);
            dist[from][to] = dist[from][to].min(graph.edge_weight(&node, &next));
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k].plus(dist[k][j]);
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

fn coords(rows: usize, cols: usize) -> Vec<Coord> {
    (0..rows).flat_map(|r| (0..cols).map(move |c| (r, c))).collect()
}

/// **Feature: grid-search, Property 1: BFS distances are shortest distances**
///
/// *For any* maze and any non-empty set of open starting cells, every distance
/// returned by BFS equals the brute-force distance to the nearest start, and
/// BFS reaches exactly the cells with a finite brute-force distance.
mod property_1_bfs_distances {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn bfs_matches_floyd_warshall(
            (rows, cols, walls) in maze_strategy(6),
            picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
        ) {
            let graph = maze(rows, cols, &walls);
            let all = coords(rows, cols);
            let open: Vec<Coord> = all.iter().copied().filter(|&c| graph.valid_coord(c)).collect();
            prop_assume!(!open.is_empty());

            let starts: Vec<Coord> = picks.iter().map(|pick| *pick.get(&open)).collect();
            let reference = floyd_warshall(&graph, &all);

            let distances = bfs(&graph, starts.clone(), |_, _, _, _| {});

            for &cell in &all {
                let key = graph.key_for(&cell);
                let expected = starts
                    .iter()
                    .map(|start| reference[graph.key_for(start)][key])
                    .min()
                    .unwrap();
                if expected.is_infinite() {
                    prop_assert!(!distances.contains_key(&key));
                } else {
                    prop_assert_eq!(distances.get(&key).copied(), Some(expected));
                }
            }
        }
    }
}

/// **Feature: grid-search, Property 2: Key round trip**
///
/// *For any* grid of size `w x h`, `node_for(key_for(c)) == c` for every
/// coordinate and keys are pairwise distinct.
mod property_2_key_round_trip {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn grid_keys_round_trip(rows in 1usize..30, cols in 1usize..30) {
            let graph = GridGraph::new(Grid::from_rows(vec![vec![0u8; cols]; rows]).unwrap());
            let mut seen = HashSet::new();

            for coord in coords(rows, cols) {
                let key = graph.key_for(&coord);
                prop_assert!(seen.insert(key));
                prop_assert_eq!(graph.node_for(key), coord);
            }
        }
    }
}

/// **Feature: grid-search, Property 3: Single shortest path is valid**
///
/// *For any* maze and two open cells, `dijkstra_any_path` returns the
/// brute-force distance and a connected chain from source to destination
/// whose edge weights sum to it, or `INFINITY` and an empty path.
mod property_3_any_path {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn any_path_is_a_shortest_chain(
            (rows, cols, walls) in maze_strategy(6),
            from in any::<prop::sample::Index>(),
            to in any::<prop::sample::Index>(),
        ) {
            let graph = maze(rows, cols, &walls);
            let all = coords(rows, cols);
            let open: Vec<Coord> = all.iter().copied().filter(|&c| graph.valid_coord(c)).collect();
            prop_assume!(!open.is_empty());

            let source = *from.get(&open);
            let destination = *to.get(&open);
            let expected = floyd_warshall(&graph, &all)[graph.key_for(&source)][graph.key_for(&destination)];

            let (distance, path) = dijkstra_any_path(&graph, &source, &destination);
            prop_assert_eq!(distance, expected);
            prop_assert_eq!(dijkstra(&graph, &source, &destination), expected);

            if expected.is_infinite() {
                prop_assert!(path.is_empty());
            } else {
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&destination));
                for pair in path.windows(2) {
                    prop_assert!(graph.neighbours(&pair[0]).contains(&pair[1]));
                }
                prop_assert_eq!(path_weight(&graph, &path), distance);
            }
        }
    }
}

/// **Feature: grid-search, Property 4: Every shortest path, and only those**
///
/// *For any* maze and two open cells, `dijkstra_all_paths` returns distinct
/// valid paths of the shortest cost, as many as a layered path-count over
/// the BFS distances says exist.
mod property_4_all_paths {
    use super::*;

    /// Number of shortest paths from `source` to every cell of a unit-weight grid
    fn count_shortest_paths<G>(graph: &G, source: Coord) -> HashMap<usize, u64>
    where
        G: Graph<Node = Coord, Key = usize, Weight = usize>,
    {
        let distances = bfs(graph, [source], |_, _, _, _| {});
        let mut order: Vec<(usize, usize)> = distances.iter().map(|(&k, &d)| (d, k)).collect();
        order.sort_unstable();

        let mut counts: HashMap<usize, u64> = HashMap::new();
        counts.insert(graph.key_for(&source), 1);
        for &(distance, key) in &order {
            let node = graph.node_for(key);
            let count = counts.get(&key).copied().unwrap_or(0);
            for next in graph.neighbours(&node) {
                let next_key = graph.key_for(&next);
                if distances.get(&next_key) == Some(&(distance + 1)) {
                    *counts.entry(next_key).or_insert(0) += count;
                }
            }
        }
        counts
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn all_paths_are_exactly_the_shortest_ones(
            (rows, cols, walls) in maze_strategy(5),
            from in any::<prop::sample::Index>(),
            to in any::<prop::sample::Index>(),
        ) {
            let graph = maze(rows, cols, &walls);
            let open: Vec<Coord> = coords(rows, cols).into_iter().filter(|&c| graph.valid_coord(c)).collect();
            prop_assume!(!open.is_empty());

            let source = *from.get(&open);
            let destination = *to.get(&open);
            let (distance, paths) = dijkstra_all_paths(&graph, &source, &destination);

            if distance.is_infinite() {
                prop_assert!(paths.is_empty());
                return Ok(());
            }

            let expected = count_shortest_paths(&graph, source)[&graph.key_for(&destination)];
            prop_assert_eq!(paths.len() as u64, expected);

            let unique: HashSet<&Vec<Coord>> = paths.iter().collect();
            prop_assert_eq!(unique.len(), paths.len());
            for path in &paths {
                prop_assert_eq!(path.len(), distance + 1);
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&destination));
                prop_assert_eq!(path_weight(&graph, path), distance);
            }
        }
    }
}

/// **Feature: grid-search, Property 5: Queue order**
///
/// *For any* sequence of pushes, popping the queue yields the entries sorted
/// by priority, with equal priorities in insertion order.
mod property_5_queue_order {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn queue_pops_in_stable_priority_order(priorities in prop::collection::vec(0u8..10, 0..50)) {
            let mut queue = PriorityQueue::new();
            for (index, &priority) in priorities.iter().enumerate() {
                queue.push(index, priority);
            }

            let mut expected: Vec<(usize, u8)> = priorities.iter().copied().enumerate().collect();
            expected.sort_by_key(|&(_, priority)| priority);

            let popped: Vec<(usize, u8)> = std::iter::from_fn(|| queue.pop()).collect();
            prop_assert_eq!(popped, expected);
        }
    }
}
