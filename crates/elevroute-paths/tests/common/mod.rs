//! Seeded random terrain graphs for property tests.

#![allow(dead_code)]

use elevroute_core::{Edge, Node};
use elevroute_paths::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Grid spacing in degrees (roughly 110 m).
pub const STEP: f64 = 0.001;

/// Id of the node at `(row, col)`.
pub fn id(row: usize, col: usize) -> String {
    format!("r{row}c{col}")
}

/// An `n` by `n` grid of nodes near 46°N 7°E with random elevation up to
/// `max_elevation` meters. Cardinal edges are kept with probability
/// `keep`, diagonals are added with probability `diagonal`.
pub fn terrain(seed: u64, n: usize, max_elevation: f64, keep: f64, diagonal: f64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut nodes = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let elevation = if max_elevation > 0.0 {
                rng.random_range(0.0..max_elevation)
            } else {
                0.0
            };
            nodes.push(Node::new(
                id(row, col),
                46.0 + row as f64 * STEP,
                7.0 + col as f64 * STEP,
                elevation,
            ));
        }
    }

    let mut edges = Vec::new();
    for row in 0..n {
        for col in 0..n {
            if col + 1 < n && rng.random_bool(keep) {
                edges.push(Edge::new(id(row, col), id(row, col + 1)));
            }
            if row + 1 < n && rng.random_bool(keep) {
                edges.push(Edge::new(id(row, col), id(row + 1, col)));
            }
            if row + 1 < n && col + 1 < n && rng.random_bool(diagonal) {
                edges.push(Edge::new(id(row, col), id(row + 1, col + 1)));
            }
        }
    }
    Graph::build(nodes, edges)
}

/// Random `(start, goal)` id pairs over an `n` by `n` grid.
pub fn endpoints(seed: u64, n: usize, count: usize) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (
                id(rng.random_range(0..n), rng.random_range(0..n)),
                id(rng.random_range(0..n), rng.random_range(0..n)),
            )
        })
        .collect()
}
