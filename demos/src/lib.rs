//! Synthetic terrain shared by the demos.
//!
//! Stands in for a real data loader: produces node and edge lists for a
//! hilly grid with a lake in the middle that routes must go around.

use elevroute_core::{Edge, Node};
use rand::{Rng, SeedableRng};

pub const ROWS: usize = 40;
pub const COLS: usize = 60;

/// Grid spacing in degrees.
const STEP: f64 = 0.0005;
const ORIGIN_LAT: f64 = 46.55;
const ORIGIN_LON: f64 = 7.98;

/// Id of the node at `(row, col)`.
pub fn node_id(row: usize, col: usize) -> String {
    format!("n{row}_{col}")
}

/// Node and edge lists ready for [`GraphBuilder`](elevroute_paths::GraphBuilder).
pub struct Terrain {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Terrain {
    /// Generate the grid. The same seed always yields the same terrain.
    pub fn generate(seed: u64) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut nodes = Vec::with_capacity(ROWS * COLS);
        for row in 0..ROWS {
            for col in 0..COLS {
                let (y, x) = (row as f64 / ROWS as f64, col as f64 / COLS as f64);
                // Two ridges running north-south plus noise.
                let ridge = 400.0 * (x * std::f64::consts::TAU).sin().abs();
                let slope = 150.0 * y;
                let noise = rng.random_range(-20.0..20.0);
                nodes.push(Node::new(
                    node_id(row, col),
                    ORIGIN_LAT + row as f64 * STEP,
                    ORIGIN_LON + col as f64 * STEP,
                    1000.0 + ridge + slope + noise,
                ));
            }
        }

        let mut edges = Vec::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                if in_lake(row, col) {
                    continue;
                }
                let mut link = |r: usize, c: usize| {
                    if r < ROWS && c < COLS && !in_lake(r, c) {
                        edges.push(Edge::new(node_id(row, col), node_id(r, c)));
                    }
                };
                link(row, col + 1);
                link(row + 1, col);
                link(row + 1, col + 1);
                if col > 0 {
                    link(row + 1, col - 1);
                }
            }
        }
        // One edge that points at a node the loader never produced.
        edges.push(Edge::new(node_id(0, 0), "ghost"));

        Self { nodes, edges }
    }
}

fn in_lake(row: usize, col: usize) -> bool {
    let dr = row as f64 - ROWS as f64 / 2.0;
    let dc = col as f64 - COLS as f64 / 2.0;
    dr * dr / 64.0 + dc * dc / 144.0 < 1.0
}
