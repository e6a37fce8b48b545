//! **elevroute-core**: geospatial route graph primitives.
//!
//! This crate provides the value types shared across the *elevroute*
//! workspace: node identifiers, geospatial nodes with elevation, input
//! edges, and the pure cost model that turns a pair of adjacent nodes into
//! a traversal cost.

pub mod cost;
pub mod node;

pub use cost::{distance_km, edge_cost, elevation_penalty, path_cost};
pub use node::{Edge, Node, NodeId};
