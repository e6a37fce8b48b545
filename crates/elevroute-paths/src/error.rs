//! Error taxonomy for graph construction and route queries.

use elevroute_core::NodeId;
use thiserror::Error;

/// Everything that can go wrong while building a graph or finding a route.
///
/// None of these abort graph construction: a [`MissingEndpoint`] edge is
/// dropped and recorded in [`Graph::diagnostics`](crate::Graph::diagnostics).
///
/// [`MissingEndpoint`]: RouteError::MissingEndpoint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// An input edge references a node id absent from the node list.
    #[error("edge {source_id} -> {target_id} dropped: unknown node {missing}")]
    MissingEndpoint {
        source_id: NodeId,
        target_id: NodeId,
        missing: NodeId,
    },

    /// The goal is not reachable from the start.
    #[error("no path exists from {start} to {goal}")]
    NoPathExists { start: NodeId, goal: NodeId },

    /// A query referenced a node id absent from the graph.
    #[error("unknown node {0}")]
    InvalidNodeReference(NodeId),
}

pub type Result<T> = std::result::Result<T, RouteError>;
