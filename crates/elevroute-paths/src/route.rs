use elevroute_core::NodeId;

use crate::error::RouteError;
use crate::metrics::SearchMetrics;

/// Result of one route query.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    start: NodeId,
    goal: NodeId,
    /// Node ids from start to goal inclusive; empty when no route exists.
    pub path: Vec<NodeId>,
    pub metrics: SearchMetrics,
}

impl Route {
    pub(crate) fn new(start: NodeId, goal: NodeId, path: Vec<NodeId>, metrics: SearchMetrics) -> Self {
        Self {
            start,
            goal,
            path,
            metrics,
        }
    }

    #[inline]
    pub fn start(&self) -> &NodeId {
        &self.start
    }

    #[inline]
    pub fn goal(&self) -> &NodeId {
        &self.goal
    }

    /// Whether a route was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Total cost of the route, `None` when no route was found.
    #[inline]
    pub fn cost(&self) -> Option<f64> {
        self.metrics.path_distance
    }

    /// The path as string slices.
    pub fn ids(&self) -> Vec<&str> {
        self.path.iter().map(NodeId::as_str).collect()
    }

    /// Turn an empty route into [`RouteError::NoPathExists`].
    pub fn into_result(self) -> Result<Route, RouteError> {
        if self.is_found() {
            Ok(self)
        } else {
            Err(RouteError::NoPathExists {
                start: self.start,
                goal: self.goal,
            })
        }
    }
}
