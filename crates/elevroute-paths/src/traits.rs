use elevroute_core::Node;

use crate::error::RouteError;
use crate::metrics::{MetricsSink, NoopSink};
use crate::route::Route;

/// Estimate of the remaining cost between two nodes, used to order the
/// frontier.
///
/// A* returns optimal routes only if the estimate never exceeds the true
/// cost (admissible) and is expressed in the same unit as the edge costs.
pub trait Heuristic {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: &Node, to: &Node) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Node, &Node) -> f64,
{
    fn estimate(&self, from: &Node, to: &Node) -> f64 {
        self(from, to)
    }
}

/// A route search strategy over a borrowed graph.
///
/// Each call runs to completion with its own search state, so one searcher
/// can answer any number of sequential queries.
pub trait PathSearch {
    /// Find a route, reporting run metrics to `sink` before returning.
    ///
    /// An unreachable goal is not an error: the returned [`Route`] is
    /// empty. Unknown ids fail with [`RouteError::InvalidNodeReference`].
    fn find_path_observed(
        &self,
        start: &str,
        goal: &str,
        sink: &mut dyn MetricsSink,
    ) -> Result<Route, RouteError>;

    /// Find a route without observing metrics.
    fn find_path(&self, start: &str, goal: &str) -> Result<Route, RouteError> {
        self.find_path_observed(start, goal, &mut NoopSink)
    }
}
