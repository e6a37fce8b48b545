use std::time::Instant;

use log::{debug, trace};

use crate::error::RouteError;
use crate::graph::Graph;
use crate::heuristic::RawDegrees;
use crate::metrics::{MetricsSink, SearchMetrics};
use crate::reconstruct::reconstruct_path;
use crate::route::Route;
use crate::state::SearchState;
use crate::traits::{Heuristic, PathSearch};

/// Single-direction best-first (A*) search.
///
/// The frontier is ordered by `g + h` where `h` comes from the heuristic,
/// [`RawDegrees`] unless another is given. Equal scores pop in the order
/// they were pushed.
#[derive(Clone, Copy, Debug)]
pub struct AstarSearch<'g, H = RawDegrees> {
    graph: &'g Graph,
    heuristic: H,
}

impl<'g> AstarSearch<'g> {
    /// A* over `graph` with the raw-degree heuristic.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_heuristic(graph, RawDegrees)
    }
}

impl<'g, H: Heuristic> AstarSearch<'g, H> {
    /// A* over `graph` with a custom heuristic.
    pub fn with_heuristic(graph: &'g Graph, heuristic: H) -> Self {
        Self { graph, heuristic }
    }

}

impl<H: Heuristic> PathSearch for AstarSearch<'_, H> {
    fn find_path_observed(
        &self,
        start: &str,
        goal: &str,
        sink: &mut dyn MetricsSink,
    ) -> Result<Route, RouteError> {
        let started = Instant::now();
        let graph = self.graph;
        let s = graph.require(start)?;
        let t = graph.require(goal)?;
        trace!("astar: {start} -> {goal}");

        let h0 = self.heuristic.estimate(graph.node_at(s), graph.node_at(t));
        let mut state = SearchState::new(s, h0);

        while let Some(current) = state.pop_open() {
            if current == t {
                let path = reconstruct_path(t, |&i| state.parent(i), graph.node_count());
                let metrics = SearchMetrics {
                    search_time: started.elapsed(),
                    max_open_set_size: state.max_open(),
                    predecessor_map_size: state.predecessor_count(),
                    path_distance: (!path.is_empty()).then(|| graph.route_cost(&path)),
                };
                metrics.report(sink);
                debug!(
                    "astar: {start} -> {goal} found {} nodes in {:.2} ms",
                    path.len(),
                    metrics.search_time_ms()
                );
                return Ok(Route::new(
                    start.into(),
                    goal.into(),
                    graph.ids(&path),
                    metrics,
                ));
            }

            expand(graph, &mut state, &self.heuristic, current, t, None);
        }

        let metrics = SearchMetrics {
            search_time: started.elapsed(),
            max_open_set_size: state.max_open(),
            predecessor_map_size: state.predecessor_count(),
            path_distance: None,
        };
        metrics.report(sink);
        debug!(
            "astar: no path {start} -> {goal} after {:.2} ms (max open set {}, predecessor map {})",
            metrics.search_time_ms(),
            metrics.max_open_set_size,
            metrics.predecessor_map_size
        );
        Ok(Route::new(start.into(), goal.into(), Vec::new(), metrics))
    }
}

/// Relax every edge out of `current`, estimating toward `target`.
///
/// Nodes whose cost improved are appended to `improved` when given.
pub(crate) fn expand<H: Heuristic>(
    graph: &Graph,
    state: &mut SearchState,
    heuristic: &H,
    current: usize,
    target: usize,
    mut improved: Option<&mut Vec<usize>>,
) {
    let g = state.g(current);
    let target_node = graph.node_at(target);
    for nb in graph.adjacent(current) {
        let tentative = g + nb.cost;
        if tentative < state.g(nb.idx) {
            let h = heuristic.estimate(graph.node_at(nb.idx), target_node);
            state.relax(current, nb.idx, tentative, h);
            if let Some(out) = improved.as_mut() {
                out.push(nb.idx);
            }
        }
    }
}
