//! Bidirectional best-first search.
//!
//! One expansion grows from the start toward the goal, another from the
//! goal toward the start, each with its own scores, predecessors and
//! frontier. They alternate one node at a time until they meet; the route
//! is the forward chain up to the meeting node followed by the backward
//! chain from it.
//!
//! When to stop is governed by [`MeetingRule`]. The default,
//! [`MeetingRule::FirstContact`], ends at the first node one side processes
//! that the other side has already reached. That is cheap but may return a
//! costlier route than necessary. [`MeetingRule::Bounded`] keeps going
//! until neither frontier can beat the best connection found.

use std::time::Instant;

use log::{debug, trace};

use crate::astar::expand;
use crate::config::MeetingRule;
use crate::error::RouteError;
use crate::graph::Graph;
use crate::heuristic::RawDegrees;
use crate::metrics::{MetricsSink, SearchMetrics};
use crate::reconstruct::reconstruct_bidirectional;
use crate::route::Route;
use crate::state::SearchState;
use crate::traits::{Heuristic, PathSearch};

/// Two-sided best-first search over a borrowed graph.
#[derive(Clone, Copy, Debug)]
pub struct BidirectionalSearch<'g, H = RawDegrees> {
    graph: &'g Graph,
    heuristic: H,
    rule: MeetingRule,
}

impl<'g> BidirectionalSearch<'g> {
    /// Bidirectional search over `graph` with the raw-degree heuristic and
    /// the first-contact meeting rule.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_heuristic(graph, RawDegrees)
    }
}

impl<'g, H: Heuristic> BidirectionalSearch<'g, H> {
    /// Bidirectional search with a custom heuristic. Each side estimates
    /// toward the opposite endpoint.
    pub fn with_heuristic(graph: &'g Graph, heuristic: H) -> Self {
        Self {
            graph,
            heuristic,
            rule: MeetingRule::default(),
        }
    }

    /// Use `rule` to decide when the two sides have met.
    pub fn with_meeting_rule(mut self, rule: MeetingRule) -> Self {
        self.rule = rule;
        self
    }

    /// The rule deciding when the two sides have met.
    pub fn meeting_rule(&self) -> MeetingRule {
        self.rule
    }

    /// Stop at the first node processed by one side that already has a
    /// predecessor on the other side (or is the other side's root).
    fn first_contact(
        &self,
        fwd: &mut SearchState,
        bwd: &mut SearchState,
        start: usize,
        goal: usize,
    ) -> Option<usize> {
        while !(fwd.is_exhausted() && bwd.is_exhausted()) {
            if let Some(c) = fwd.pop_open() {
                expand(self.graph, fwd, &self.heuristic, c, goal, None);
                if c == goal || bwd.has_parent(c) {
                    return Some(c);
                }
            }
            if let Some(c) = bwd.pop_open() {
                expand(self.graph, bwd, &self.heuristic, c, start, None);
                if c == start || fwd.has_parent(c) {
                    return Some(c);
                }
            }
        }
        None
    }

    /// Track the cheapest `g_fwd + g_bwd` connection and stop once the
    /// larger of the two frontier minima reaches it.
    fn bounded(
        &self,
        fwd: &mut SearchState,
        bwd: &mut SearchState,
        start: usize,
        goal: usize,
    ) -> Option<usize> {
        let mut best: Option<(f64, usize)> = None;
        let mut improved = Vec::new();

        loop {
            let kf = fwd.min_f();
            let kb = bwd.min_f();
            match best {
                // One side has run dry without touching the other: the
                // endpoints are in different components.
                None if kf.is_none() || kb.is_none() => break,
                Some((mu, _)) => {
                    let bound = kf
                        .unwrap_or(f64::INFINITY)
                        .max(kb.unwrap_or(f64::INFINITY));
                    if bound >= mu {
                        break;
                    }
                }
                None => {}
            }

            if let Some(c) = fwd.pop_open() {
                improved.clear();
                expand(self.graph, fwd, &self.heuristic, c, goal, Some(&mut improved));
                connect(&improved, fwd, bwd, &mut best);
            }
            if let Some(c) = bwd.pop_open() {
                improved.clear();
                expand(self.graph, bwd, &self.heuristic, c, start, Some(&mut improved));
                connect(&improved, fwd, bwd, &mut best);
            }
        }

        best.map(|(_, m)| m)
    }
}

/// Update `best` with any improved node that both sides have reached.
///
/// A node only one side has reached has an infinite total and never counts.
fn connect(
    improved: &[usize],
    fwd: &SearchState,
    bwd: &SearchState,
    best: &mut Option<(f64, usize)>,
) {
    for &n in improved {
        let total = fwd.g(n) + bwd.g(n);
        if total.is_finite() && best.is_none_or(|(mu, _)| total < mu) {
            *best = Some((total, n));
        }
    }
}

impl<H: Heuristic> PathSearch for BidirectionalSearch<'_, H> {
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
        trace!("bidirectional ({:?}): {start} -> {goal}", self.rule);

        if s == t {
            let metrics = SearchMetrics {
                search_time: started.elapsed(),
                // Both frontiers were seeded.
                max_open_set_size: 2,
                predecessor_map_size: 0,
                path_distance: Some(0.0),
            };
            metrics.report(sink);
            return Ok(Route::new(
                start.into(),
                goal.into(),
                graph.ids(&[s]),
                metrics,
            ));
        }

        let (sn, tn) = (graph.node_at(s), graph.node_at(t));
        let mut fwd = SearchState::new(s, self.heuristic.estimate(sn, tn));
        let mut bwd = SearchState::new(t, self.heuristic.estimate(tn, sn));

        let meeting = match self.rule {
            MeetingRule::FirstContact => self.first_contact(&mut fwd, &mut bwd, s, t),
            MeetingRule::Bounded => self.bounded(&mut fwd, &mut bwd, s, t),
        };

        let path = match meeting {
            Some(m) => reconstruct_bidirectional(
                m,
                |&i| fwd.parent(i),
                |&i| bwd.parent(i),
                graph.node_count(),
            ),
            None => Vec::new(),
        };

        let metrics = SearchMetrics {
            search_time: started.elapsed(),
            max_open_set_size: fwd.max_open() + bwd.max_open(),
            predecessor_map_size: fwd.predecessor_count() + bwd.predecessor_count(),
            path_distance: (!path.is_empty()).then(|| graph.route_cost(&path)),
        };
        metrics.report(sink);

        match meeting {
            Some(m) => debug!(
                "bidirectional: {start} -> {goal} met at {} in {:.2} ms",
                graph.node_at(m).id,
                metrics.search_time_ms()
            ),
            None => debug!(
                "bidirectional: no path {start} -> {goal} after {:.2} ms",
                metrics.search_time_ms()
            ),
        }

        Ok(Route::new(start.into(), goal.into(), graph.ids(&path), metrics))
    }
}
