//! Graph construction: node index plus symmetric adjacency lists.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use elevroute_core::{Edge, Node, NodeId, cost};
use log::{debug, warn};

use crate::config::{CostSource, GraphConfig};
use crate::error::RouteError;

/// One adjacency entry: a neighbor's dense index and the edge cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Neighbor {
    pub(crate) idx: usize,
    pub(crate) cost: f64,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An immutable, undirected, weighted graph of geospatial nodes.
///
/// Nodes are addressed internally by a dense index assigned in input order.
/// Every edge is stored in both directions with the same cost, so the
/// adjacency structure is always symmetric. A `Graph` never changes after
/// [`GraphBuilder::build`] and can serve any number of sequential queries.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
    diagnostics: Vec<RouteError>,
    config: GraphConfig,
}

impl Graph {
    /// Build a graph with the default configuration (computed costs).
    pub fn build<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = Node>,
        E: IntoIterator<Item = Edge>,
    {
        GraphBuilder::default().build(nodes, edges)
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges retained.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The configuration used to build this graph.
    #[inline]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Problems met while building: one entry per unknown endpoint of a
    /// dropped edge.
    pub fn diagnostics(&self) -> &[RouteError] {
        &self.diagnostics
    }

    /// Whether `id` is a node of this graph.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// All nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of adjacency entries of `id`, `0` for unknown ids.
    pub fn degree(&self, id: &str) -> usize {
        self.index.get(id).map_or(0, |&i| self.adjacency[i].len())
    }

    /// `(neighbor id, edge cost)` pairs of `id`, in insertion order.
    ///
    /// Unknown ids have no neighbors.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&NodeId, f64)> {
        let adj: &[Neighbor] = match self.index.get(id) {
            Some(&i) => &self.adjacency[i],
            None => &[],
        };
        adj.iter().map(|n| (&self.nodes[n.idx].id, n.cost))
    }

    /// Cost of the cheapest edge between `a` and `b`, if they are adjacent.
    pub fn edge_cost(&self, a: &str, b: &str) -> Option<f64> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        self.step_cost(ia, ib)
    }

    /// Cost of walking `path` in order.
    ///
    /// With [`CostSource::Computed`] every step is priced by the cost model
    /// in the direction it is walked, so a descent costs less than the
    /// climb it mirrors. With [`CostSource::Provided`] the stored edge costs
    /// are summed. Returns `None` if two consecutive ids are not adjacent.
    /// Paths with fewer than two nodes cost `0.0`.
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Option<f64> {
        let mut indices = Vec::with_capacity(path.len());
        for id in path {
            indices.push(*self.index.get(id.as_ref())?);
        }
        if indices.windows(2).any(|w| self.step_cost(w[0], w[1]).is_none()) {
            return None;
        }
        Some(self.route_cost(&indices))
    }

    // -----------------------------------------------------------------------
    // Index-level helpers for the search algorithms
    // -----------------------------------------------------------------------

    /// Resolve a query id, failing with [`RouteError::InvalidNodeReference`].
    pub(crate) fn require(&self, id: &str) -> Result<usize, RouteError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| RouteError::InvalidNodeReference(NodeId::from(id)))
    }

    #[inline]
    pub(crate) fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn adjacent(&self, idx: usize) -> &[Neighbor] {
        &self.adjacency[idx]
    }

    pub(crate) fn step_cost(&self, from: usize, to: usize) -> Option<f64> {
        self.adjacency[from]
            .iter()
            .filter(|n| n.idx == to)
            .map(|n| n.cost)
            .min_by(f64::total_cmp)
    }

    /// Cost of an index path, see [`Graph::path_cost`]. Adjacency is not
    /// checked; paths produced by the searches only follow existing edges.
    pub(crate) fn route_cost(&self, path: &[usize]) -> f64 {
        match self.config.cost_source {
            CostSource::Computed => cost::path_cost(path.iter().map(|&i| &self.nodes[i])),
            CostSource::Provided => path
                .windows(2)
                .map(|w| self.step_cost(w[0], w[1]).unwrap_or(0.0))
                .sum(),
        }
    }

    pub(crate) fn ids(&self, path: &[usize]) -> Vec<NodeId> {
        path.iter().map(|&i| self.nodes[i].id.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Turns raw node and edge lists into a [`Graph`].
///
/// Construction is tolerant of bad input: edges referencing unknown nodes
/// are dropped with a warning and recorded as diagnostics, duplicate node
/// ids keep their first occurrence.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Build the node index and adjacency lists.
    pub fn build<N, E>(&self, nodes: N, edges: E) -> Graph
    where
        N: IntoIterator<Item = Node>,
        E: IntoIterator<Item = Edge>,
    {
        let mut index = HashMap::new();
        let mut kept = Vec::new();
        for node in nodes {
            match index.entry(node.id.clone()) {
                Entry::Occupied(_) => {
                    warn!("duplicate node id {}, keeping the first occurrence", node.id);
                }
                Entry::Vacant(slot) => {
                    slot.insert(kept.len());
                    kept.push(node);
                }
            }
        }

        let mut adjacency = vec![Vec::new(); kept.len()];
        let mut diagnostics = Vec::new();
        let mut edge_count = 0;

        for edge in edges {
            let (ia, ib) = match (index.get(&edge.source), index.get(&edge.target)) {
                (Some(&a), Some(&b)) => (a, b),
                (a, b) => {
                    // One diagnostic per unknown endpoint.
                    let missing = [(a.is_none(), &edge.source), (b.is_none(), &edge.target)];
                    for (_, id) in missing.into_iter().filter(|(absent, _)| *absent) {
                        warn!(
                            "missing node {id} for edge {} -> {}, edge dropped",
                            edge.source, edge.target
                        );
                        diagnostics.push(RouteError::MissingEndpoint {
                            source_id: edge.source.clone(),
                            target_id: edge.target.clone(),
                            missing: id.clone(),
                        });
                    }
                    continue;
                }
            };

            let cost = self.edge_weight(&edge, &kept[ia], &kept[ib]);
            adjacency[ia].push(Neighbor { idx: ib, cost });
            adjacency[ib].push(Neighbor { idx: ia, cost });
            edge_count += 1;
        }

        debug!(
            "graph built: {} nodes, {} edges, {} missing endpoints",
            kept.len(),
            edge_count,
            diagnostics.len()
        );

        Graph {
            nodes: kept,
            index,
            adjacency,
            edge_count,
            diagnostics,
            config: self.config,
        }
    }

    /// Pick the cost stored for `edge`, whose endpoints are `a` and `b`.
    fn edge_weight(&self, edge: &Edge, a: &Node, b: &Node) -> f64 {
        match (self.config.cost_source, edge.cost) {
            (CostSource::Computed, _) => cost::edge_cost(a, b),
            (CostSource::Provided, Some(c)) if c.is_finite() && c >= 0.0 => c,
            (CostSource::Provided, Some(c)) => {
                // Negative undirected edges form negative two-cycles.
                warn!(
                    "edge {} -> {} has unusable cost {c}, using computed cost",
                    edge.source, edge.target
                );
                cost::edge_cost(a, b)
            }
            (CostSource::Provided, None) => {
                warn!(
                    "edge {} -> {} has no cost, using computed cost",
                    edge.source, edge.target
                );
                cost::edge_cost(a, b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn nodes() -> Vec<Node> {
        vec![
            Node::new("a", 47.00, -122.00, 10.0),
            Node::new("b", 47.01, -122.00, 60.0),
            Node::new("c", 47.01, -122.01, 20.0),
        ]
    }

    #[test]
    fn computed_costs_follow_declared_orientation() {
        let g = Graph::build(nodes(), vec![Edge::new("a", "b")]);
        let (a, b) = (g.node("a").unwrap(), g.node("b").unwrap());
        let expected = cost::edge_cost(a, b);
        assert_relative_eq!(g.edge_cost("a", "b").unwrap(), expected);
        // Same stored cost in reverse, even though climbing differs.
        assert_eq!(g.edge_cost("b", "a"), g.edge_cost("a", "b"));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let g = Graph::build(
            nodes(),
            vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a")],
        );
        for n in g.nodes() {
            for (m, c) in g.neighbors(n.id.as_str()) {
                let back: Vec<f64> = g
                    .neighbors(m.as_str())
                    .filter(|(k, _)| *k == &n.id)
                    .map(|(_, c)| c)
                    .collect();
                assert!(back.contains(&c), "{} -> {} has no mirror", n.id, m);
            }
        }
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn missing_endpoint_is_dropped_and_recorded() {
        let g = Graph::build(
            nodes(),
            vec![Edge::new("a", "ghost"), Edge::new("a", "b")],
        );
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree("a"), 1);
        assert_eq!(
            g.diagnostics(),
            &[RouteError::MissingEndpoint {
                source_id: "a".into(),
                target_id: "ghost".into(),
                missing: "ghost".into(),
            }]
        );
    }

    #[test]
    fn both_missing_endpoints_are_recorded() {
        let g = Graph::build(nodes(), vec![Edge::new("ghost", "phantom")]);
        assert_eq!(g.edge_count(), 0);
        let missing: Vec<&str> = g
            .diagnostics()
            .iter()
            .filter_map(|d| match d {
                RouteError::MissingEndpoint { missing, .. } => Some(missing.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(missing, ["ghost", "phantom"]);
    }

    #[test]
    fn computed_path_cost_follows_walking_direction() {
        let g = Graph::build(nodes(), vec![Edge::new("a", "b")]);
        let (a, b) = (g.node("a").unwrap(), g.node("b").unwrap());
        // a -> b climbs 50 m, b -> a descends it.
        assert_relative_eq!(g.path_cost(&["a", "b"]).unwrap(), cost::edge_cost(a, b));
        assert_relative_eq!(g.path_cost(&["b", "a"]).unwrap(), cost::edge_cost(b, a));
        assert!(g.path_cost(&["b", "a"]).unwrap() < g.path_cost(&["a", "b"]).unwrap());
    }

    #[test]
    fn provided_costs_are_used_when_configured() {
        let edges = vec![Edge::with_cost("a", "b", 5.0)];
        let g = GraphBuilder::new(GraphConfig::provided()).build(nodes(), edges.clone());
        assert_eq!(g.edge_cost("a", "b"), Some(5.0));

        let g = GraphBuilder::default().build(nodes(), edges);
        assert_ne!(g.edge_cost("a", "b"), Some(5.0));
    }

    #[test]
    fn unusable_provided_cost_falls_back_to_computed() {
        let edges = vec![
            Edge::with_cost("a", "b", -3.0),
            Edge::with_cost("b", "c", f64::NAN),
            Edge::new("c", "a"),
        ];
        let g = GraphBuilder::new(GraphConfig::provided()).build(nodes(), edges);
        let n = |id| g.node(id).unwrap();
        assert_relative_eq!(
            g.edge_cost("a", "b").unwrap(),
            cost::edge_cost(n("a"), n("b"))
        );
        assert_relative_eq!(
            g.edge_cost("b", "c").unwrap(),
            cost::edge_cost(n("b"), n("c"))
        );
        assert_relative_eq!(
            g.edge_cost("c", "a").unwrap(),
            cost::edge_cost(n("c"), n("a"))
        );
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let mut ns = nodes();
        ns.push(Node::new("a", 0.0, 0.0, 0.0));
        let g = Graph::build(ns, Vec::new());
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.node("a").unwrap().lat, 47.00);
    }

    #[test]
    fn path_cost_sums_stored_edges() {
        let edges = vec![Edge::with_cost("a", "b", 1.5), Edge::with_cost("b", "c", 2.0)];
        let g = GraphBuilder::new(GraphConfig::provided()).build(nodes(), edges);
        assert_eq!(g.path_cost(&["a", "b", "c"]), Some(3.5));
        assert_eq!(g.path_cost(&["c", "b", "a"]), Some(3.5));
        assert_eq!(g.path_cost(&["a", "c"]), None);
        assert_eq!(g.path_cost(&["a"]), Some(0.0));
    }

    #[test]
    fn parallel_edges_report_cheapest() {
        let edges = vec![Edge::with_cost("a", "b", 4.0), Edge::with_cost("b", "a", 2.0)];
        let g = GraphBuilder::new(GraphConfig::provided()).build(nodes(), edges);
        assert_eq!(g.edge_cost("a", "b"), Some(2.0));
        assert_eq!(g.degree("a"), 2);
    }

    #[test]
    fn unknown_lookups() {
        let g = Graph::build(nodes(), Vec::new());
        assert!(!g.contains("zz"));
        assert!(g.node("zz").is_none());
        assert_eq!(g.neighbors("zz").count(), 0);
        assert_eq!(
            g.require("zz"),
            Err(RouteError::InvalidNodeReference("zz".into()))
        );
    }
}
