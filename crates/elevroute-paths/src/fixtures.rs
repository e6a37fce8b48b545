//! Small graphs shared by the unit tests.

use elevroute_core::{Edge, Node};

use crate::{Graph, GraphBuilder, GraphConfig};

fn provided(nodes: Vec<Node>, edges: Vec<Edge>) -> Graph {
    GraphBuilder::new(GraphConfig::provided()).build(nodes, edges)
}

fn flat(id: &str, lat: f64, lon: f64) -> Node {
    Node::new(id, lat, lon, 0.0)
}

/// `A - B - C - D` along the equator, unit costs.
pub(crate) fn line() -> Graph {
    provided(line_nodes(), line_edges())
}

fn line_nodes() -> Vec<Node> {
    vec![
        flat("A", 0.0, 0.000),
        flat("B", 0.0, 0.001),
        flat("C", 0.0, 0.002),
        flat("D", 0.0, 0.003),
    ]
}

fn line_edges() -> Vec<Edge> {
    vec![
        Edge::with_cost("A", "B", 1.0),
        Edge::with_cost("B", "C", 1.0),
        Edge::with_cost("C", "D", 1.0),
    ]
}

/// The line plus a node `X` with no edges.
pub(crate) fn with_island() -> Graph {
    let mut nodes = line_nodes();
    nodes.push(flat("X", 0.5, 0.5));
    provided(nodes, line_edges())
}

/// `A - B` with cost 5.
pub(crate) fn pair() -> Graph {
    provided(
        vec![flat("A", 0.0, 0.0), flat("B", 0.0, 0.01)],
        vec![Edge::with_cost("A", "B", 5.0)],
    )
}

/// Direct edge `S - G` costs 3; the detour `S - Y - G` costs 2 but `Y`
/// lies five degrees away from both.
pub(crate) fn detour() -> Graph {
    provided(
        vec![flat("S", 0.0, 0.0), flat("G", 0.0, 1.0), flat("Y", 5.0, 0.0)],
        vec![
            Edge::with_cost("S", "Y", 1.0),
            Edge::with_cost("Y", "G", 1.0),
            Edge::with_cost("S", "G", 3.0),
        ],
    )
}

/// `S - A - T` costs 11, `S - B - C - T` costs 9. Searching from both ends
/// touches `A` first.
pub(crate) fn two_routes() -> Graph {
    provided(
        vec![
            flat("S", 0.0, 0.0),
            flat("A", 0.0, 0.0),
            flat("B", 0.0, 0.0),
            flat("C", 0.0, 0.0),
            flat("T", 0.0, 0.0),
        ],
        vec![
            Edge::with_cost("S", "A", 1.0),
            Edge::with_cost("A", "T", 10.0),
            Edge::with_cost("S", "B", 3.0),
            Edge::with_cost("B", "C", 3.0),
            Edge::with_cost("C", "T", 3.0),
        ],
    )
}

/// `W` and `E` joined over a 500 m peak `N` or around it through the
/// valley node `S`. Costs are computed.
pub(crate) fn ridge() -> Graph {
    Graph::build(
        vec![
            flat("W", 0.0, 0.0),
            flat("E", 0.0, 0.02),
            Node::new("N", 0.001, 0.01, 500.0),
            flat("S", -0.003, 0.01),
        ],
        vec![
            Edge::new("W", "N"),
            Edge::new("N", "E"),
            Edge::new("W", "S"),
            Edge::new("S", "E"),
        ],
    )
}

/// A single computed edge declared from the low node `L` up to the 500 m
/// high node `H`.
pub(crate) fn slope() -> Graph {
    Graph::build(
        vec![flat("L", 0.0, 0.0), Node::new("H", 0.0, 0.01, 500.0)],
        vec![Edge::new("L", "H")],
    )
}
