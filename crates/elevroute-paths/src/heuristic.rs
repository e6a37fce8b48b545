use elevroute_core::{Node, distance_km};

use crate::traits::Heuristic;

/// Planar distance in raw degrees: `hypot(Δlat, Δlon)`.
///
/// This is the default ordering heuristic. It is measured in degrees while
/// computed edge costs are in kilometers, so it is not unit-matched: with
/// caller-provided costs it can overestimate and make A* return a
/// suboptimal route.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawDegrees;

impl Heuristic for RawDegrees {
    #[inline]
    fn estimate(&self, from: &Node, to: &Node) -> f64 {
        (from.lat - to.lat).hypot(from.lon - to.lon)
    }
}

/// Great-circle distance in kilometers, ignoring elevation.
///
/// Every computed edge cost is this distance plus a non-negative elevation
/// penalty, so the estimate is consistent for graphs built with
/// [`CostSource::Computed`](crate::CostSource::Computed).
#[derive(Clone, Copy, Debug, Default)]
pub struct GreatCircle;

impl Heuristic for GreatCircle {
    #[inline]
    fn estimate(&self, from: &Node, to: &Node) -> f64 {
        distance_km(from, to)
    }
}

/// Always zero: turns A* into Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: &Node, _to: &Node) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use elevroute_core::edge_cost;

    #[test]
    fn raw_degrees_is_planar() {
        let a = Node::new("a", 0.0, 0.0, 0.0);
        let b = Node::new("b", 3.0, 4.0, 500.0);
        assert_relative_eq!(RawDegrees.estimate(&a, &b), 5.0);
    }

    #[test]
    fn great_circle_never_exceeds_edge_cost() {
        let a = Node::new("a", 46.5, 8.0, 1200.0);
        let b = Node::new("b", 46.51, 8.02, 900.0);
        assert!(GreatCircle.estimate(&a, &b) <= edge_cost(&a, &b));
        assert!(GreatCircle.estimate(&b, &a) <= edge_cost(&b, &a));
    }

    #[test]
    fn closures_are_heuristics() {
        let scaled = |a: &Node, b: &Node| 2.0 * RawDegrees.estimate(a, b);
        let a = Node::new("a", 0.0, 0.0, 0.0);
        let b = Node::new("b", 0.0, 1.0, 0.0);
        assert_relative_eq!(scaled.estimate(&a, &b), 2.0);
        assert_eq!(Zero.estimate(&a, &b), 0.0);
    }
}
