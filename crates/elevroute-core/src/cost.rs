//! Traversal cost between adjacent nodes.
//!
//! The cost of moving from one node to another is the great-circle distance
//! in kilometers plus an elevation penalty. The distance uses the spherical
//! law of cosines with a nautical-mile derived constant chain, kept exactly
//! so results match reference outputs.

use crate::node::Node;

/// Statute miles per degree of arc (60 nautical miles × 1.1515).
pub const MILES_PER_DEGREE_FACTOR: f64 = 1.1515;

/// Kilometers per statute mile.
pub const KM_PER_MILE: f64 = 1.609344;

/// Penalty per meter climbed.
pub const ASCENT_PENALTY: f64 = 0.01;

/// Multiplier applied to a non-positive elevation delta.
///
/// The delta is negative on a descent, so the product is positive: going
/// downhill costs half as much per meter as climbing, but still costs.
pub const DESCENT_PENALTY: f64 = -0.005;

/// Great-circle distance between two nodes in kilometers.
///
/// Ignores elevation. The `acos` argument is clamped to `[-1, 1]` so that
/// coincident points give `0.0` rather than NaN from rounding.
pub fn distance_km(a: &Node, b: &Node) -> f64 {
    let rad_lat1 = std::f64::consts::PI * a.lat / 180.0;
    let rad_lat2 = std::f64::consts::PI * b.lat / 180.0;
    let theta = a.lon - b.lon;
    let rad_theta = std::f64::consts::PI * theta / 180.0;

    let mut dist =
        rad_lat1.sin() * rad_lat2.sin() + rad_lat1.cos() * rad_lat2.cos() * rad_theta.cos();
    dist = dist.clamp(-1.0, 1.0).acos();
    dist = dist * 180.0 / std::f64::consts::PI;
    dist = dist * 60.0 * MILES_PER_DEGREE_FACTOR;
    dist * KM_PER_MILE
}

/// Penalty for an elevation change of `delta` meters (`to - from`).
///
/// `delta > 0` costs `delta * 0.01`; anything else costs `delta * -0.005`.
#[inline]
pub fn elevation_penalty(delta: f64) -> f64 {
    if delta > 0.0 {
        delta * ASCENT_PENALTY
    } else {
        delta * DESCENT_PENALTY
    }
}

/// Cost of travelling from `from` to the adjacent node `to`.
///
/// Direction matters: climbing is penalised more than descending.
#[inline]
pub fn edge_cost(from: &Node, to: &Node) -> f64 {
    distance_km(from, to) + elevation_penalty(from.climb_to(to))
}

/// Direction-aware cost of walking `nodes` in order.
///
/// Returns `0.0` for fewer than two nodes.
pub fn path_cost<'a, I>(nodes: I) -> f64
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut it = nodes.into_iter();
    let Some(mut prev) = it.next() else {
        return 0.0;
    };
    let mut total = 0.0;
    for n in it {
        total += edge_cost(prev, n);
        prev = n;
    }
    total
}
