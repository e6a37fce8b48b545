//! Graph input primitives: [`NodeId`], [`Node`] and [`Edge`].
//!
//! These are the records a data loader hands to the graph builder. They are
//! plain values and never change once constructed.

use std::borrow::Borrow;
use std::fmt;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Opaque node identifier, unique within one graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from anything string-like.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A geospatial graph vertex.
///
/// Latitude and longitude are in degrees, elevation in meters. Coordinates
/// are assumed finite; the cost model does not validate them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
    pub elevation: f64,
}

impl Node {
    /// Create a new node.
    #[inline]
    pub fn new(id: impl Into<NodeId>, lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            elevation,
        }
    }

    /// Elevation gained when moving from `self` to `to` (negative on descent).
    #[inline]
    pub fn climb_to(&self, to: &Node) -> f64 {
        to.elevation - self.elevation
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {}m)",
            self.id, self.lat, self.lon, self.elevation
        )
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// An undirected connection between two nodes.
///
/// `cost` is an optional pre-computed traversal cost supplied by the data
/// source. Whether it is honoured is decided by the graph builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: Option<f64>,
}

impl Edge {
    /// An edge whose cost will be derived from its endpoints.
    #[inline]
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            cost: None,
        }
    }

    /// An edge carrying a pre-supplied cost.
    #[inline]
    pub fn with_cost(source: impl Into<NodeId>, target: impl Into<NodeId>, cost: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            cost: Some(cost),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_id_is_transparent() {
        let json = serde_json::to_string(&NodeId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }

    #[test]
    fn edge_cost_defaults_to_none() {
        let e: Edge = serde_json::from_str(r#"{"source":"a","target":"b"}"#).unwrap();
        assert_eq!(e, Edge::new("a", "b"));
    }
}
