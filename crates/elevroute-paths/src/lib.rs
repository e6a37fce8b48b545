//! Route search over elevation-aware geospatial graphs.
//!
//! This crate builds an immutable, undirected graph from node and edge
//! lists and finds low-cost routes through it:
//!
//! - **A\*** single-direction search ([`AstarSearch`])
//! - **Bidirectional** best-first search ([`BidirectionalSearch`])
//!
//! Both implement [`PathSearch`]. Each query allocates its own search state,
//! so a [`Graph`] and its searchers can be reused for any number of
//! sequential queries. Run metrics are returned with every [`Route`] and
//! reported to an optional [`MetricsSink`].
//!
//! ```
//! use elevroute_core::{Edge, Node};
//! use elevroute_paths::{AstarSearch, Graph, PathSearch};
//!
//! let graph = Graph::build(
//!     vec![
//!         Node::new("a", 46.00, 7.00, 400.0),
//!         Node::new("b", 46.01, 7.00, 450.0),
//!         Node::new("c", 46.02, 7.01, 420.0),
//!     ],
//!     vec![Edge::new("a", "b"), Edge::new("b", "c")],
//! );
//! let route = AstarSearch::new(&graph).find_path("a", "c").unwrap();
//! assert_eq!(route.ids(), ["a", "b", "c"]);
//! ```
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`Heuristic`] | frontier ordering estimate ([`RawDegrees`], [`GreatCircle`], [`Zero`], closures) |
//! | [`PathSearch`] | a search strategy |
//! | [`MetricsSink`] | receives `(metric, value)` pairs |

mod astar;
mod bidir;
mod config;
mod error;
mod graph;
mod heuristic;
mod metrics;
mod reconstruct;
mod route;
mod state;
mod traits;

#[cfg(test)]
mod fixtures;

pub use astar::AstarSearch;
pub use bidir::BidirectionalSearch;
pub use config::{CostSource, GraphConfig, MeetingRule};
pub use error::{Result, RouteError};
pub use graph::{Graph, GraphBuilder};
pub use heuristic::{GreatCircle, RawDegrees, Zero};
pub use metrics::{Metric, MetricsLog, MetricsSink, NoopSink, SearchMetrics};
pub use reconstruct::{reconstruct_bidirectional, reconstruct_path};
pub use route::Route;
pub use traits::{Heuristic, PathSearch};
