//! Graph construction and search configuration.

/// Where edge costs come from when building a [`Graph`](crate::Graph).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CostSource {
    /// Always derive the cost from the endpoints with the cost model.
    #[default]
    Computed,
    /// Use the cost carried by the input edge when it has a usable one.
    Provided,
}

/// Options for [`GraphBuilder`](crate::GraphBuilder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GraphConfig {
    pub cost_source: CostSource,
}

impl GraphConfig {
    /// Configuration honouring edge-supplied costs.
    pub fn provided() -> Self {
        Self {
            cost_source: CostSource::Provided,
        }
    }
}

/// When a [`BidirectionalSearch`](crate::BidirectionalSearch) stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MeetingRule {
    /// Stop as soon as a node processed by one side already has a
    /// predecessor on the other side. Fast, but the route is not
    /// guaranteed to be the cheapest.
    #[default]
    FirstContact,
    /// Keep the cheapest connection seen so far and stop only once neither
    /// frontier can improve on it. Optimal with a consistent heuristic.
    Bounded,
}
