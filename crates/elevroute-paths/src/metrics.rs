//! Run instrumentation.
//!
//! Every search measures itself and hands the figures to a [`MetricsSink`]
//! at its terminal step, before `find_path` returns. Values are formatted
//! strings; the same numbers are also available unformatted in
//! [`SearchMetrics`].
//!
//! Emission order is fixed: [`Metric::SearchTime`],
//! [`Metric::MaxOpenSetSize`], [`Metric::PredecessorMapSize`],
//! [`Metric::PathDistance`]. A run that found no route reports only
//! [`Metric::SearchTime`].

use std::fmt;
use std::time::Duration;

/// Names of the reported metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Wall-clock duration of the search in milliseconds, two decimals.
    SearchTime,
    /// Peak frontier cardinality (summed over both sides when bidirectional).
    MaxOpenSetSize,
    /// Nodes with a recorded predecessor (summed over both sides).
    PredecessorMapSize,
    /// Cost of the returned route, two decimals.
    PathDistance,
}

impl Metric {
    /// The metric's wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SearchTime => "searchTime",
            Self::MaxOpenSetSize => "maxOpenSetSize",
            Self::PredecessorMapSize => "predecessorMapSize",
            Self::PathDistance => "pathDistance",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives `(metric, value)` pairs synchronously from a search.
pub trait MetricsSink {
    fn record(&mut self, metric: Metric, value: &str);
}

impl<F> MetricsSink for F
where
    F: FnMut(Metric, &str),
{
    fn record(&mut self, metric: Metric, value: &str) {
        self(metric, value)
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl MetricsSink for NoopSink {
    fn record(&mut self, _metric: Metric, _value: &str) {}
}

/// Keeps every reported pair in arrival order.
#[derive(Clone, Debug, Default)]
pub struct MetricsLog {
    entries: Vec<(Metric, String)>,
}

impl MetricsLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value reported for `metric`.
    pub fn get(&self, metric: Metric) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(m, _)| *m == metric)
            .map(|(_, v)| v.as_str())
    }

    /// All pairs in the order they were reported.
    pub fn entries(&self) -> &[(Metric, String)] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl MetricsSink for MetricsLog {
    fn record(&mut self, metric: Metric, value: &str) {
        self.entries.push((metric, value.to_owned()));
    }
}

/// Figures measured during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchMetrics {
    pub search_time: Duration,
    pub max_open_set_size: usize,
    pub predecessor_map_size: usize,
    /// Cost of the returned route; `None` when no route was found.
    pub path_distance: Option<f64>,
}

impl SearchMetrics {
    /// Search time in milliseconds.
    pub fn search_time_ms(&self) -> f64 {
        self.search_time.as_secs_f64() * 1000.0
    }

    /// Emit the metrics to `sink` in the documented order.
    pub fn report(&self, sink: &mut dyn MetricsSink) {
        sink.record(Metric::SearchTime, &format!("{:.2}", self.search_time_ms()));
        let Some(distance) = self.path_distance else {
            return;
        };
        sink.record(Metric::MaxOpenSetSize, &self.max_open_set_size.to_string());
        sink.record(
            Metric::PredecessorMapSize,
            &self.predecessor_map_size.to_string(),
        );
        sink.record(Metric::PathDistance, &format!("{distance:.2}"));
    }
}
