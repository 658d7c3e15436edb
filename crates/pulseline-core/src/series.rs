// File: crates/pulseline-core/src/series.rs
// Summary: Time-series model: raw samples, immutable series snapshots, and
// screen-projected points.

use chrono::{DateTime, Duration, Utc};

use crate::curve::Point;
use crate::view::Window;

/// One observation. Immutable once produced by the data source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A `Sample` with derived screen coordinates. Recomputed on every rescale;
/// never persisted independently of its series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlottedPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

impl PlottedPoint {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered samples, index 0 = most recent. During a transition two snapshots
/// are live (old and new); neither is ever mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Build a series from bare values, stamping each one a day older than
    /// the previous starting from `now`. Convenient for tests and demos.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let now = Utc::now();
        let samples = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Sample::new(now - Duration::days(i as i64), value))
            .collect();
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    /// Value of the final sample, the target the displayed readout chases
    /// during a transition.
    pub fn last_value(&self) -> Option<f64> {
        self.samples.last().map(|s| s.value)
    }

    /// Snapshot of the first `window.point_count()` samples (most recent
    /// first). Shorter input is returned whole.
    pub fn window(&self, window: Window) -> Series {
        let n = window.point_count().min(self.samples.len());
        Series { samples: self.samples[..n].to_vec() }
    }
}
