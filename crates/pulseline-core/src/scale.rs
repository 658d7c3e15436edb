// File: crates/pulseline-core/src/scale.rs
// Summary: Value-axis bounds and index/value to pixel projection.

use crate::error::ChartError;
use crate::series::{PlottedPoint, Series};
use crate::types::Viewport;

/// Fraction of the value range added above and below as breathing room.
const PADDING_RATIO: f64 = 0.1;

/// Inclusive value-axis bounds of a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// Linear scan for min/max. Errors on an empty series; a single sample
/// yields min == max.
pub fn compute_bounds(series: &Series) -> Result<Bounds, ChartError> {
    bounds_of(series.values())
}

/// Min/max over raw values, for callers holding an interpolated frame
/// rather than a `Series`.
pub fn bounds_of(values: impl IntoIterator<Item = f64>) -> Result<Bounds, ChartError> {
    let mut values = values.into_iter();
    let first = values
        .next()
        .ok_or(ChartError::InvalidInput("cannot scale an empty series"))?;
    let mut bounds = Bounds { min: first, max: first };
    for v in values {
        bounds.min = bounds.min.min(v);
        bounds.max = bounds.max.max(v);
    }
    Ok(bounds)
}

/// Horizontal position of sample `index` in a series of `len` points.
/// A single-point series pins to x = 0 (the source divides by zero here).
pub fn x_at(index: usize, len: usize, width: f64) -> f64 {
    if len < 2 {
        return 0.0;
    }
    (index as f64 / (len - 1) as f64) * width
}

/// Vertical position of `value` within padded bounds. A flat series
/// (min == max) centers on the viewport rather than dividing by zero.
pub fn y_at(value: f64, bounds: Bounds, height: f64) -> f64 {
    let range = bounds.max - bounds.min;
    let padding = range * PADDING_RATIO;
    let span = range + 2.0 * padding;
    let ratio = if span > 0.0 {
        (value - (bounds.min - padding)) / span
    } else {
        0.5
    };
    (1.0 - ratio) * height
}

/// Assign screen coordinates to every sample. Pure; preserves input order
/// and length. Errors only on an empty series.
pub fn project(series: &Series, viewport: Viewport) -> Result<Vec<PlottedPoint>, ChartError> {
    let bounds = compute_bounds(series)?;
    let len = series.len();
    Ok(series
        .samples()
        .iter()
        .enumerate()
        .map(|(i, s)| PlottedPoint {
            timestamp: s.timestamp,
            value: s.value,
            x: x_at(i, len, viewport.width),
            y: y_at(s.value, bounds, viewport.height),
        })
        .collect())
}
