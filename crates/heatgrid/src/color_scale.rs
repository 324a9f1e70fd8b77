//! Per-cell color resolution.
//!
//! A cell's color and signed intensity come from its series (auto mode) and
//! are then overridden by every configured range that contains the value.

use super::matrix::{CellIndex, SeriesMatrix};
use super::options::HeatmapOptions;
use heatgrid_core::Color;

/// The color and signed intensity of one cell, before shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCell {
    /// Base color: the series color, or the last matching range's color.
    pub color: Color,
    /// `100 * value / (|max| + |min|)` over the color-determining bounds.
    ///
    /// Not clamped. Always finite: degenerate bounds yield `0`.
    pub percent: f64,
}

/// Intensity of `value` within `(min, max)`, or `None` when the bounds sum
/// to zero.
fn intensity(value: f64, min: f64, max: f64) -> Option<f64> {
    let total = max.abs() + min.abs();
    let percent = (100.0 * value) / total;
    percent.is_finite().then_some(percent)
}

/// Resolve the color and intensity of one cell.
///
/// Returns `None` if `cell` is outside the matrix.
pub fn resolve(
    matrix: &SeriesMatrix,
    cell: CellIndex,
    options: &HeatmapOptions,
) -> Option<ResolvedCell> {
    let value = matrix.value(cell)?;
    let bounds = matrix.series_bounds(cell.series)?;
    Some(resolve_value(value, bounds, cell, options))
}

/// Resolve a cell whose value and series `(min, max)` are already known.
pub fn resolve_value(
    value: f64,
    (min, max): (f64, f64),
    cell: CellIndex,
    options: &HeatmapOptions,
) -> ResolvedCell {
    let mut color = options.base_color(cell.series);
    let mut percent = intensity(value, min, max);

    // Every match overwrites the previous one; later ranges take priority.
    for range in &options.color_scale.ranges {
        if range.contains(value) {
            color = range.color;
            percent = intensity(value, range.from, range.to);
        }
    }

    let percent = percent.unwrap_or_else(|| {
        tracing::debug!(
            series = cell.series,
            point = cell.point,
            value,
            "degenerate color bounds, using neutral intensity"
        );
        0.0
    });

    ResolvedCell { color, percent }
}
