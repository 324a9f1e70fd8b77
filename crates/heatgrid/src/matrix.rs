//! Rectangular series data.

use super::error::{HeatmapError, HeatmapResult};

/// Coordinates of one heatmap cell: a series (row) and a point in it (column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Index of the series in the data matrix.
    pub series: usize,
    /// Index of the data point within the series.
    pub point: usize,
}

impl CellIndex {
    /// Create a cell index.
    pub const fn new(series: usize, point: usize) -> Self {
        Self { series, point }
    }
}

/// A rectangular matrix of series values.
///
/// Every series has the same number of points; the series count and the
/// per-series length define the shape of the heatmap grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesMatrix {
    series: Vec<Vec<f64>>,
}

impl SeriesMatrix {
    /// Create a matrix, rejecting series of unequal length.
    pub fn new(series: Vec<Vec<f64>>) -> HeatmapResult<Self> {
        if let Some(first) = series.first() {
            let expected = first.len();
            if let Some((series_index, found)) = series
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|&(_, len)| len != expected)
            {
                return Err(HeatmapError::NonRectangularMatrix {
                    series_index,
                    expected,
                    found,
                });
            }
        }

        Ok(Self { series })
    }

    /// Number of series (grid rows).
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Number of points in every series (grid columns).
    pub fn points_per_series(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }

    /// Whether the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.series_count() == 0 || self.points_per_series() == 0
    }

    /// The values of one series.
    pub fn series(&self, index: usize) -> Option<&[f64]> {
        self.series.get(index).map(Vec::as_slice)
    }

    /// Iterate over all series in data order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.series.iter().map(Vec::as_slice)
    }

    /// The value of one cell.
    pub fn value(&self, cell: CellIndex) -> Option<f64> {
        self.series.get(cell.series)?.get(cell.point).copied()
    }

    /// The `(min, max)` of one series, or `None` for a missing or empty
    /// series.
    ///
    /// A NaN anywhere in the series makes both bounds NaN, so every cell of
    /// that series resolves to a neutral intensity.
    pub fn series_bounds(&self, index: usize) -> Option<(f64, f64)> {
        let values = self.series.get(index)?;
        if values.is_empty() {
            return None;
        }
        if values.iter().any(|v| v.is_nan()) {
            return Some((f64::NAN, f64::NAN));
        }

        Some(values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), &v| (min.min(v), max.max(v)),
        ))
    }

    /// Whether any value anywhere in the matrix is negative.
    pub fn has_negative_values(&self) -> bool {
        self.series.iter().flatten().any(|&v| v < 0.0)
    }
}
