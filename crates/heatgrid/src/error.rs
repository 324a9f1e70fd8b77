//! Error types for heatmap drawing.

use std::fmt;

/// Configuration errors that abort a draw before anything is emitted.
///
/// Degenerate numeric cases (a series whose bounds sum to zero, a value
/// outside every color range) are not errors; they are resolved locally
/// with a neutral default.
#[derive(Debug, Clone, PartialEq)]
pub enum HeatmapError {
    /// A series has a different length from the first series.
    NonRectangularMatrix {
        /// Index of the offending series.
        series_index: usize,
        /// Length of series 0.
        expected: usize,
        /// Length of the offending series.
        found: usize,
    },

    /// The matrix has no series, so rows cannot be laid out.
    NoSeries,

    /// The series have no data points, so columns cannot be laid out.
    NoDataPoints,

    /// The grid dimensions are negative or not finite.
    InvalidGridSize {
        /// Requested grid width.
        width: f64,
        /// Requested grid height.
        height: f64,
    },
}

impl fmt::Display for HeatmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatmapError::NonRectangularMatrix {
                series_index,
                expected,
                found,
            } => write!(
                f,
                "Series {} has {} data points, expected {}",
                series_index, found, expected
            ),
            HeatmapError::NoSeries => write!(f, "Heatmap has no series to lay out"),
            HeatmapError::NoDataPoints => write!(f, "Heatmap series have no data points"),
            HeatmapError::InvalidGridSize { width, height } => {
                write!(f, "Invalid grid size: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for HeatmapError {}

/// Result type alias for heatmap operations.
pub type HeatmapResult<T> = Result<T, HeatmapError>;
