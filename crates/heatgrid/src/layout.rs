//! Grid layout for heatmap cells.
//!
//! The grid is divided into equal cells. Series become rows in reverse data
//! order (the last series is the top row) and points become columns left to
//! right. Offsets are accumulated by repeated addition of the cell size, so
//! sub-pixel boundaries come out identical on every redraw.

use super::error::{HeatmapError, HeatmapResult};
use super::matrix::CellIndex;
use super::rect::Rect;

/// Size of the plotting area the cells fill.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridSize {
    pub width: f64,
    pub height: f64,
}

impl GridSize {
    /// Create a grid size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Cell dimensions for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Width of every cell.
    pub cell_width: f64,
    /// Height of every cell.
    pub cell_height: f64,
    /// Number of rows.
    pub series_count: usize,
    /// Number of columns.
    pub points_per_series: usize,
}

/// A cell's data coordinates and its rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Data coordinates.
    pub index: CellIndex,
    /// Row position counted from the top (0 = last series).
    pub draw_order: usize,
    /// Cell rectangle.
    pub rect: Rect,
}

impl GridLayout {
    /// Divide `grid` into `points_per_series` columns and `series_count` rows.
    ///
    /// Fails on an empty shape or a negative or non-finite grid size.
    pub fn new(grid: GridSize, points_per_series: usize, series_count: usize) -> HeatmapResult<Self> {
        if !grid.is_valid() {
            return Err(HeatmapError::InvalidGridSize {
                width: grid.width,
                height: grid.height,
            });
        }
        if series_count == 0 {
            return Err(HeatmapError::NoSeries);
        }
        if points_per_series == 0 {
            return Err(HeatmapError::NoDataPoints);
        }

        Ok(Self {
            cell_width: grid.width / points_per_series as f64,
            cell_height: grid.height / series_count as f64,
            series_count,
            points_per_series,
        })
    }

    /// Data series index drawn at the given row.
    pub fn series_at(&self, draw_order: usize) -> usize {
        self.series_count - 1 - draw_order
    }

    /// Top-left corner of a cell, accumulated the same way [`cells`] does.
    ///
    /// [`cells`]: Self::cells
    pub fn cell_origin(&self, draw_order: usize, point: usize) -> (f64, f64) {
        let x = (0..point).fold(0.0, |x, _| x + self.cell_width);
        let y = (0..draw_order).fold(0.0, |y, _| y + self.cell_height);
        (x, y)
    }

    /// Every cell in draw order: rows top to bottom (series last to first),
    /// points left to right within a row.
    pub fn cells(&self) -> impl Iterator<Item = CellPlacement> + '_ {
        let mut y = 0.0;
        (0..self.series_count).flat_map(move |draw_order| {
            let row_y = y;
            y += self.cell_height;
            let series = self.series_at(draw_order);

            let mut x = 0.0;
            (0..self.points_per_series).map(move |point| {
                let rect = Rect::new(x, row_y, self.cell_width, self.cell_height);
                x += self.cell_width;
                CellPlacement {
                    index: CellIndex::new(series, point),
                    draw_order,
                    rect,
                }
            })
        })
    }
}
