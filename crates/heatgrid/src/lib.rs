//! Heatgrid - Heatmap visual encoding
//!
//! This crate turns a rectangular matrix of series values into heatmap
//! cells:
//! - Color resolution per cell (series colors or value ranges)
//! - Sign-aware shading with configurable intensity
//! - Grid layout (last series on top, points left to right)
//! - Entrance and data-change transitions
//! - Data labels and drop shadows
//!
//! Drawing goes through the [`Backend`] traits; [`Scene`] is an in-memory
//! backend that records the drawable tree.
//!
//! # Example
//!
//! ```ignore
//! use heatgrid::*;
//!
//! let mut heatmap = HeatmapBuilder::new()
//!     .add_range(-10.0, 0.0, Color::BLUE)
//!     .add_range(0.0, 10.0, Color::RED)
//!     .build_chart();
//!
//! let data = SeriesMatrix::new(vec![vec![3.0, -2.0], vec![7.5, 0.0]])?;
//! let mut scene = Scene::new();
//! heatmap.draw(&data, GridSize::new(400.0, 200.0), &mut scene)?;
//!
//! // Later, with new values:
//! heatmap.mark_data_changed();
//! heatmap.draw(&new_data, GridSize::new(400.0, 200.0), &mut scene)?;
//! ```

// Data
mod error;
mod matrix;
mod rect;

// Configuration
mod builder;
mod options;

// Encoding
mod color_scale;
mod layout;
mod shade;
mod transition;

// Drawing
mod backend;
mod heatmap;
mod renderer;
mod scene;
mod snapshot;

// Re-exports
pub use error::*;
pub use matrix::*;
pub use rect::*;

pub use builder::*;
pub use options::*;

pub use color_scale::*;
pub use layout::*;
pub use shade::*;
pub use transition::*;

pub use backend::*;
pub use heatmap::*;
pub use renderer::*;
pub use scene::*;
pub use snapshot::*;

pub use heatgrid_core::{Color, ColorParseError, logging, profiling};
