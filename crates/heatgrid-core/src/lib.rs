//! Heatgrid Core
//!
//! Shared foundations for the heatgrid crates: the RGBA [`Color`] type with
//! the 8-bit shading arithmetic used by heatmap cells, logging bootstrap,
//! profiling scopes and fast hash collections.

pub mod alloc;
pub mod color;
pub mod logging;
pub mod profiling;

pub use color::{Color, ColorParseError};
