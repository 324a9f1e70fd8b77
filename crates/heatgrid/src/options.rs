//! Heatmap configuration.
//!
//! Every option group has a `Default` carrying the conventional heatmap
//! defaults, so callers only override what they need. [`HeatmapBuilder`]
//! provides a fluent way to assemble the whole tree.
//!
//! [`HeatmapBuilder`]: super::builder::HeatmapBuilder

use super::matrix::{CellIndex, SeriesMatrix};
use heatgrid_core::Color;
use std::fmt;
use std::sync::Arc;

/// A `{from, to, color}` band for range-mode coloring.
///
/// Bounds are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    /// Lower bound (inclusive).
    pub from: f64,
    /// Upper bound (inclusive).
    pub to: f64,
    /// Color for values inside the band.
    pub color: Color,
}

impl ColorRange {
    /// Create a color range.
    pub fn new(from: f64, to: f64, color: Color) -> Self {
        Self { from, to, color }
    }

    /// Check if a value falls inside this range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.from && value <= self.to
    }
}

/// Color scale configuration.
///
/// With no ranges, cells use their series' base color (auto mode). With
/// ranges, every range containing a cell's value overrides the color and
/// bounds in declaration order, so the last matching range wins.
/// Ranges need not be sorted or disjoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorScale {
    /// Ranges in declaration order.
    pub ranges: Vec<ColorRange>,
}

impl ColorScale {
    /// Create a range-mode scale.
    pub fn with_ranges(ranges: Vec<ColorRange>) -> Self {
        Self { ranges }
    }

    /// Whether any ranges are configured.
    pub fn is_range_mode(&self) -> bool {
        !self.ranges.is_empty()
    }
}

/// Cell border configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeOptions {
    /// Border width in pixels.
    pub width: f64,
    /// Border color.
    pub color: Color,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::WHITE,
        }
    }
}

/// Label text style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    /// Font size in pixels; also shifts the label baseline down by a third
    /// of its value.
    pub font_size: f64,
    /// Text color.
    pub color: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            color: Color::WHITE,
        }
    }
}

/// What a label formatter gets to see besides the raw value.
#[derive(Debug, Clone, Copy)]
pub struct LabelContext<'a> {
    /// The cell being labeled.
    pub cell: CellIndex,
    /// The full data matrix of the current draw.
    pub matrix: &'a SeriesMatrix,
}

type FormatFn = dyn Fn(f64, &LabelContext<'_>) -> String + Send + Sync;

/// Turns a cell value into label text.
#[derive(Clone)]
pub struct LabelFormatter(Arc<FormatFn>);

impl LabelFormatter {
    /// Wrap a formatting closure.
    pub fn new(f: impl Fn(f64, &LabelContext<'_>) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Format one value.
    pub fn format(&self, value: f64, context: &LabelContext<'_>) -> String {
        (self.0)(value, context)
    }
}

impl Default for LabelFormatter {
    fn default() -> Self {
        Self::new(|value, _| value.to_string())
    }
}

impl fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LabelFormatter").finish_non_exhaustive()
    }
}

/// Per-cell data label configuration.
#[derive(Debug, Clone)]
pub struct DataLabelOptions {
    /// Whether labels are drawn at all.
    pub enabled: bool,
    /// Horizontal offset from the cell center, in pixels.
    pub offset_x: f64,
    /// Vertical offset from the cell center, in pixels.
    pub offset_y: f64,
    /// Text style.
    pub style: LabelStyle,
    /// Value formatter.
    pub formatter: LabelFormatter,
}

impl Default for DataLabelOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            offset_x: 0.0,
            offset_y: 0.0,
            style: LabelStyle::default(),
            formatter: LabelFormatter::default(),
        }
    }
}

/// Transition settings for redraws caused by a data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicAnimation {
    /// When disabled, updates snap with a duration of 1.
    pub enabled: bool,
    /// Cross-fade duration in milliseconds.
    pub speed: u32,
}

impl Default for DynamicAnimation {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 350,
        }
    }
}

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationOptions {
    /// Enables entrance animations.
    pub enabled: bool,
    /// Entrance duration in milliseconds.
    pub speed: u32,
    /// Settings for data-change redraws.
    pub dynamic: DynamicAnimation,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 800,
            dynamic: DynamicAnimation::default(),
        }
    }
}

/// Drop shadow applied to each series group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropShadow {
    pub enabled: bool,
    pub top: f64,
    pub left: f64,
    pub blur: f64,
    pub color: Color,
    pub opacity: f32,
}

impl Default for DropShadow {
    fn default() -> Self {
        Self {
            enabled: false,
            top: 2.0,
            left: 2.0,
            blur: 4.0,
            color: Color::BLACK,
            opacity: 0.35,
        }
    }
}

/// Default series base colors, cycled when a chart has more series than
/// configured colors.
pub const SERIES_COLORS: [Color; 5] = [
    Color::rgb(0.0, 143.0 / 255.0, 251.0 / 255.0),   // Azure
    Color::rgb(0.0, 227.0 / 255.0, 150.0 / 255.0),   // Mint
    Color::rgb(254.0 / 255.0, 176.0 / 255.0, 25.0 / 255.0), // Amber
    Color::rgb(1.0, 69.0 / 255.0, 96.0 / 255.0),     // Coral
    Color::rgb(119.0 / 255.0, 93.0 / 255.0, 208.0 / 255.0), // Violet
];

/// Get a default color by series index.
pub fn palette_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Complete heatmap configuration.
#[derive(Debug, Clone)]
pub struct HeatmapOptions {
    /// Chart instance id, used to reference the grid clip mask.
    pub chart_id: String,
    /// Base colors per series. Empty means [`SERIES_COLORS`].
    pub colors: Vec<Color>,
    /// Corner radius of each cell.
    pub radius: f64,
    /// Cell border.
    pub stroke: StrokeOptions,
    /// Range-mode configuration.
    pub color_scale: ColorScale,
    /// How strongly sign differences shade cells when the data has
    /// negative values.
    pub shade_intensity: f64,
    /// When false, cells use their resolved color unshaded and opaque.
    pub enable_shades: bool,
    /// Alpha of shaded cells.
    pub fill_opacity: f32,
    /// Data labels.
    pub data_labels: DataLabelOptions,
    /// Animations.
    pub animations: AnimationOptions,
    /// Drop shadow on series groups.
    pub drop_shadow: DropShadow,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            chart_id: String::from("heatgrid"),
            colors: Vec::new(),
            radius: 2.0,
            stroke: StrokeOptions::default(),
            color_scale: ColorScale::default(),
            shade_intensity: 0.5,
            enable_shades: true,
            fill_opacity: 1.0,
            data_labels: DataLabelOptions::default(),
            animations: AnimationOptions::default(),
            drop_shadow: DropShadow::default(),
        }
    }
}

impl HeatmapOptions {
    /// The base color of a series, cycling through the configured colors.
    pub fn base_color(&self, series: usize) -> Color {
        if self.colors.is_empty() {
            palette_color(series)
        } else {
            self.colors[series % self.colors.len()]
        }
    }
}
