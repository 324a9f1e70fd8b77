//! Fluent heatmap builder API.
//!
//! # Example
//!
//! ```ignore
//! let heatmap = HeatmapBuilder::new()
//!     .chart_id("sales")
//!     .colors([Color::from_hex(0x008FFB)])
//!     .add_range(-30.0, 0.0, Color::BLUE)
//!     .add_range(0.0, 30.0, Color::RED)
//!     .shade_intensity(0.8)
//!     .labels(|l| l.offset(0.0, 2.0).font_size(11.0))
//!     .build_chart();
//! ```

use super::heatmap::Heatmap;
use super::options::{
    ColorRange, DataLabelOptions, DropShadow, HeatmapOptions, LabelContext, LabelFormatter,
};
use heatgrid_core::Color;

/// Builder for heatmap options.
#[derive(Debug, Default)]
pub struct HeatmapBuilder {
    options: HeatmapOptions,
}

impl HeatmapBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chart id used for the clip mask reference.
    pub fn chart_id(mut self, id: impl Into<String>) -> Self {
        self.options.chart_id = id.into();
        self
    }

    /// Set series base colors.
    pub fn colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.options.colors = colors.into_iter().collect();
        self
    }

    /// Set the corner radius of each cell.
    pub fn radius(mut self, radius: f64) -> Self {
        self.options.radius = radius;
        self
    }

    /// Set the cell border.
    pub fn stroke(mut self, width: f64, color: Color) -> Self {
        self.options.stroke.width = width;
        self.options.stroke.color = color;
        self
    }

    /// Append a color range. Later ranges override earlier ones.
    pub fn add_range(mut self, from: f64, to: f64, color: Color) -> Self {
        self.options
            .color_scale
            .ranges
            .push(ColorRange::new(from, to, color));
        self
    }

    /// Replace all color ranges.
    pub fn ranges(mut self, ranges: impl IntoIterator<Item = ColorRange>) -> Self {
        self.options.color_scale.ranges = ranges.into_iter().collect();
        self
    }

    /// Set the shade intensity.
    pub fn shade_intensity(mut self, intensity: f64) -> Self {
        self.options.shade_intensity = intensity;
        self
    }

    /// Disable shading; cells use their resolved color as-is.
    pub fn without_shades(mut self) -> Self {
        self.options.enable_shades = false;
        self
    }

    /// Set the fill opacity of shaded cells.
    pub fn fill_opacity(mut self, opacity: f32) -> Self {
        self.options.fill_opacity = opacity;
        self
    }

    /// Configure data labels using a closure.
    pub fn labels<F>(mut self, f: F) -> Self
    where
        F: FnOnce(LabelBuilder) -> LabelBuilder,
    {
        let builder = LabelBuilder {
            options: self.options.data_labels,
        };
        self.options.data_labels = f(builder).build();
        self
    }

    /// Disable data labels.
    pub fn without_labels(mut self) -> Self {
        self.options.data_labels.enabled = false;
        self
    }

    /// Set the entrance animation duration in milliseconds.
    pub fn animation_speed(mut self, speed: u32) -> Self {
        self.options.animations.speed = speed;
        self
    }

    /// Set the data-change transition duration in milliseconds.
    pub fn dynamic_speed(mut self, speed: u32) -> Self {
        self.options.animations.dynamic.speed = speed;
        self
    }

    /// Disable entrance animations. Data-change transitions still run.
    pub fn without_animations(mut self) -> Self {
        self.options.animations.enabled = false;
        self
    }

    /// Make data-change transitions instant.
    pub fn without_dynamic_animations(mut self) -> Self {
        self.options.animations.dynamic.enabled = false;
        self
    }

    /// Enable a drop shadow on each series group.
    pub fn drop_shadow(mut self, shadow: DropShadow) -> Self {
        self.options.drop_shadow = DropShadow {
            enabled: true,
            ..shadow
        };
        self
    }

    /// Build the options.
    pub fn build(self) -> HeatmapOptions {
        self.options
    }

    /// Build a heatmap instance.
    pub fn build_chart(self) -> Heatmap {
        Heatmap::new(self.options)
    }
}

/// Builder for data label options.
#[derive(Debug)]
pub struct LabelBuilder {
    options: DataLabelOptions,
}

impl LabelBuilder {
    /// Shift labels from the cell center.
    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.options.offset_x = x;
        self.options.offset_y = y;
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.options.style.font_size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.options.style.color = color;
        self
    }

    /// Set the value formatter.
    pub fn formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, &LabelContext<'_>) -> String + Send + Sync + 'static,
    {
        self.options.formatter = LabelFormatter::new(f);
        self
    }

    fn build(self) -> DataLabelOptions {
        DataLabelOptions {
            enabled: true,
            ..self.options
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{CellIndex, SeriesMatrix};

    #[test]
    fn test_builder_defaults() {
        let options = HeatmapBuilder::new().build();
        assert_eq!(options.radius, 2.0);
        assert_eq!(options.shade_intensity, 0.5);
        assert!(options.enable_shades);
        assert!(options.data_labels.enabled);
        assert!(!options.color_scale.is_range_mode());
    }

    #[test]
    fn test_builder_sets_options() {
        let options = HeatmapBuilder::new()
            .chart_id("c1")
            .colors([Color::RED, Color::BLUE])
            .radius(0.0)
            .stroke(2.0, Color::BLACK)
            .add_range(0.0, 5.0, Color::GREEN)
            .add_range(5.0, 10.0, Color::RED)
            .shade_intensity(0.9)
            .without_shades()
            .fill_opacity(0.5)
            .animation_speed(400)
            .dynamic_speed(100)
            .without_dynamic_animations()
            .build();

        assert_eq!(options.chart_id, "c1");
        assert_eq!(options.colors, vec![Color::RED, Color::BLUE]);
        assert_eq!(options.radius, 0.0);
        assert_eq!(options.stroke.width, 2.0);
        assert_eq!(options.color_scale.ranges.len(), 2);
        assert_eq!(options.color_scale.ranges[1].color, Color::RED);
        assert_eq!(options.shade_intensity, 0.9);
        assert!(!options.enable_shades);
        assert_eq!(options.fill_opacity, 0.5);
        assert_eq!(options.animations.speed, 400);
        assert_eq!(options.animations.dynamic.speed, 100);
        assert!(!options.animations.dynamic.enabled);
    }

    #[test]
    fn test_label_builder() {
        let options = HeatmapBuilder::new()
            .without_labels()
            .labels(|l| {
                l.offset(1.0, -2.0)
                    .font_size(10.0)
                    .color(Color::BLACK)
                    .formatter(|value, _| format!("{value:.1}%"))
            })
            .build();

        let labels = &options.data_labels;
        assert!(labels.enabled);
        assert_eq!((labels.offset_x, labels.offset_y), (1.0, -2.0));
        assert_eq!(labels.style.font_size, 10.0);

        let matrix = SeriesMatrix::new(vec![vec![3.0]]).unwrap();
        let context = LabelContext {
            cell: CellIndex::new(0, 0),
            matrix: &matrix,
        };
        assert_eq!(labels.formatter.format(3.0, &context), "3.0%");
    }

    #[test]
    fn test_drop_shadow_is_enabled() {
        let options = HeatmapBuilder::new()
            .drop_shadow(DropShadow {
                blur: 8.0,
                ..Default::default()
            })
            .build();
        assert!(options.drop_shadow.enabled);
        assert_eq!(options.drop_shadow.blur, 8.0);
    }

    #[test]
    fn test_build_chart() {
        let heatmap = HeatmapBuilder::new().chart_id("x").build_chart();
        assert_eq!(heatmap.options().chart_id, "x");
        assert!(heatmap.previous_state().is_empty());
    }
}
