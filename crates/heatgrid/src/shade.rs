//! Intensity-driven cell shading.

use heatgrid_core::Color;

/// Shade factor for a cell with the given intensity `percent`.
///
/// With negative values anywhere in the dataset the factor is asymmetric
/// around zero and scaled by `shade_intensity`. Without negatives it is
/// `1 - percent / 100` and `shade_intensity` does not apply.
///
/// The factor is fed to [`Color::shade`]: larger values lighten more.
pub fn shade_factor(percent: f64, has_negative_values: bool, shade_intensity: f64) -> f64 {
    let fraction = percent / 100.0;
    if has_negative_values {
        if percent < 0.0 {
            1.0 - (1.0 + fraction) * shade_intensity
        } else {
            (1.0 - fraction) * shade_intensity
        }
    } else {
        1.0 - fraction
    }
}

/// Final fill color of a cell.
///
/// With shading disabled `color` is returned untouched, opacity included.
/// Otherwise it is tinted by `factor` and given `fill_opacity` as alpha.
pub fn apply_shade(factor: f64, color: Color, enable_shades: bool, fill_opacity: f32) -> Color {
    if !enable_shades {
        return color;
    }
    color.shade(factor).with_alpha(fill_opacity)
}
