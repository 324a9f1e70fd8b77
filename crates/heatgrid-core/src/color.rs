//! RGBA colors and the shading arithmetic used by heatmap cells.

use std::fmt;
use std::str::FromStr;

/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// Colors can be constructed from floats, `u8` values, hex codes or CSS
/// color strings:
///
/// ```
/// use heatgrid_core::Color;
///
/// let red = Color::rgb(1.0, 0.0, 0.0);
/// let from_hex = Color::from_hex(0xFF8800);
/// let parsed: Color = "#008FFB".parse().unwrap();
/// let css: Color = "rgba(0, 143, 251, 0.5)".parse().unwrap();
/// assert_eq!(parsed.with_alpha(0.5), css);
/// ```
///
/// Shading and serialization work on 8-bit channels, so a color survives a
/// round trip through its string form unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    /// Create a color from RGB components with full opacity (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA values (0–255 mapped to 0.0–1.0).
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from 8-bit RGB values with full opacity.
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgb_u8(r, g, b)
    }

    /// The RGB channels quantized to 8 bits.
    pub fn to_rgb_u8(self) -> [u8; 3] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }

    /// Replace the alpha channel.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// The same color at full opacity.
    pub fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }

    /// Whether the alpha channel is at (or above) full opacity.
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Lighten or darken this color.
    ///
    /// A positive `percent` moves every 8-bit channel toward white, a
    /// negative one toward black, by `|percent|` of the remaining distance
    /// (`1.0` reaches the extreme). Each channel is rounded half-up and
    /// alpha is kept.
    pub fn shade(self, percent: f64) -> Self {
        let target = if percent < 0.0 { 0.0 } else { 255.0 };
        let p = percent.abs();
        let blend = |channel: u8| {
            let c = f64::from(channel);
            let shaded = round_half_up((target - c) * p) + c;
            if shaded.is_nan() {
                channel
            } else {
                shaded.clamp(0.0, 255.0) as u8
            }
        };

        let [r, g, b] = self.to_rgb_u8();
        Self::from_rgb_u8(blend(r), blend(g), blend(b)).with_alpha(self.a)
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex_string(self) -> String {
        let [r, g, b] = self.to_rgb_u8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// `rgba(r, g, b, a)` with 8-bit channels.
    pub fn to_rgba_string(self) -> String {
        let [r, g, b] = self.to_rgb_u8();
        format!("rgba({}, {}, {}, {})", r, g, b, self.a)
    }
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Round with ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Opaque colors print as `#rrggbb`, translucent ones as `rgba(...)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex_string())
        } else {
            f.write_str(&self.to_rgba_string())
        }
    }
}

/// Errors produced when parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty or only whitespace.
    Empty,
    /// A `#` color with a bad length or non-hex digits.
    InvalidHex(String),
    /// An `rgb()`/`rgba()` color with the wrong arity or bad components.
    InvalidFunction(String),
    /// Neither a hex nor a functional color.
    Unsupported(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Empty => write!(f, "Empty color string"),
            ColorParseError::InvalidHex(input) => write!(f, "Invalid hex color: {}", input),
            ColorParseError::InvalidFunction(input) => {
                write!(f, "Invalid rgb()/rgba() color: {}", input)
            }
            ColorParseError::Unsupported(input) => {
                write!(f, "Unsupported color format: {}", input)
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)` with `a` in `0.0..=1.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(digits) = input.strip_prefix('#') {
            return parse_hex(digits).ok_or_else(|| ColorParseError::InvalidHex(input.to_string()));
        }

        let lower = input.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_function(args)
                .ok_or_else(|| ColorParseError::InvalidFunction(input.to_string()));
        }

        Err(ColorParseError::Unsupported(input.to_string()))
    }
}

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        3 => {
            let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
            Some(Color::from_rgb_u8(
                expand(value >> 8),
                expand(value >> 4),
                expand(value),
            ))
        }
        6 => Some(Color::from_hex(value)),
        8 => Some(Color::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0)),
        _ => None,
    }
}

fn parse_function(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = part.parse().ok()?;
    }

    let alpha = match parts.get(3) {
        Some(part) => {
            let a: f32 = part.parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            a
        }
        None => 1.0,
    };

    let [r, g, b] = channels;
    Some(Color::from_rgb_u8(r, g, b).with_alpha(alpha))
}
