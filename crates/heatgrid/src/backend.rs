//! Ports to the drawing, animation, label and filter collaborators.
//!
//! The renderer never draws anything itself. It creates elements and
//! requests animations through these traits; a rendering surface (an SVG
//! document, a retained scene, a GPU batch) implements them.
//! [`Scene`](super::scene::Scene) is the in-memory implementation.

use super::matrix::CellIndex;
use super::options::{DataLabelOptions, DropShadow};
use super::rect::Rect;
use glam::DVec2;
use heatgrid_core::Color;
use indexmap::IndexMap;
use std::fmt;

/// An attribute value on a drawable element.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Index(usize),
    Color(Color),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Index(i) => write!(f, "{}", i),
            AttrValue::Color(c) => write!(f, "{}", c),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<usize> for AttrValue {
    fn from(i: usize) -> Self {
        AttrValue::Index(i)
    }
}

impl From<Color> for AttrValue {
    fn from(c: Color) -> Self {
        AttrValue::Color(c)
    }
}

/// String-keyed attributes in insertion order.
pub type Attributes = IndexMap<String, AttrValue>;

/// Build an [`Attributes`] map from `key => value` pairs.
#[macro_export]
macro_rules! attrs {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::Attributes::new();
        $(map.insert(::std::string::String::from($key), $crate::AttrValue::from($value));)*
        map
    }};
}

/// A data label ready to be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLabel {
    /// Text anchor point.
    pub anchor: DVec2,
    /// Formatted text.
    pub text: String,
    /// The labeled cell.
    pub cell: CellIndex,
}

/// Drawing primitives.
pub trait Surface {
    /// Handle to a created element.
    type Element: Clone;

    /// Create an empty group.
    fn create_group(&mut self, attributes: Attributes) -> Self::Element;

    /// Create a rectangle with rounded corners.
    fn create_rounded_rect(&mut self, rect: Rect, radius: f64) -> Self::Element;

    /// Set attributes on an element, replacing existing keys.
    fn apply_attributes(&mut self, element: &Self::Element, attributes: Attributes);

    /// Append `child` to `group`.
    fn add_child(&mut self, group: &Self::Element, child: &Self::Element);
}

/// Time-based animation engine.
pub trait Animator: Surface {
    /// Animate an element's geometry from `from` to `to`.
    fn animate_rect(&mut self, element: &Self::Element, from: Rect, to: Rect, duration: u32);

    /// Set an element's fill to `from`, then animate it to `to`.
    fn animate_color(&mut self, element: &Self::Element, from: Color, to: Color, duration: u32);
}

/// Text label placement.
pub trait LabelPlacer: Surface {
    /// Place `label` inside `group`.
    fn place_label(&mut self, label: &CellLabel, group: &Self::Element, options: &DataLabelOptions);
}

/// Visual filters.
pub trait ShadowFilter: Surface {
    /// Apply a drop shadow to a group.
    fn drop_shadow(&mut self, group: &Self::Element, shadow: &DropShadow);
}

/// Everything the renderer needs from a rendering surface.
pub trait Backend: Animator + LabelPlacer + ShadowFilter {}

impl<T: Animator + LabelPlacer + ShadowFilter> Backend for T {}
