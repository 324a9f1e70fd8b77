//! Transition planning.
//!
//! The render mode is chosen once per draw call from the draw flags and the
//! animation options; every cell in the pass then gets the same kind of
//! [`AnimationIntent`]. The intents are declarative: an external engine does
//! the actual interpolation.

use super::options::AnimationOptions;
use super::rect::Rect;
use heatgrid_core::Color;

/// Duration used when a transition should complete immediately.
pub const INSTANT: u32 = 1;

bitflags::bitflags! {
    /// Why a draw call is happening.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DrawFlags: u8 {
        /// The series data changed since the previous draw.
        const DATA_CHANGED = 0b0000_0001;
        /// The chart was resized; entrance animations run instantly.
        const RESIZED = 0b0000_0010;
    }
}

/// How every cell of one draw call is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Cells grow from their centers to full size.
    Entrance {
        /// Duration in milliseconds.
        duration: u32,
    },
    /// Cells cross-fade from their previous color to the new one.
    Update {
        /// Duration in milliseconds.
        duration: u32,
    },
    /// Cells appear at their final geometry and color.
    Static,
}

impl RenderMode {
    /// Pick the mode for a draw call.
    ///
    /// A data change always selects [`RenderMode::Update`], even with
    /// animations disabled.
    pub fn resolve(animations: &AnimationOptions, flags: DrawFlags) -> Self {
        if flags.contains(DrawFlags::DATA_CHANGED) {
            let duration = if animations.dynamic.enabled {
                animations.dynamic.speed
            } else {
                INSTANT
            };
            RenderMode::Update { duration }
        } else if animations.enabled {
            let duration = if flags.contains(DrawFlags::RESIZED) {
                INSTANT
            } else {
                animations.speed
            };
            RenderMode::Entrance { duration }
        } else {
            RenderMode::Static
        }
    }

    /// Whether this mode reads the previous render's colors.
    pub fn uses_previous_colors(&self) -> bool {
        matches!(self, RenderMode::Update { .. })
    }
}

/// Animation requested for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationIntent {
    /// Grow the cell rectangle from `from` to `to`.
    Entrance { from: Rect, to: Rect, duration: u32 },
    /// Set the fill to `from`, then animate it to `to`.
    ColorTransition { from: Color, to: Color, duration: u32 },
    /// No animation.
    None,
}

/// Build the intent for one cell.
///
/// `previous` is the cell's color from the last draw; when it is missing in
/// update mode the cell transitions from its own color. Color endpoints are
/// opaque.
pub fn plan_cell(mode: RenderMode, rect: Rect, previous: Option<Color>, fill: Color) -> AnimationIntent {
    match mode {
        RenderMode::Entrance { duration } => AnimationIntent::Entrance {
            from: rect.collapsed(),
            to: rect,
            duration,
        },
        RenderMode::Update { duration } => AnimationIntent::ColorTransition {
            from: previous.unwrap_or(fill).opaque(),
            to: fill.opaque(),
            duration,
        },
        RenderMode::Static => AnimationIntent::None,
    }
}
