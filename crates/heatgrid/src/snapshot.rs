//! Colors from the previous draw call.

use super::matrix::CellIndex;
use super::renderer::HeatmapPlan;
use heatgrid_core::Color;
use heatgrid_core::alloc::HashMap;

/// The fill of every cell of the last successful draw.
///
/// Update transitions read from it and the whole snapshot is replaced after
/// each draw, so cells that disappear from the data are forgotten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviousRenderState {
    colors: HashMap<CellIndex, Color>,
}

impl PreviousRenderState {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the fills of a plan.
    pub fn capture(plan: &HeatmapPlan) -> Self {
        let colors = plan.cells().map(|cell| (cell.index, cell.fill)).collect();
        Self { colors }
    }

    /// Record one cell's color.
    pub fn insert(&mut self, cell: CellIndex, color: Color) {
        self.colors.insert(cell, color);
    }

    /// The color a cell had, if it was drawn.
    pub fn color_at(&self, cell: CellIndex) -> Option<Color> {
        self.colors.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut state = PreviousRenderState::new();
        assert!(state.is_empty());

        state.insert(CellIndex::new(1, 2), Color::RED);
        assert_eq!(state.len(), 1);
        assert_eq!(state.color_at(CellIndex::new(1, 2)), Some(Color::RED));
        assert_eq!(state.color_at(CellIndex::new(2, 1)), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut state = PreviousRenderState::new();
        state.insert(CellIndex::new(0, 0), Color::RED);
        state.insert(CellIndex::new(0, 0), Color::BLUE);
        assert_eq!(state.len(), 1);
        assert_eq!(state.color_at(CellIndex::new(0, 0)), Some(Color::BLUE));
    }
}
