//! A heatmap that remembers what it drew.

use super::backend::Backend;
use super::error::HeatmapResult;
use super::layout::GridSize;
use super::matrix::SeriesMatrix;
use super::options::HeatmapOptions;
use super::renderer::{HeatmapRenderer, RenderOutput};
use super::snapshot::PreviousRenderState;
use super::transition::DrawFlags;

/// A heatmap chart instance.
///
/// Owns its options and the color snapshot of its last draw. Draw calls
/// take `&mut self`, so a snapshot can never be read and replaced by two
/// draws at once.
///
/// Redraw reasons accumulate through [`mark_data_changed`] and
/// [`mark_resized`] and are consumed by the next successful [`draw`].
///
/// [`mark_data_changed`]: Self::mark_data_changed
/// [`mark_resized`]: Self::mark_resized
/// [`draw`]: Self::draw
#[derive(Debug, Clone, Default)]
pub struct Heatmap {
    options: HeatmapOptions,
    previous: PreviousRenderState,
    pending: DrawFlags,
}

impl Heatmap {
    /// Create a heatmap that has not been drawn yet.
    pub fn new(options: HeatmapOptions) -> Self {
        Self {
            options,
            previous: PreviousRenderState::new(),
            pending: DrawFlags::empty(),
        }
    }

    pub fn options(&self) -> &HeatmapOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut HeatmapOptions {
        &mut self.options
    }

    /// Replace the options. The color snapshot is kept.
    pub fn set_options(&mut self, options: HeatmapOptions) {
        self.options = options;
    }

    /// Colors of the last successful draw.
    pub fn previous_state(&self) -> &PreviousRenderState {
        &self.previous
    }

    /// Flags the next draw will use.
    pub fn pending_flags(&self) -> DrawFlags {
        self.pending
    }

    /// The next draw follows a data change.
    pub fn mark_data_changed(&mut self) {
        self.pending |= DrawFlags::DATA_CHANGED;
    }

    /// The next draw follows a resize.
    pub fn mark_resized(&mut self) {
        self.pending |= DrawFlags::RESIZED;
    }

    /// Forget the last draw, as if the chart was just created.
    pub fn reset(&mut self) {
        self.previous = PreviousRenderState::new();
        self.pending = DrawFlags::empty();
    }

    /// Draw with the pending flags, then clear them.
    pub fn draw<B: Backend>(
        &mut self,
        matrix: &SeriesMatrix,
        grid: GridSize,
        backend: &mut B,
    ) -> HeatmapResult<RenderOutput<B::Element>> {
        let flags = self.pending;
        let output = self.draw_with_flags(matrix, grid, flags, backend)?;
        self.pending = DrawFlags::empty();
        Ok(output)
    }

    /// Draw with explicit flags, ignoring (and keeping) the pending ones.
    ///
    /// On success the color snapshot is replaced by this draw's fills. On
    /// error nothing is emitted and the snapshot is left untouched.
    pub fn draw_with_flags<B: Backend>(
        &mut self,
        matrix: &SeriesMatrix,
        grid: GridSize,
        flags: DrawFlags,
        backend: &mut B,
    ) -> HeatmapResult<RenderOutput<B::Element>> {
        let output = HeatmapRenderer::new(&self.options)
            .draw(matrix, grid, flags, &self.previous, backend)
            .inspect_err(|err| tracing::warn!(%err, "heatmap draw failed"))?;

        self.previous = PreviousRenderState::capture(&output.plan);
        tracing::debug!(
            mode = ?output.plan.mode,
            cells = self.previous.len(),
            "heatmap drawn"
        );
        Ok(output)
    }
}
