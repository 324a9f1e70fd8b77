//! Heatmap cell rendering.
//!
//! Drawing happens in two steps:
//! - **Planning** ([`HeatmapRenderer::plan`]) is pure: it validates the input,
//!   lays out the grid and computes every cell's fill, label and animation.
//! - **Emission** ([`HeatmapRenderer::emit`]) walks the plan and builds the
//!   drawable tree through a [`Backend`].
//!
//! Configuration errors are raised during planning, so a malformed grid
//! never produces partial output.

use super::backend::{Backend, CellLabel};
use super::color_scale::resolve_value;
use super::error::HeatmapResult;
use super::layout::{CellPlacement, GridLayout, GridSize};
use super::matrix::{CellIndex, SeriesMatrix};
use super::options::HeatmapOptions;
use super::rect::Rect;
use super::shade::{apply_shade, shade_factor};
use super::snapshot::PreviousRenderState;
use super::transition::{AnimationIntent, DrawFlags, RenderMode, plan_cell};
use crate::attrs;
use glam::DVec2;
use heatgrid_core::Color;
use heatgrid_core::profiling::profile_scope;

/// Everything needed to draw one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDrawable {
    /// Data coordinates.
    pub index: CellIndex,
    /// Raw value.
    pub value: f64,
    /// Signed intensity the fill was shaded with.
    pub percent: f64,
    /// Final geometry.
    pub rect: Rect,
    /// Final fill color.
    pub fill: Color,
    /// Transition into the final state.
    pub animation: AnimationIntent,
    /// Data label, when labels are enabled.
    pub label: Option<CellLabel>,
}

/// The cells of one series, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDrawable {
    /// Data index of the series.
    pub series: usize,
    pub cells: Vec<CellDrawable>,
}

/// A fully computed draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapPlan {
    /// Render mode shared by every cell.
    pub mode: RenderMode,
    /// Cell dimensions.
    pub layout: GridLayout,
    /// Series in draw order (last data series first).
    pub series: Vec<SeriesDrawable>,
}

impl HeatmapPlan {
    /// All cells in draw order.
    pub fn cells(&self) -> impl Iterator<Item = &CellDrawable> {
        self.series.iter().flat_map(|s| s.cells.iter())
    }

    /// The drawable for one cell.
    pub fn cell(&self, index: CellIndex) -> Option<&CellDrawable> {
        let draw_order = self
            .layout
            .series_count
            .checked_sub(index.series + 1)?;
        self.series.get(draw_order)?.cells.get(index.point)
    }
}

/// Values shared by every cell of one series.
#[derive(Debug, Clone, Copy)]
struct CellContext {
    /// `(min, max)` of the series.
    bounds: (f64, f64),
    /// Whether any value in the whole matrix is negative.
    has_negatives: bool,
    mode: RenderMode,
}

/// Result of drawing into a backend.
#[derive(Debug, Clone)]
pub struct RenderOutput<E> {
    /// Root group of the heatmap.
    pub root: E,
    /// The plan that was emitted.
    pub plan: HeatmapPlan,
}

/// Plans and emits heatmap cells for one set of options.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapRenderer<'a> {
    options: &'a HeatmapOptions,
}

impl<'a> HeatmapRenderer<'a> {
    /// Create a renderer for the given options.
    pub fn new(options: &'a HeatmapOptions) -> Self {
        Self { options }
    }

    /// Compute every cell of a draw call.
    ///
    /// `previous` is only read when `flags` contains
    /// [`DrawFlags::DATA_CHANGED`].
    pub fn plan(
        &self,
        matrix: &SeriesMatrix,
        grid: GridSize,
        flags: DrawFlags,
        previous: &PreviousRenderState,
    ) -> HeatmapResult<HeatmapPlan> {
        profile_scope!("heatmap_plan");

        let layout = GridLayout::new(grid, matrix.points_per_series(), matrix.series_count())?;
        let mode = RenderMode::resolve(&self.options.animations, flags);
        let has_negatives = matrix.has_negative_values();

        tracing::debug!(
            ?mode,
            series = layout.series_count,
            points = layout.points_per_series,
            cell_width = layout.cell_width,
            cell_height = layout.cell_height,
            has_negatives,
            "planning heatmap"
        );

        let mut series: Vec<SeriesDrawable> = Vec::with_capacity(layout.series_count);
        let mut bounds = (0.0, 0.0);

        for placement in layout.cells() {
            let index = placement.index;
            if index.point == 0 {
                let Some(series_bounds) = matrix.series_bounds(index.series) else {
                    continue;
                };
                bounds = series_bounds;
                tracing::trace!(
                    series = index.series,
                    min = bounds.0,
                    max = bounds.1,
                    "planning series"
                );
                series.push(SeriesDrawable {
                    series: index.series,
                    cells: Vec::with_capacity(layout.points_per_series),
                });
            }

            let (Some(row), Some(value)) = (series.last_mut(), matrix.value(index)) else {
                continue;
            };

            let previous_color = if mode.uses_previous_colors() {
                let color = previous.color_at(index);
                if color.is_none() {
                    tracing::debug!(
                        series = index.series,
                        point = index.point,
                        "no previous color for cell"
                    );
                }
                color
            } else {
                None
            };

            let context = CellContext {
                bounds,
                has_negatives,
                mode,
            };
            row.cells
                .push(self.plan_cell(matrix, &placement, value, context, previous_color));
        }

        Ok(HeatmapPlan {
            mode,
            layout,
            series,
        })
    }

    fn plan_cell(
        &self,
        matrix: &SeriesMatrix,
        placement: &CellPlacement,
        value: f64,
        context: CellContext,
        previous_color: Option<Color>,
    ) -> CellDrawable {
        let options = self.options;
        let resolved = resolve_value(value, context.bounds, placement.index, options);
        let factor = shade_factor(
            resolved.percent,
            context.has_negatives,
            options.shade_intensity,
        );
        let fill = apply_shade(
            factor,
            resolved.color,
            options.enable_shades,
            options.fill_opacity,
        );

        CellDrawable {
            index: placement.index,
            value,
            percent: resolved.percent,
            rect: placement.rect,
            fill,
            animation: plan_cell(context.mode, placement.rect, previous_color, fill),
            label: self.label_for(matrix, placement, value),
        }
    }

    /// The data label of a cell: centered, shifted by the configured offsets
    /// and lowered by a third of the font size to center the baseline.
    fn label_for(
        &self,
        matrix: &SeriesMatrix,
        placement: &CellPlacement,
        value: f64,
    ) -> Option<CellLabel> {
        let labels = &self.options.data_labels;
        if !labels.enabled {
            return None;
        }

        let rect = placement.rect;
        let anchor = DVec2::new(
            rect.x + rect.width / 2.0 + labels.offset_x,
            rect.y + rect.height / 2.0 + labels.style.font_size / 3.0 + labels.offset_y,
        );
        let context = super::options::LabelContext {
            cell: placement.index,
            matrix,
        };

        Some(CellLabel {
            anchor,
            text: labels.formatter.format(value, &context),
            cell: placement.index,
        })
    }

    /// Build the drawable tree for a plan.
    ///
    /// Returns the root group. Series groups are added in plan order; each
    /// holds its cell rects, each followed by its label group.
    pub fn emit<B: Backend>(&self, plan: &HeatmapPlan, backend: &mut B) -> B::Element {
        profile_scope!("heatmap_emit");

        let options = self.options;
        let root = backend.create_group(attrs! { "class" => "heatgrid-heatmap" });
        backend.apply_attributes(
            &root,
            attrs! { "clip-path" => format!("url(#gridRectMask{})", options.chart_id) },
        );

        for series in &plan.series {
            let group = backend.create_group(attrs! {
                "class" => "heatgrid-series heatgrid-heatmap-series",
                "rel" => series.series + 1,
                "data:realIndex" => series.series,
            });

            if options.drop_shadow.enabled {
                backend.drop_shadow(&group, &options.drop_shadow);
            }

            for cell in &series.cells {
                self.emit_cell(cell, &group, backend);
            }

            backend.add_child(&root, &group);
        }

        root
    }

    fn emit_cell<B: Backend>(&self, cell: &CellDrawable, group: &B::Element, backend: &mut B) {
        let options = self.options;
        let rect = backend.create_rounded_rect(cell.rect, options.radius);
        backend.apply_attributes(
            &rect,
            attrs! {
                "cx" => cell.rect.x,
                "cy" => cell.rect.y,
                "class" => "heatgrid-heatmap-rect",
            },
        );
        backend.add_child(group, &rect);

        backend.apply_attributes(
            &rect,
            attrs! {
                "fill" => cell.fill,
                "i" => cell.index.series,
                "j" => cell.index.point,
                "val" => cell.value,
                "stroke-width" => options.stroke.width,
                "stroke" => options.stroke.color,
                "color" => cell.fill,
            },
        );

        match cell.animation {
            AnimationIntent::Entrance { from, to, duration } => {
                backend.animate_rect(&rect, from, to, duration);
            }
            AnimationIntent::ColorTransition { from, to, duration } => {
                backend.animate_color(&rect, from, to, duration);
            }
            AnimationIntent::None => {}
        }

        if let Some(label) = &cell.label {
            let wrap = backend.create_group(attrs! { "class" => "heatgrid-data-labels" });
            backend.place_label(label, &wrap, &options.data_labels);
            backend.add_child(group, &wrap);
        }
    }

    /// Plan and emit in one call.
    pub fn draw<B: Backend>(
        &self,
        matrix: &SeriesMatrix,
        grid: GridSize,
        flags: DrawFlags,
        previous: &PreviousRenderState,
        backend: &mut B,
    ) -> HeatmapResult<RenderOutput<B::Element>> {
        let plan = self.plan(matrix, grid, flags, previous)?;
        let root = self.emit(&plan, backend);
        Ok(RenderOutput { root, plan })
    }
}
