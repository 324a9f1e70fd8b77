//! End-to-end heatmap drawing tests.
//!
//! These tests draw into a [`Scene`] and check the encoded colors, the
//! tree structure and the transitions requested for each cell.

use heatgrid::{
    AnimationIntent, AttrValue, CellIndex, Color, ColorRange, DrawFlags, GridSize, Heatmap,
    HeatmapBuilder, HeatmapError, HeatmapOptions, HeatmapRenderer, NodeKind, PreviousRenderState,
    RenderMode, Scene, SeriesMatrix, shade_factor,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn matrix(values: Vec<Vec<f64>>) -> SeriesMatrix {
    SeriesMatrix::new(values).expect("rectangular matrix")
}

// ====================
// Encoding
// ====================

#[test]
fn test_end_to_end_mixed_signs() {
    let options = HeatmapBuilder::new()
        .colors([Color::BLACK])
        .shade_intensity(1.0)
        .build();
    let data = matrix(vec![vec![10.0, -5.0], vec![2.0, 8.0]]);

    let plan = HeatmapRenderer::new(&options)
        .plan(
            &data,
            GridSize::new(200.0, 100.0),
            DrawFlags::empty(),
            &PreviousRenderState::new(),
        )
        .unwrap();

    let positive = plan.cell(CellIndex::new(0, 0)).unwrap();
    assert!(approx(positive.percent, 200.0 / 3.0));
    assert!(approx(shade_factor(positive.percent, true, 1.0), 1.0 / 3.0));
    assert_eq!(positive.fill.to_rgb_u8(), [85, 85, 85]);

    let negative = plan.cell(CellIndex::new(0, 1)).unwrap();
    assert!(approx(negative.percent, -100.0 / 3.0));
    assert!(approx(shade_factor(negative.percent, true, 1.0), 1.0 / 3.0));
    assert_eq!(negative.fill.to_rgb_u8(), [85, 85, 85]);

    // Series 1 spans 2..8, total 10.
    assert_eq!(plan.cell(CellIndex::new(1, 0)).unwrap().fill.to_rgb_u8(), [204, 204, 204]);
    assert_eq!(plan.cell(CellIndex::new(1, 1)).unwrap().fill.to_rgb_u8(), [51, 51, 51]);
}

#[test]
fn test_overlapping_ranges_last_match_wins() {
    let options = HeatmapBuilder::new()
        .add_range(0.0, 5.0, Color::RED)
        .add_range(3.0, 10.0, Color::BLUE)
        .without_shades()
        .build();
    let data = matrix(vec![vec![4.0, 1.0, 9.0]]);

    let plan = HeatmapRenderer::new(&options)
        .plan(
            &data,
            GridSize::new(30.0, 10.0),
            DrawFlags::empty(),
            &PreviousRenderState::new(),
        )
        .unwrap();

    assert_eq!(plan.cell(CellIndex::new(0, 0)).unwrap().fill, Color::BLUE);
    assert_eq!(plan.cell(CellIndex::new(0, 1)).unwrap().fill, Color::RED);
    assert_eq!(plan.cell(CellIndex::new(0, 2)).unwrap().fill, Color::BLUE);
}

#[test]
fn test_shading_ignores_intensity_without_negatives() {
    // Characterization: shade intensity only applies when the data has
    // negative values.
    let low = HeatmapBuilder::new().colors([Color::BLACK]).shade_intensity(0.1).build();
    let high = HeatmapBuilder::new().colors([Color::BLACK]).shade_intensity(0.9).build();
    let data = matrix(vec![vec![1.0, 3.0]]);

    let fill = |options: &HeatmapOptions| {
        let plan = HeatmapRenderer::new(options)
            .plan(
                &data,
                GridSize::new(10.0, 10.0),
                DrawFlags::empty(),
                &PreviousRenderState::new(),
            )
            .unwrap();
        plan.cell(CellIndex::new(0, 0)).unwrap().fill
    };

    assert_eq!(fill(&low), fill(&high));
}

#[test]
fn test_fill_opacity_applies_to_shaded_cells() {
    let options = HeatmapBuilder::new().fill_opacity(0.6).build();
    let plan = HeatmapRenderer::new(&options)
        .plan(
            &matrix(vec![vec![1.0, 2.0]]),
            GridSize::new(10.0, 10.0),
            DrawFlags::empty(),
            &PreviousRenderState::new(),
        )
        .unwrap();
    assert!(plan.cells().all(|cell| cell.fill.a == 0.6));
}

// ====================
// Layout
// ====================

#[test]
fn test_three_series_draw_order() {
    let mut scene = Scene::new();
    let mut heatmap = Heatmap::default();
    let output = heatmap
        .draw(
            &matrix(vec![vec![1.0], vec![2.0], vec![3.0]]),
            GridSize::new(10.0, 30.0),
            &mut scene,
        )
        .unwrap();

    let groups = scene.children(output.root);
    assert_eq!(groups.len(), 3);

    let real_index = |i: usize| scene.node(groups[i]).unwrap().attribute("data:realIndex").cloned();
    assert_eq!(real_index(0), Some(AttrValue::Index(2)));
    assert_eq!(real_index(1), Some(AttrValue::Index(1)));
    assert_eq!(real_index(2), Some(AttrValue::Index(0)));

    let top = scene.find_cell(output.root, CellIndex::new(2, 0)).unwrap();
    assert!(matches!(scene.node(top).unwrap().kind, NodeKind::Rect { rect, .. } if rect.y == 0.0));
    let bottom = scene.find_cell(output.root, CellIndex::new(0, 0)).unwrap();
    assert!(matches!(scene.node(bottom).unwrap().kind, NodeKind::Rect { rect, .. } if rect.y == 20.0));
}

#[test]
fn test_rects_are_emitted_in_document_order() {
    let mut scene = Scene::new();
    let output = Heatmap::default()
        .draw(
            &matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            GridSize::new(10.0, 10.0),
            &mut scene,
        )
        .unwrap();

    let cells: Vec<CellIndex> = scene
        .rects_under(output.root)
        .into_iter()
        .filter_map(|id| scene.node(id).and_then(|node| node.cell()))
        .collect();
    assert_eq!(
        cells,
        vec![
            CellIndex::new(1, 0),
            CellIndex::new(1, 1),
            CellIndex::new(0, 0),
            CellIndex::new(0, 1),
        ]
    );
}

// ====================
// Transitions
// ====================

#[test]
fn test_update_draws_are_idempotent() {
    let mut heatmap = Heatmap::default();
    let data = matrix(vec![vec![3.0, -1.0, 7.0], vec![0.0, 2.0, 5.0]]);
    let grid = GridSize::new(90.0, 40.0);

    let first = heatmap
        .draw_with_flags(&data, grid, DrawFlags::DATA_CHANGED, &mut Scene::new())
        .unwrap();
    let second = heatmap
        .draw_with_flags(&data, grid, DrawFlags::DATA_CHANGED, &mut Scene::new())
        .unwrap();

    for (a, b) in first.plan.cells().zip(second.plan.cells()) {
        assert_eq!(a.fill, b.fill);

        let AnimationIntent::ColorTransition { to: first_to, .. } = a.animation else {
            panic!("expected a color transition, got {:?}", a.animation);
        };
        let AnimationIntent::ColorTransition { from: second_from, .. } = b.animation else {
            panic!("expected a color transition, got {:?}", b.animation);
        };
        assert_eq!(second_from, first_to);
    }
}

#[test]
fn test_update_without_snapshot_transitions_from_new_color() {
    let mut heatmap = Heatmap::default();
    heatmap.mark_data_changed();
    let output = heatmap
        .draw(&matrix(vec![vec![1.0, 2.0]]), GridSize::new(10.0, 10.0), &mut Scene::new())
        .unwrap();

    for cell in output.plan.cells() {
        assert_eq!(
            cell.animation,
            AnimationIntent::ColorTransition {
                from: cell.fill.opaque(),
                to: cell.fill.opaque(),
                duration: 350,
            }
        );
    }
}

#[test]
fn test_resize_redraw_is_instant() {
    let mut heatmap = Heatmap::default();
    heatmap.mark_resized();
    let output = heatmap
        .draw(&matrix(vec![vec![1.0]]), GridSize::new(10.0, 10.0), &mut Scene::new())
        .unwrap();
    assert_eq!(output.plan.mode, RenderMode::Entrance { duration: 1 });
}

#[test]
fn test_static_mode() {
    let mut heatmap = HeatmapBuilder::new().without_animations().build_chart();
    let mut scene = Scene::new();
    let output = heatmap
        .draw(&matrix(vec![vec![1.0, 2.0]]), GridSize::new(10.0, 10.0), &mut scene)
        .unwrap();

    assert_eq!(output.plan.mode, RenderMode::Static);
    assert!(output.plan.cells().all(|cell| cell.animation == AnimationIntent::None));
    assert!(scene.nodes().all(|(_, node)| node.animations.is_empty()));
}

#[test]
fn test_data_change_updates_even_without_animations() {
    let mut heatmap = HeatmapBuilder::new()
        .without_animations()
        .without_dynamic_animations()
        .build_chart();
    heatmap.mark_data_changed();
    let output = heatmap
        .draw(&matrix(vec![vec![1.0]]), GridSize::new(10.0, 10.0), &mut Scene::new())
        .unwrap();
    assert_eq!(output.plan.mode, RenderMode::Update { duration: 1 });
}

// ====================
// Errors
// ====================

#[test]
fn test_configuration_errors_emit_nothing() {
    let cases = [
        (matrix(vec![]), GridSize::new(10.0, 10.0), HeatmapError::NoSeries),
        (
            matrix(vec![vec![], vec![]]),
            GridSize::new(10.0, 10.0),
            HeatmapError::NoDataPoints,
        ),
        (
            matrix(vec![vec![1.0]]),
            GridSize::new(f64::INFINITY, 10.0),
            HeatmapError::InvalidGridSize {
                width: f64::INFINITY,
                height: 10.0,
            },
        ),
    ];

    for (data, grid, expected) in cases {
        let mut scene = Scene::new();
        let mut heatmap = Heatmap::default();
        let result = heatmap.draw(&data, grid, &mut scene);

        assert_eq!(result.err(), Some(expected));
        assert!(scene.is_empty());
        assert!(heatmap.previous_state().is_empty());
    }
}

#[test]
fn test_ragged_matrix_is_rejected() {
    let err = SeriesMatrix::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        HeatmapError::NonRectangularMatrix {
            series_index: 1,
            expected: 2,
            found: 1,
        }
    );
}

// ====================
// Labels and filters
// ====================

#[test]
fn test_labels_use_formatter_and_context() {
    let mut heatmap = HeatmapBuilder::new()
        .labels(|l| l.formatter(|value, ctx| format!("{}:{}={value}", ctx.cell.series, ctx.cell.point)))
        .build_chart();
    let mut scene = Scene::new();
    heatmap
        .draw(&matrix(vec![vec![4.0, 5.0]]), GridSize::new(20.0, 10.0), &mut scene)
        .unwrap();

    let texts: Vec<String> = scene
        .nodes()
        .filter_map(|(_, node)| match &node.kind {
            NodeKind::Label(label) => Some(label.text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["0:0=4", "0:1=5"]);
}

#[test]
fn test_drop_shadow_on_every_series_group() {
    let mut heatmap = HeatmapBuilder::new()
        .drop_shadow(Default::default())
        .without_labels()
        .build_chart();
    let mut scene = Scene::new();
    let output = heatmap
        .draw(&matrix(vec![vec![1.0], vec![2.0]]), GridSize::new(10.0, 10.0), &mut scene)
        .unwrap();

    for &group in scene.children(output.root) {
        assert!(scene.node(group).unwrap().shadow.is_some());
    }
}

#[test]
fn test_range_color_parsed_from_string() {
    let red: Color = "#ff0000".parse().unwrap();
    let options = HeatmapBuilder::new()
        .ranges([ColorRange::new(0.0, 1.0, red)])
        .without_shades()
        .build();
    let plan = HeatmapRenderer::new(&options)
        .plan(
            &matrix(vec![vec![0.5]]),
            GridSize::new(1.0, 1.0),
            DrawFlags::empty(),
            &PreviousRenderState::new(),
        )
        .unwrap();
    assert_eq!(plan.cell(CellIndex::new(0, 0)).unwrap().fill, Color::RED);
}
