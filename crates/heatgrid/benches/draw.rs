//! Benchmarks for heatmap drawing.
//!
//! Measures:
//! - Planning only (color resolution, shading, layout)
//! - Planning and emission into a scene
//! - Update redraws reading the previous colors

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use heatgrid::{
    DrawFlags, GridSize, Heatmap, HeatmapBuilder, HeatmapOptions, HeatmapRenderer,
    PreviousRenderState, Scene, SeriesMatrix,
};

fn build_matrix(size: usize) -> SeriesMatrix {
    let rows = (0..size)
        .map(|series| {
            (0..size)
                .map(|point| ((series * 31 + point * 17) % 200) as f64 - 100.0)
                .collect::<Vec<f64>>()
        })
        .collect();
    SeriesMatrix::new(rows).expect("square matrix")
}

fn ranged_options() -> HeatmapOptions {
    HeatmapBuilder::new()
        .add_range(-100.0, -25.0, heatgrid::Color::BLUE)
        .add_range(-25.0, 25.0, heatgrid::Color::GREEN)
        .add_range(25.0, 100.0, heatgrid::Color::RED)
        .build()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap/plan");
    let options = ranged_options();
    let previous = PreviousRenderState::new();

    for size in [8, 32, 128] {
        let matrix = build_matrix(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, matrix| {
            let renderer = HeatmapRenderer::new(&options);
            b.iter(|| {
                renderer.plan(
                    black_box(matrix),
                    GridSize::new(800.0, 600.0),
                    DrawFlags::empty(),
                    &previous,
                )
            });
        });
    }

    group.finish();
}

fn bench_draw_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap/draw_scene");

    for size in [8, 32, 128] {
        let matrix = build_matrix(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, matrix| {
            let mut heatmap = Heatmap::new(ranged_options());
            b.iter(|| {
                let mut scene = Scene::new();
                let output = heatmap.draw(black_box(matrix), GridSize::new(800.0, 600.0), &mut scene);
                black_box((output, scene))
            });
        });
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap/update");

    for size in [8, 32, 128] {
        let matrix = build_matrix(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, matrix| {
            let mut heatmap = Heatmap::new(HeatmapOptions::default());
            let grid = GridSize::new(800.0, 600.0);
            let _ = heatmap.draw(matrix, grid, &mut Scene::new());

            b.iter(|| {
                let mut scene = Scene::new();
                heatmap.draw_with_flags(
                    black_box(matrix),
                    grid,
                    DrawFlags::DATA_CHANGED,
                    &mut scene,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan, bench_draw_scene, bench_update);
criterion_main!(benches);
