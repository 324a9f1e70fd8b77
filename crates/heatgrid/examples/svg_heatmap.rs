//! SVG Heatmap Example - Rendering a heatmap scene to SVG
//!
//! This example demonstrates:
//! - Building a heatmap with HeatmapBuilder
//! - Range-mode coloring with overlapping ranges
//! - Drawing into the in-memory Scene backend
//! - A data-change redraw that cross-fades from the previous colors
//! - Serializing the scene, including its animations, to SVG
//!
//! Usage:
//!   cargo run -p heatgrid --example svg_heatmap -- [output-dir]
//!
//! Writes `heatmap.svg` (entrance) and `heatmap_update.svg` (update).

use heatgrid::{
    AnimationIntent, Color, DropShadow, GridSize, HeatmapBuilder, HeatmapOptions, Node, NodeId,
    NodeKind, Scene, SeriesMatrix, logging, profiling,
};
use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 320.0;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    profiling::set_enabled(true);

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut heatmap = HeatmapBuilder::new()
        .chart_id("demo")
        .add_range(-30.0, 0.0, Color::from_hex(0x00A100))
        .add_range(0.0, 15.0, Color::from_hex(0x128FD9))
        .add_range(10.0, 30.0, Color::from_hex(0xFFB200))
        .shade_intensity(0.6)
        .labels(|l| l.font_size(11.0).formatter(|value, _| format!("{value:.0}")))
        .drop_shadow(DropShadow::default())
        .build_chart();

    let grid = GridSize::new(WIDTH, HEIGHT);
    let first = weekly_temperatures(0.0)?;
    let second = weekly_temperatures(6.0)?;

    let mut scene = Scene::new();
    profiling::new_frame();
    let output = heatmap.draw(&first, grid, &mut scene)?;
    let path = out_dir.join("heatmap.svg");
    std::fs::write(&path, to_svg(&scene, output.root, heatmap.options())?)?;
    tracing::info!(path = %path.display(), mode = ?output.plan.mode, "wrote heatmap");

    heatmap.mark_data_changed();
    let mut scene = Scene::new();
    profiling::new_frame();
    let output = heatmap.draw(&second, grid, &mut scene)?;
    let path = out_dir.join("heatmap_update.svg");
    std::fs::write(&path, to_svg(&scene, output.root, heatmap.options())?)?;
    tracing::info!(path = %path.display(), mode = ?output.plan.mode, "wrote heatmap");

    Ok(())
}

/// Seven days of four readings, shifted by `offset`.
fn weekly_temperatures(offset: f64) -> Result<SeriesMatrix, heatgrid::HeatmapError> {
    let series = (0..4)
        .map(|slot| {
            (0..7)
                .map(|day| {
                    let phase = (day as f64 + slot as f64 * 1.7 + offset) * 0.9;
                    (phase.sin() * 22.0 + slot as f64 * 2.0).round()
                })
                .collect::<Vec<f64>>()
        })
        .collect();
    SeriesMatrix::new(series)
}

fn to_svg(scene: &Scene, root: NodeId, options: &HeatmapOptions) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    )?;
    writeln!(out, "<defs>")?;
    writeln!(
        out,
        r#"<clipPath id="gridRectMask{}"><rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}"/></clipPath>"#,
        escape(&options.chart_id)
    )?;
    let shadow = &options.drop_shadow;
    writeln!(
        out,
        r#"<filter id="dropShadow"><feDropShadow dx="{}" dy="{}" stdDeviation="{}" flood-color="{}" flood-opacity="{}"/></filter>"#,
        shadow.left,
        shadow.top,
        shadow.blur / 2.0,
        shadow.color,
        shadow.opacity
    )?;
    writeln!(out, "</defs>")?;
    write_node(&mut out, scene, root, 0)?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn write_node(out: &mut String, scene: &Scene, id: NodeId, depth: usize) -> std::fmt::Result {
    let Some(node) = scene.node(id) else {
        return Ok(());
    };
    let indent = "  ".repeat(depth);

    match &node.kind {
        NodeKind::Group => {
            write!(out, "{indent}<g")?;
            write_attributes(out, node)?;
            if node.shadow.is_some() {
                write!(out, r#" filter="url(#dropShadow)""#)?;
            }
            writeln!(out, ">")?;
            for &child in scene.children(id) {
                write_node(out, scene, child, depth + 1)?;
            }
            writeln!(out, "{indent}</g>")
        }
        NodeKind::Rect { rect, radius } => {
            write!(
                out,
                r#"{indent}<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" ry="{radius}""#,
                rect.x, rect.y, rect.width, rect.height
            )?;
            write_attributes(out, node)?;
            if node.animations.is_empty() {
                return writeln!(out, "/>");
            }
            writeln!(out, ">")?;
            for animation in &node.animations {
                write_animation(out, animation, depth + 1)?;
            }
            writeln!(out, "{indent}</rect>")
        }
        NodeKind::Label(label) => {
            write!(out, "{indent}<text")?;
            write_attributes(out, node)?;
            writeln!(out, ">{}</text>", escape(&label.text))
        }
    }
}

fn write_attributes(out: &mut String, node: &Node) -> std::fmt::Result {
    for (key, value) in &node.attributes {
        // Namespaced keys have no declared prefix in a standalone document.
        let key = key.replace(':', "-");
        write!(out, r#" {}="{}""#, key, escape(&value.to_string()))?;
    }
    Ok(())
}

fn write_animation(out: &mut String, animation: &AnimationIntent, depth: usize) -> std::fmt::Result {
    let indent = "  ".repeat(depth);
    match animation {
        AnimationIntent::Entrance { from, to, duration } => {
            let pairs = [
                ("x", from.x, to.x),
                ("y", from.y, to.y),
                ("width", from.width, to.width),
                ("height", from.height, to.height),
            ];
            for (name, start, end) in pairs {
                writeln!(
                    out,
                    r#"{indent}<animate attributeName="{name}" from="{start}" to="{end}" dur="{duration}ms" fill="freeze"/>"#
                )?;
            }
            Ok(())
        }
        AnimationIntent::ColorTransition { from, to, duration } => writeln!(
            out,
            r#"{indent}<animate attributeName="fill" from="{from}" to="{to}" dur="{duration}ms" fill="freeze"/>"#
        ),
        AnimationIntent::None => Ok(()),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
