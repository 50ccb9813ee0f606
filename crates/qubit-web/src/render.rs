//! Replays a composed [`Scene`] onto the canvas 2d context. Pure playback:
//! all geometry and styling decisions already happened in qubit-core.

use glam::DVec2;
use qubit_core::{Primitive, Scene, Stroke, ARROWHEAD_HALF_WIDTH, ARROWHEAD_LEN, VIEW_SIZE};
use std::f64::consts::TAU;
use web_sys as web;

pub fn draw_scene(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    ctx.clear_rect(0.0, 0.0, VIEW_SIZE, VIEW_SIZE);
    for primitive in &scene.primitives {
        match primitive {
            Primitive::Disc {
                center,
                radius,
                fill,
                stroke,
            } => draw_disc(ctx, *center, *radius, fill, *stroke),
            Primitive::Polyline { points, stroke } => draw_polyline(ctx, points, *stroke),
            Primitive::Line { from, to, stroke } => draw_line(ctx, *from, *to, *stroke),
            Primitive::Label {
                text,
                anchor,
                color,
                font_px,
            } => draw_label(ctx, text, *anchor, color, *font_px),
            Primitive::Arrowhead {
                tip,
                direction,
                color,
            } => draw_arrowhead(ctx, *tip, *direction, color),
        }
    }
}

fn draw_disc(
    ctx: &web::CanvasRenderingContext2d,
    center: DVec2,
    radius: f64,
    fill: &str,
    stroke: Stroke,
) {
    ctx.begin_path();
    let _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
    ctx.set_fill_style_str(fill);
    ctx.fill();
    apply_stroke(ctx, stroke);
    ctx.stroke();
}

fn draw_polyline(ctx: &web::CanvasRenderingContext2d, points: &[DVec2], stroke: Stroke) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    apply_stroke(ctx, stroke);
    ctx.stroke();
}

fn draw_line(ctx: &web::CanvasRenderingContext2d, from: DVec2, to: DVec2, stroke: Stroke) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    apply_stroke(ctx, stroke);
    ctx.stroke();
}

fn draw_label(
    ctx: &web::CanvasRenderingContext2d,
    text: &str,
    anchor: DVec2,
    color: &str,
    font_px: f64,
) {
    ctx.set_fill_style_str(color);
    ctx.set_font(&format!("{font_px}px 'Roboto Mono', monospace"));
    let _ = ctx.fill_text(text, anchor.x, anchor.y);
}

fn draw_arrowhead(ctx: &web::CanvasRenderingContext2d, tip: DVec2, direction: DVec2, color: &str) {
    let base = tip - direction * ARROWHEAD_LEN;
    let perp = DVec2::new(-direction.y, direction.x) * ARROWHEAD_HALF_WIDTH;
    let (a, b) = (base + perp, base - perp);
    ctx.begin_path();
    ctx.move_to(tip.x, tip.y);
    ctx.line_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.close_path();
    ctx.set_fill_style_str(color);
    ctx.fill();
}

fn apply_stroke(ctx: &web::CanvasRenderingContext2d, stroke: Stroke) {
    ctx.set_stroke_style_str(stroke.color);
    ctx.set_line_width(stroke.width);
}
