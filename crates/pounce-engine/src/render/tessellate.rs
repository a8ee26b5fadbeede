//! CPU tessellation of filled scene geometry into a flat triangle list.
//!
//! Every geometric `DrawCmd` becomes triangles in paint order, so a single
//! draw call preserves the exact layering recorded in the `DrawList`.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::scene::shapes::{EllipseCmd, LineCmd, PolygonCmd};
use crate::scene::{DrawCmd, DrawList};

/// Smallest ring used for an ellipse outline.
const MIN_SEGMENTS: usize = 12;
/// Cap on ellipse ring size regardless of radius.
const MAX_SEGMENTS: usize = 96;
/// Target outline length per segment in logical pixels.
const SEGMENT_LENGTH: f32 = 4.0;

/// Vertex layout (24 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0  (logical px)
///  offset  8  color  [f32; 4]   loc 1  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    fn new(p: Vec2, color: [f32; 4]) -> Self {
        Self { pos: [p.x, p.y], color }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Appends triangles for every geometric command of `draw_list`, in paint order.
///
/// Text commands are skipped; they are drawn by the text renderer.
pub fn tessellate_draw_list(draw_list: &mut DrawList, out: &mut Vec<ShapeVertex>) {
    for item in draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Ellipse(cmd) => tessellate_ellipse(cmd, out),
            DrawCmd::Polygon(cmd) => tessellate_polygon(cmd, out),
            DrawCmd::Line(cmd) => tessellate_line(cmd, out),
            DrawCmd::Text(_) => {}
        }
    }
}

/// Number of outline segments used for an ellipse with the given radii.
pub fn ellipse_segments(radii: Vec2) -> usize {
    let r = radii.x.abs().max(radii.y.abs());
    let n = (r * TAU / SEGMENT_LENGTH).ceil();
    if n.is_finite() {
        (n as usize).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
    } else {
        MIN_SEGMENTS
    }
}

pub fn tessellate_ellipse(cmd: &EllipseCmd, out: &mut Vec<ShapeVertex>) {
    if cmd.radii.x <= 0.0 || cmd.radii.y <= 0.0 || !cmd.center.is_finite() {
        return;
    }

    let color = cmd.color.to_array();
    let n = ellipse_segments(cmd.radii);
    let point = |i: usize| {
        let t = TAU * (i % n) as f32 / n as f32;
        let local = Vec2::new(cmd.radii.x * t.cos(), cmd.radii.y * t.sin());
        cmd.center + local.rotated(cmd.rotation)
    };

    out.reserve(n * 3);
    for i in 0..n {
        out.push(ShapeVertex::new(cmd.center, color));
        out.push(ShapeVertex::new(point(i), color));
        out.push(ShapeVertex::new(point(i + 1), color));
    }
}

/// Fans from the first point; correct for convex polygons.
pub fn tessellate_polygon(cmd: &PolygonCmd, out: &mut Vec<ShapeVertex>) {
    let pts = &cmd.points;
    if pts.len() < 3 {
        return;
    }

    let color = cmd.color.to_array();
    out.reserve((pts.len() - 2) * 3);
    for w in pts[1..].windows(2) {
        out.push(ShapeVertex::new(pts[0], color));
        out.push(ShapeVertex::new(w[0], color));
        out.push(ShapeVertex::new(w[1], color));
    }
}

pub fn tessellate_line(cmd: &LineCmd, out: &mut Vec<ShapeVertex>) {
    let dir = (cmd.to - cmd.from).normalized();
    if cmd.width <= 0.0 || dir == Vec2::zero() {
        return;
    }

    let color = cmd.color.to_array();
    let half = Vec2::new(-dir.y, dir.x) * (cmd.width * 0.5);
    let a = cmd.from + half;
    let b = cmd.to + half;
    let c = cmd.to - half;
    let d = cmd.from - half;

    out.extend_from_slice(&[
        ShapeVertex::new(a, color),
        ShapeVertex::new(b, color),
        ShapeVertex::new(c, color),
        ShapeVertex::new(a, color),
        ShapeVertex::new(c, color),
        ShapeVertex::new(d, color),
    ]);
}
