//! Generators for simple 2D shapes.
//!
//! These produce non-indexed triangle-list vertex streams with one rgba
//! color per vertex, split into separate position and color buffers the way
//! simple two-buffer pipelines bind them.

use std::f32::consts::PI;

/// A 2D triangle-list shape with per-vertex colors.
///
/// Positions are `x y` pairs, colors are `r g b a` quadruples; both streams
/// have one entry per vertex and are drawn non-indexed.
#[derive(Debug, Clone)]
pub struct Shape2d {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl Shape2d {
    /// Get the flat positions (2 floats per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Get the flat colors (4 floats per vertex).
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 2
    }

    /// Position data as bytes, ready for a vertex buffer write.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Color data as bytes, ready for a vertex buffer write.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}

/// Generate an axis-aligned rectangle from two opposite corners.
///
/// Emits 6 vertices (two triangles), each carrying `color`.
pub fn generate_rectangle(x0: f32, y0: f32, x1: f32, y1: f32, color: [f32; 4]) -> Shape2d {
    #[rustfmt::skip]
    let positions = vec![
        x0, y0,
        x1, y0,
        x0, y1,
        x1, y1,
        x1, y0,
        x0, y1,
    ];
    let mut colors = Vec::with_capacity(6 * 4);
    for _ in 0..6 {
        colors.extend_from_slice(&color);
    }
    Shape2d { positions, colors }
}

/// Generate a filled circle around `(cx, cy)` as a triangle list.
///
/// The stream opens with the center point, then walks the rim emitting
/// `rim, center, rim` per segment and drops the trailing rim vertex,
/// yielding `3 * segments + 3` vertices: one degenerate leading triangle
/// followed by a fan of `segments` triangles. Every vertex carries `color`.
pub fn generate_circle(radius: f32, cx: f32, cy: f32, segments: u32, color: [f32; 4]) -> Shape2d {
    let mut positions = vec![cx, cy];
    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * 2.0 * PI;
        let rx = radius * angle.cos() + cx;
        let ry = radius * angle.sin() + cy;
        positions.extend_from_slice(&[rx, ry, cx, cy, rx, ry]);
    }
    positions.truncate(positions.len() - 2);

    let mut colors = color.to_vec();
    for _ in 0..=segments {
        for _ in 0..3 {
            colors.extend_from_slice(&color);
        }
    }
    colors.truncate(colors.len() - 4);

    Shape2d { positions, colors }
}
