// eval/frame.rs — Full-frame evaluation with rayon parallelism
//
// Drives a compiled scene over a WxH grid of fragment positions, one
// RGBA color per pixel. Rows are evaluated in parallel; every shade
// call is pure, so there is no shared state to contend on. Fragments
// sample pixel centers (index + 0.5), matching how a rasterizer feeds
// gl_FragCoord.
//
// Per-row luma min/max are folded into a global range so callers can
// normalize or diagnose overshoot without rescanning the buffer.

use crate::scene::{FrameParams, Scene};
use rayon::prelude::*;
use serde::Serialize;

/// Result of shading a scene over a full frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameResult {
    /// Row-major RGBA f32 quads, length = width × height × 4.
    pub pixels: Vec<f32>,
    pub width: u32,
    pub height: u32,
    /// Luma range over the frame, before any clamping.
    pub min_luma: f32,
    pub max_luma: f32,
}

impl FrameResult {
    /// RGBA quad at (x, y). Row-major, y runs top-down.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        let base = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[base],
            self.pixels[base + 1],
            self.pixels[base + 2],
            self.pixels[base + 3],
        ]
    }
}

/// Shade every fragment of a frame.
///
/// Rows are distributed across the rayon pool. The clamp mode in
/// `params` is applied here, at the output boundary — evaluators
/// themselves never clamp.
pub fn render_frame(scene: &Scene, params: &FrameParams) -> FrameResult {
    let w = params.width as usize;
    let h = params.height as usize;

    let rows: Vec<(Vec<f32>, f32, f32)> = (0..h)
        .into_par_iter()
        .map(|y_idx| {
            let fy = y_idx as f32 + 0.5;
            let mut row = Vec::with_capacity(w * 4);
            let mut row_min = f32::MAX;
            let mut row_max = f32::MIN;

            for x_idx in 0..w {
                let fx = x_idx as f32 + 0.5;
                let color = scene.shade([fx, fy], params);
                let luma = color.luma();
                row_min = row_min.min(luma);
                row_max = row_max.max(luma);
                let out = params.clamp.apply(color);
                row.extend_from_slice(&[out.r, out.g, out.b, out.a]);
            }

            (row, row_min, row_max)
        })
        .collect();

    let mut pixels = Vec::with_capacity(w * h * 4);
    let mut min_luma = f32::MAX;
    let mut max_luma = f32::MIN;
    for (row, r_min, r_max) in rows {
        min_luma = min_luma.min(r_min);
        max_luma = max_luma.max(r_max);
        pixels.extend(row);
    }

    FrameResult {
        pixels,
        width: params.width,
        height: params.height,
        min_luma,
        max_luma,
    }
}
