//! Per-frame band geometry.
//!
//! `build_frame` turns a snapshot of the wave state into a drawable `Frame`.
//! It never touches a drawing surface; front-ends replay the frame onto a
//! canvas or the CPU raster.

use crate::constants::*;
use crate::layout::Layout;
use crate::noise::NoiseField;
use crate::palette::{Palette, Rgb};
use glam::Vec2;

/// One filled-and-stroked band. `points` is an open path in band space
/// (before the frame's vertical translation).
#[derive(Clone, Debug)]
pub struct BandPath {
    pub color: Rgb,
    pub points: Vec<Vec2>,
}

#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub background: u8,
    pub translate_y: f32,
    pub bands: Vec<BandPath>,
}

/// Everything the frame builder reads, borrowed from the owning state.
#[derive(Clone, Copy, Debug)]
pub struct FrameInputs<'a> {
    pub layout: &'a Layout,
    pub pointer: Vec2,
    pub palette: &'a Palette,
    pub noise: &'a NoiseField,
    pub num_lines: usize,
}

/// Linear remap of `value` from `[start1, stop1]` to `[start2, stop2]`,
/// optionally clamped to the output range (which may be descending).
/// An empty input range maps everything to `start2`.
#[inline]
pub fn map_range(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32, clamp: bool) -> f32 {
    let span = stop1 - start1;
    if span == 0.0 || !span.is_finite() {
        return start2;
    }
    let out = (value - start1) / span * (stop2 - start2) + start2;
    if clamp {
        out.clamp(start2.min(stop2), start2.max(stop2))
    } else {
        out
    }
}

/// Amplitude multiplier from the pointer's horizontal distance to the canvas
/// center: 1 at the center, rising with the cube of the distance to 3 at
/// (and beyond) the edges.
pub fn amp_scaler(pointer_x: f32, layout: &Layout) -> f32 {
    let half = layout.center_x();
    let mut dist = (pointer_x - half).abs() / half;
    dist *= dist * dist;
    if dist.is_nan() {
        return AMP_SCALER_MIN;
    }
    map_range(dist, 0.0, 1.0, AMP_SCALER_MIN, AMP_SCALER_MAX, true)
}

/// Noise z coordinate folding both pointer axes in, so the whole field drifts
/// as the pointer moves.
#[inline]
pub fn pointer_noise_z(pointer: Vec2, layout: &Layout) -> f64 {
    (pointer.x + POINTER_NOISE_OFFSET_X + pointer.y - layout.vertical_offset
        + POINTER_NOISE_OFFSET_Y) as f64
        * POINTER_NOISE_SCALE
}

#[inline]
fn sin_degrees(deg: f32) -> f32 {
    deg.to_radians().sin()
}

/// Vertical displacement weight from the pointer column: large near the
/// pointer, `h / 100` half a canvas away.
#[inline]
fn x_amplitude(x: f32, pointer_x: f32, layout: &Layout, scaler: f32) -> f32 {
    let h = layout.h as f32;
    let theta = map_range(
        (x - pointer_x).abs(),
        0.0,
        layout.w as f32 * 0.5,
        0.0,
        FALLOFF_MAX_DEGREES,
        true,
    );
    map_range(sin_degrees(theta), 0.0, 1.0, h / scaler, h / X_AMP_FAR_DIVISOR, false)
}

/// Secondary weight in `[0.2, 1]` from the pointer's distance to the band.
#[inline]
fn y_amplitude(y0: f32, pointer_y: f32, layout: &Layout) -> f32 {
    let theta = map_range(
        (y0 - (pointer_y - layout.vertical_offset)).abs(),
        0.0,
        layout.h as f32 * 0.5,
        0.0,
        FALLOFF_MAX_DEGREES,
        true,
    );
    map_range(sin_degrees(theta), 0.0, 1.0, Y_AMP_NEAR, Y_AMP_FAR, false)
}

/// Squared noise remapped to `[-0.1, 0.7]`: mostly downward or flat, rarely a
/// strong upward spike.
#[inline]
pub fn shape_noise(n: f64) -> f32 {
    let n = n as f32;
    map_range(n * n, 0.0, 1.0, NOISE_REMAP_MIN, NOISE_REMAP_MAX, false)
}

pub fn build_band(inputs: &FrameInputs<'_>, band: usize, scaler: f32, noise_z: f64) -> BandPath {
    let layout = inputs.layout;
    let h = layout.h as f32;
    let w = layout.w;
    let lines = inputs.num_lines.max(1);
    let y0 = (h / lines as f32) * band as f32;

    let mut points = Vec::with_capacity(w as usize / VERTEX_STEP + 2);
    points.push(Vec2::new(0.0, y0));
    let y_amp = y_amplitude(y0, inputs.pointer.y, layout);
    let noise_x0 = BAND_NOISE_STEP * band as f64;
    for x in (VERTEX_STEP..=w.saturating_sub(VERTEX_STEP as u32) as usize).step_by(VERTEX_STEP) {
        let xf = x as f32;
        let x_amp = x_amplitude(xf, inputs.pointer.x, layout, scaler);
        let n = shape_noise(
            inputs
                .noise
                .sample(noise_x0, x as f64 * layout.x_noise_scaler, noise_z),
        );
        let y = y0 - n * x_amp * y_amp - n * h / BASE_DISPLACEMENT_DIVISOR;
        points.push(Vec2::new(xf, y));
    }
    points.push(Vec2::new(w as f32, y0));

    BandPath {
        color: inputs.palette.color_for(band),
        points,
    }
}

pub fn build_frame(inputs: &FrameInputs<'_>) -> Frame {
    let scaler = amp_scaler(inputs.pointer.x, inputs.layout);
    let noise_z = pointer_noise_z(inputs.pointer, inputs.layout);
    let bands = (0..inputs.num_lines)
        .map(|i| build_band(inputs, i, scaler, noise_z))
        .collect();
    Frame {
        width: inputs.layout.canvas_width(),
        height: inputs.layout.canvas_height(),
        background: BACKGROUND_GRAY,
        translate_y: inputs.layout.vertical_offset,
        bands,
    }
}
