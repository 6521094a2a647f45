//! Canvas sizing derived from the host viewport.

use crate::constants::{
    DEFAULT_POINTER_X_FRAC, DEFAULT_POINTER_Y_FRAC, HEIGHT_RATIO, MIN_DIMENSION, WIDTH_RATIO,
    X_NOISE_BASE, X_NOISE_REFERENCE_WIDTH,
};
use glam::Vec2;

/// Canvas dimensions and the quantities derived from them.
///
/// `h` is the band area height; the canvas itself is `2h` tall so the waves
/// have headroom above and below the band stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub w: u32,
    pub h: u32,
    pub vertical_offset: f32,
    pub x_noise_scaler: f64,
}

impl Layout {
    /// Size the canvas from the viewport height. Degenerate heights (zero,
    /// negative, NaN) clamp to a 1px canvas.
    pub fn from_viewport_height(viewport_height: f64) -> Self {
        let w = scaled_dimension(viewport_height, WIDTH_RATIO);
        let h = scaled_dimension(viewport_height, HEIGHT_RATIO);
        Self {
            w,
            h,
            vertical_offset: h as f32 * 0.5,
            x_noise_scaler: X_NOISE_BASE * (X_NOISE_REFERENCE_WIDTH / w as f64),
        }
    }

    #[inline]
    pub fn canvas_width(&self) -> u32 {
        self.w
    }

    #[inline]
    pub fn canvas_height(&self) -> u32 {
        self.h * 2
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.w as f32 * 0.5
    }

    /// Pointer position used before the user has moved the pointer.
    pub fn default_pointer(&self) -> Vec2 {
        Vec2::new(
            self.w as f32 * DEFAULT_POINTER_X_FRAC,
            self.h as f32 * DEFAULT_POINTER_Y_FRAC,
        )
    }
}

#[inline]
fn scaled_dimension(viewport_height: f64, ratio: f64) -> u32 {
    let v = (viewport_height * ratio).round();
    if v.is_finite() && v >= MIN_DIMENSION as f64 {
        v.min(u32::MAX as f64) as u32
    } else {
        MIN_DIMENSION
    }
}
