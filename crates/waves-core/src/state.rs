//! The single owner of all mutable wave state, and the event dispatch that
//! mutates it.
//!
//! Front-ends translate host callbacks (resize, pointer move/press/release)
//! into `WaveEvent`s, feed them through `WaveState::apply`, and ask for a
//! fresh `Frame` once per display refresh.

use crate::constants::{INITIAL_SEED, NUM_LINES, TAP_WINDOW};
use crate::grain::GrainOverlay;
use crate::layout::Layout;
use crate::noise::NoiseField;
use crate::palette::Palette;
use crate::wave::{build_frame, Frame, FrameInputs};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct WaveParams {
    pub num_lines: usize,
    pub initial_seed: u32,
    pub palette: Palette,
    pub tap_window: Duration,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            num_lines: NUM_LINES,
            initial_seed: INITIAL_SEED,
            palette: Palette::default(),
            tap_window: TAP_WINDOW,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WaveEvent {
    /// The host viewport changed height (CSS pixels).
    Resize { viewport_height: f64 },
    /// Pointer position in canvas pixels.
    PointerMoved { x: f32, y: f32 },
    PointerPressed { at: Instant },
    PointerReleased { at: Instant },
}

/// What an applied event changed, so hosts know which surfaces to refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    PointerMoved,
    /// Canvas size and grain overlay were recomputed.
    Resized,
    /// Tap: seed advanced and palette reshuffled.
    Reseeded,
}

pub struct WaveState {
    params: WaveParams,
    layout: Layout,
    pointer: Vec2,
    initial_state: bool,
    noise: NoiseField,
    palette: Palette,
    grain: GrainOverlay,
    pressed_at: Option<Instant>,
    rng: StdRng,
}

impl WaveState {
    pub fn new(params: WaveParams, viewport_height: f64) -> Self {
        Self::with_rng(params, viewport_height, StdRng::from_entropy())
    }

    /// Deterministic palette shuffles and grain, for tests and snapshots.
    pub fn with_rng_seed(params: WaveParams, viewport_height: f64, rng_seed: u64) -> Self {
        Self::with_rng(params, viewport_height, StdRng::seed_from_u64(rng_seed))
    }

    fn with_rng(params: WaveParams, viewport_height: f64, mut rng: StdRng) -> Self {
        let layout = Layout::from_viewport_height(viewport_height);
        let grain = GrainOverlay::generate(layout.canvas_width(), layout.canvas_height(), &mut rng);
        let noise = NoiseField::new(params.initial_seed);
        let palette = params.palette.clone();
        log::info!(
            "[waves] setup w={} h={} seed={} lines={}",
            layout.w,
            layout.h,
            noise.seed(),
            params.num_lines
        );
        Self {
            pointer: layout.default_pointer(),
            layout,
            initial_state: true,
            noise,
            palette,
            grain,
            pressed_at: None,
            rng,
            params,
        }
    }

    pub fn apply(&mut self, event: WaveEvent) -> Outcome {
        match event {
            WaveEvent::Resize { viewport_height } => {
                self.resize(viewport_height);
                Outcome::Resized
            }
            WaveEvent::PointerMoved { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    return Outcome::Unchanged;
                }
                if self.initial_state && x != 0.0 {
                    self.initial_state = false;
                }
                if self.initial_state {
                    return Outcome::Unchanged;
                }
                self.pointer = Vec2::new(x, y);
                Outcome::PointerMoved
            }
            WaveEvent::PointerPressed { at } => {
                self.pressed_at = Some(at);
                Outcome::Unchanged
            }
            WaveEvent::PointerReleased { at } => match self.pressed_at.take() {
                Some(pressed) if at >= pressed && at.duration_since(pressed) < self.params.tap_window => {
                    self.reseed();
                    Outcome::Reseeded
                }
                _ => Outcome::Unchanged,
            },
        }
    }

    fn resize(&mut self, viewport_height: f64) {
        self.layout = Layout::from_viewport_height(viewport_height);
        if self.initial_state {
            self.pointer = self.layout.default_pointer();
        }
        self.grain = GrainOverlay::generate(
            self.layout.canvas_width(),
            self.layout.canvas_height(),
            &mut self.rng,
        );
        log::info!(
            "[waves] resize w={} h={} canvas={}x{}",
            self.layout.w,
            self.layout.h,
            self.layout.canvas_width(),
            self.layout.canvas_height()
        );
    }

    fn reseed(&mut self) {
        let seed = self.noise.seed().wrapping_add(1);
        self.noise.reseed(seed);
        self.palette.shuffle(&mut self.rng);
        log::info!("[tap] reseed noise seed={}", seed);
    }

    /// Build the frame for the current snapshot. Pure: calling it twice
    /// without intervening events yields identical geometry.
    pub fn frame(&self) -> Frame {
        build_frame(&FrameInputs {
            layout: &self.layout,
            pointer: self.pointer,
            palette: &self.palette,
            noise: &self.noise,
            num_lines: self.params.num_lines,
        })
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn is_initial(&self) -> bool {
        self.initial_state
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.noise.seed()
    }

    #[inline]
    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn grain(&self) -> &GrainOverlay {
        &self.grain
    }

    #[inline]
    pub fn params(&self) -> &WaveParams {
        &self.params
    }
}
