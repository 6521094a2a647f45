use std::time::Duration;

// Shared tuning constants used by both web and native frontends.
// Most of these are aesthetic values picked by eye; keep them named rather
// than folding them into expressions.

// Canvas sizing, as fractions of the viewport height
pub const WIDTH_RATIO: f64 = 0.38;
pub const HEIGHT_RATIO: f64 = 0.35; // canvas height is twice this
pub const MIN_DIMENSION: u32 = 1; // keeps degenerate viewports drawable

// Synthetic pointer used until the first real pointer observation
pub const DEFAULT_POINTER_X_FRAC: f32 = 0.5;
pub const DEFAULT_POINTER_Y_FRAC: f32 = 0.83 + 0.5;

// Bands
pub const NUM_LINES: usize = 20;
pub const VERTEX_STEP: usize = 2; // horizontal distance between path vertices (px)
pub const BACKGROUND_GRAY: u8 = 10;

// Amplitude shaping
pub const AMP_SCALER_MIN: f32 = 1.0; // pointer at horizontal center
pub const AMP_SCALER_MAX: f32 = 3.0; // pointer at (or beyond) the edges
pub const FALLOFF_MAX_DEGREES: f32 = 90.0;
pub const X_AMP_FAR_DIVISOR: f32 = 100.0; // h / 100 far from the pointer column
pub const Y_AMP_NEAR: f32 = 1.0;
pub const Y_AMP_FAR: f32 = 0.2;
pub const BASE_DISPLACEMENT_DIVISOR: f32 = 15.0; // the n * h / 15 term

// Noise sampling
pub const INITIAL_SEED: u32 = 40; // other pleasant values: 4, 16
pub const BAND_NOISE_STEP: f64 = 0.6925;
pub const X_NOISE_BASE: f64 = 0.0125;
pub const X_NOISE_REFERENCE_WIDTH: f64 = 300.0; // keeps visual frequency constant across widths
pub const POINTER_NOISE_OFFSET_X: f32 = 570.0;
pub const POINTER_NOISE_OFFSET_Y: f32 = 158.0;
pub const POINTER_NOISE_SCALE: f64 = 0.001;
pub const NOISE_REMAP_MIN: f32 = -0.1;
pub const NOISE_REMAP_MAX: f32 = 0.7;

// Grain overlay
pub const GRAIN_ALPHA: u8 = 100;

// Interaction
pub const TAP_WINDOW: Duration = Duration::from_millis(200);

// Band colors, cycled by band index
pub const DEFAULT_PALETTE: [[u8; 3]; 7] = [
    [0xDE, 0x18, 0x3C], // red
    [0xF2, 0xB5, 0x41], // saffron
    [0x0C, 0x79, 0xBB], // blue
    [0x2D, 0xAC, 0xB2], // teal
    [0xE4, 0x64, 0x24], // orange
    [0xEC, 0xAC, 0xBE], // pink
    [0x19, 0x44, 0x6B], // navy
];
