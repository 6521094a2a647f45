// Host-side tests for canvas sizing and resize handling.

use waves_core::*;

#[test]
fn viewport_1000_sizes_the_canvas() {
    let l = Layout::from_viewport_height(1000.0);
    assert_eq!(l.w, 380);
    assert_eq!(l.h, 350);
    assert_eq!(l.canvas_width(), 380);
    assert_eq!(l.canvas_height(), 700);
    assert!((l.vertical_offset - 175.0).abs() < 1e-6);
    assert!((l.x_noise_scaler - 0.0125 * (300.0 / 380.0)).abs() < 1e-12);
    assert!((l.x_noise_scaler - 0.00987).abs() < 1e-5);
}

#[test]
fn dimensions_are_rounded() {
    // 0.38 * 777 = 295.26, 0.35 * 777 = 271.95
    let l = Layout::from_viewport_height(777.0);
    assert_eq!(l.w, 295);
    assert_eq!(l.h, 272);
}

#[test]
fn degenerate_viewports_clamp_to_one_pixel() {
    for vh in [0.0, -50.0, f64::NAN, f64::NEG_INFINITY, 1.0] {
        let l = Layout::from_viewport_height(vh);
        assert_eq!(l.w, 1, "vh={vh}");
        assert_eq!(l.h, 1, "vh={vh}");
        assert!(l.x_noise_scaler.is_finite());
        assert!(l.vertical_offset.is_finite());
    }
}

#[test]
fn default_pointer_sits_mid_width_below_center() {
    let l = Layout::from_viewport_height(1000.0);
    let p = l.default_pointer();
    assert!((p.x - 190.0).abs() < 1e-4);
    assert!((p.y - (350.0 * 0.83 + 175.0)).abs() < 1e-3);
}

#[test]
fn resize_twice_is_idempotent_but_regenerates_grain() {
    let mut state = WaveState::with_rng_seed(WaveParams::default(), 800.0, 7);
    assert_eq!(state.apply(WaveEvent::Resize { viewport_height: 1000.0 }), Outcome::Resized);
    let first_layout = *state.layout();
    let first_grain = state.grain().clone();

    assert_eq!(state.apply(WaveEvent::Resize { viewport_height: 1000.0 }), Outcome::Resized);
    assert_eq!(*state.layout(), first_layout);
    assert_eq!(state.grain().size(), (380, 700));
    assert_eq!(state.grain().size(), first_grain.size());
    assert_ne!(state.grain().pixels, first_grain.pixels);
}

#[test]
fn resize_resets_pointer_only_in_initial_state() {
    let mut state = WaveState::with_rng_seed(WaveParams::default(), 1000.0, 1);
    state.apply(WaveEvent::Resize { viewport_height: 500.0 });
    assert_eq!(state.pointer(), state.layout().default_pointer());

    state.apply(WaveEvent::PointerMoved { x: 42.0, y: 17.0 });
    state.apply(WaveEvent::Resize { viewport_height: 1200.0 });
    assert_eq!(state.pointer(), glam::Vec2::new(42.0, 17.0));
}
