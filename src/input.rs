use glam::Vec2;

/// Map a pointer position in client (CSS) pixels to logical canvas pixels,
/// given the canvas' bounding rect and its logical size.
///
/// Returns `None` when the rect is degenerate (hidden or zero-sized canvas).
#[inline]
pub fn client_to_canvas(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 || !rect_size.is_finite() {
        return None;
    }
    let css = client - rect_origin;
    // scale factor first: exact when the canvas is shown 1:1 or at 2x
    Some(css * (canvas_size / rect_size))
}

/// Backing-store size for a logical canvas size at the given device pixel
/// ratio. Never zero.
#[inline]
pub fn backing_size(logical_w: u32, logical_h: u32, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (logical_w as f64 * dpr).round().max(1.0) as u32;
    let h = (logical_h as f64 * dpr).round().max(1.0) as u32;
    (w, h)
}
