use crate::constants::{CANVAS_ID, CONTAINER_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Host viewport height in CSS pixels; 0 when unavailable.
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Create the drawing canvas and append it to the `#waves` container.
pub fn attach_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;
    let canvas = create_canvas(document)?;
    canvas.set_id(CANVAS_ID);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Detached canvas, used as the grain source for `drawImage`.
pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Whether the host exposes device orientation events at all.
pub fn has_device_orientation(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &"DeviceOrientationEvent".into()).unwrap_or(false)
}

pub fn reload() {
    if let Some(w) = web::window() {
        _ = w.location().reload();
    }
}
