use crate::dom;
use crate::input;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use waves_core::{Outcome, WaveEvent, WaveState};
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<WaveState>>,
    // Set when the canvas size or grain changed; consumed by the next frame
    pub surface_dirty: Rc<RefCell<bool>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_resize(&w);
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_orientation_reload();
}

fn dispatch(w: &InputWiring, event: WaveEvent) -> Outcome {
    let outcome = w.state.borrow_mut().apply(event);
    if outcome == Outcome::Resized {
        *w.surface_dirty.borrow_mut() = true;
    }
    outcome
}

fn add_window_listener<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    name: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("resize", move |_ev: web::Event| {
        dispatch(
            &w,
            WaveEvent::Resize {
                viewport_height: dom::viewport_height(),
            },
        );
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("pointermove", move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let Some(pos) = pointer_canvas_px(&ev, &w) else {
            return;
        };
        dispatch(&w, WaveEvent::PointerMoved { x: pos.x, y: pos.y });
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("pointerdown", move |_ev: web::PointerEvent| {
        dispatch(&w, WaveEvent::PointerPressed { at: Instant::now() });
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("pointerup", move |_ev: web::PointerEvent| {
        if dispatch(&w, WaveEvent::PointerReleased { at: Instant::now() }) == Outcome::Reseeded {
            let st = w.state.borrow();
            log::info!("[tap] seed={} palette={:?}", st.seed(), st.palette().colors());
        }
    });
}

// Rotation invalidates the whole layout on mobile; start over.
fn wire_orientation_reload() {
    let Some(window) = web::window() else {
        return;
    };
    if !dom::has_device_orientation(&window) {
        return;
    }
    add_window_listener("orientationchange", move |_ev: web::Event| {
        log::info!("[orientation] reloading");
        dom::reload();
    });
}

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, w: &InputWiring) -> Option<Vec2> {
    let rect = w.canvas.get_bounding_client_rect();
    let (lw, lh) = {
        let st = w.state.borrow();
        let l = st.layout();
        (l.canvas_width(), l.canvas_height())
    };
    input::client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(lw as f32, lh as f32),
    )
}
