use crate::render::Surface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use waves_core::WaveState;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<WaveState>>,
    pub surface: Surface,
    pub surface_dirty: Rc<RefCell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let state = self.state.borrow();
        if std::mem::take(&mut *self.surface_dirty.borrow_mut()) {
            if let Err(e) = self.surface.sync(state.layout(), state.grain()) {
                log::error!("surface sync error: {:?}", e);
            }
        }
        let frame = state.frame();
        drop(state);
        if let Err(e) = self.surface.draw(&frame) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
