#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use waves_core::{WaveParams, WaveState};

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("waves-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::attach_canvas(&document)?;

    let state = Rc::new(RefCell::new(WaveState::new(
        WaveParams::default(),
        dom::viewport_height(),
    )));
    let mut surface = render::Surface::new(&document, canvas.clone())?;
    {
        let st = state.borrow();
        surface.sync(st.layout(), st.grain())?;
    }
    let surface_dirty = Rc::new(RefCell::new(false));

    events::wire_input_handlers(events::InputWiring {
        canvas,
        state: state.clone(),
        surface_dirty: surface_dirty.clone(),
    });

    let (w, h) = surface.logical_size();
    log::info!("[init] canvas attached {}x{}", w, h);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        state,
        surface,
        surface_dirty,
    })));
    Ok(())
}
