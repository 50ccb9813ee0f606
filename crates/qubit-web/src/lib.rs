#![cfg(target_arch = "wasm32")]

use qubit_core::{QubitState, SceneComposer, VIEW_SIZE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("qubit-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas(&document, "bloch-canvas")?;
    canvas.set_width(VIEW_SIZE as u32);
    canvas.set_height(VIEW_SIZE as u32);
    let ctx = dom::context_2d(&canvas)?;

    // The only shared state: the current angle pair, owned by the input
    // layer and passed by value into the engine on every change.
    let state = Rc::new(RefCell::new(QubitState::default()));
    let composer = SceneComposer::default();

    let redraw: Rc<dyn Fn()> = {
        let state = state.clone();
        let document = document.clone();
        Rc::new(move || {
            let s = *state.borrow();
            render::draw_scene(&ctx, &composer.compose(&s));
            dom::set_text(&document, "state-vector", &s.amplitudes().ket_string());
            dom::set_text(&document, "theta-readout", &format!("{}°", s.theta_degrees()));
            dom::set_text(&document, "phi-readout", &format!("{}°", s.phi_degrees()));
        })
    };

    events::wire_angle_sliders(&document, &state, &redraw)?;
    redraw();

    let s = state.borrow();
    log::info!("[scene] wired; initial θ={:.3} φ={:.3}", s.theta, s.phi);
    Ok(())
}
