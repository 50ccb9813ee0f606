//! Slider wiring: degree values from the range inputs cross the clamp/wrap
//! boundary here and enter the engine as radians.

use crate::dom;
use qubit_core::{phi_from_degrees, theta_from_degrees, QubitState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_angle_sliders(
    document: &web::Document,
    state: &Rc<RefCell<QubitState>>,
    redraw: &Rc<dyn Fn()>,
) -> anyhow::Result<()> {
    {
        let state = state.clone();
        let redraw = redraw.clone();
        wire_slider(document, "theta-slider", move |deg| {
            state.borrow_mut().theta = theta_from_degrees(deg);
            redraw();
        })?;
    }
    {
        let state = state.clone();
        let redraw = redraw.clone();
        wire_slider(document, "phi-slider", move |deg| {
            state.borrow_mut().phi = phi_from_degrees(deg);
            redraw();
        })?;
    }
    Ok(())
}

fn wire_slider(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(f64) + 'static,
) -> anyhow::Result<()> {
    let input = dom::slider(document, element_id)?;
    let input_for_read = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Ok(deg) = input_for_read.value().parse::<f64>() {
            handler(deg);
        }
    }) as Box<dyn FnMut()>);
    input
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    closure.forget();
    Ok(())
}
