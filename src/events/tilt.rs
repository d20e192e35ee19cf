use crate::core::{MotionEngine, TiltSample};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_tilt_motion(document: &web::Document, engine: Rc<RefCell<MotionEngine>>) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let win = window.clone();

    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
            let viewport = dom::viewport_size(&win);
            let sample = TiltSample::from_angles(ev.gamma(), ev.beta());
            let mut eng = engine.borrow_mut();
            // The first reading only calibrates
            let Some(delta) = eng.tilt_delta(sample, viewport) else {
                return;
            };
            super::apply_delta(&doc, &eng, delta, viewport);
        }) as Box<dyn FnMut(_)>);

    _ = window
        .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    closure.forget();
}
