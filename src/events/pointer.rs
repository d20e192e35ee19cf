use crate::core::{pointer_delta, MotionEngine};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_motion(document: &web::Document, engine: Rc<RefCell<MotionEngine>>) {
    let doc = document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = dom::viewport_size(&window);
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let delta = pointer_delta(pointer, viewport);
        super::apply_delta(&doc, &engine.borrow(), delta, viewport);
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
