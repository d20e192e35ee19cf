use crate::core::constants::LAYER_SELECTOR;
use crate::core::{LayerTransform, Role};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

/// Current CSS viewport size. Read per event so resizes need no listener.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn has_fine_pointer(window: &web::Window) -> bool {
    window
        .match_media("(pointer: fine)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[inline]
pub fn body_attribute(document: &web::Document, name: &str) -> Option<String> {
    document.body().and_then(|b| b.get_attribute(name))
}

/// Every parallax element on the page with its role.
pub fn tracked_layers(document: &web::Document) -> Vec<(web::HtmlElement, Role)> {
    let Ok(list) = document.query_selector_all(LAYER_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .map(|el| {
            let class_name = el.class_name();
            let role = Role::from_classes(class_name.split_whitespace());
            (el, role)
        })
        .collect()
}

#[inline]
pub fn apply_transform(el: &web::HtmlElement, transform: &LayerTransform) {
    _ = el.style().set_property("transform", &transform.css());
}
