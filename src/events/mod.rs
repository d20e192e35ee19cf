pub mod pointer;
pub mod tilt;

pub use pointer::wire_pointer_motion;
pub use tilt::wire_tilt_motion;

use crate::core::MotionEngine;
use crate::dom;
use glam::Vec2;
use web_sys as web;

/// Push one raw input delta through the engine to every tracked layer.
///
/// Layers are queried on every call so elements added after start-up are
/// picked up.
pub(crate) fn apply_delta(
    document: &web::Document,
    engine: &MotionEngine,
    delta: Vec2,
    viewport: Vec2,
) {
    for (el, role) in dom::tracked_layers(document) {
        dom::apply_transform(&el, &engine.layer_transform(role, delta, viewport));
    }
}
