//! Landing-page effects: pointer/tilt parallax over the decorative layers and
//! a fading background-music toggle.
//!
//! Everything in [`core`] is plain Rust and runs on the host; the browser
//! wiring below only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod page;

#[cfg(target_arch = "wasm32")]
pub use page::{mount, page, Page};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lumen-web starting");
    page::mount_when_ready();
    Ok(())
}
