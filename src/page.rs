use crate::audio::{self, WebAudioSession};
use crate::core::{InputMode, MotionEngine, MountSlot, PageConfig};
use crate::dom;
use crate::events;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Top-level controller for the page. Owns the motion engine and the music
/// session; the event closures hold clones of the same handles.
#[wasm_bindgen]
#[derive(Clone)]
pub struct Page {
    document: web::Document,
    motion: Rc<RefCell<MotionEngine>>,
    audio: Option<Rc<RefCell<WebAudioSession>>>,
}

#[wasm_bindgen]
impl Page {
    /// Fade the music out (`true`) or in (`false`).
    pub fn set_muted(&self, muted: bool) {
        if let Some(session) = &self.audio {
            session.borrow_mut().set_muted(muted);
            audio::reflect_mute_state(&self.document, muted);
        }
    }

    pub fn toggle_muted(&self) -> bool {
        match &self.audio {
            Some(session) => {
                let muted = session.borrow_mut().toggle();
                audio::reflect_mute_state(&self.document, muted);
                muted
            }
            None => true,
        }
    }

    /// Without a music session the page counts as muted.
    pub fn is_muted(&self) -> bool {
        self.audio
            .as_ref()
            .map(|s| s.borrow().is_muted())
            .unwrap_or(true)
    }

    #[wasm_bindgen(getter)]
    pub fn input_mode(&self) -> String {
        match self.motion.borrow().mode() {
            InputMode::Pointer => "pointer".to_string(),
            InputMode::Tilt => "tilt".to_string(),
        }
    }
}

thread_local! {
    static MOUNTED: MountSlot<Page> = MountSlot::new();
}

/// Attach the effects to the current document. Mounting again returns the
/// page that is already wired.
#[wasm_bindgen]
pub fn mount() -> Result<Page, JsValue> {
    mount_once().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// The mounted page, if any.
#[wasm_bindgen]
pub fn page() -> Option<Page> {
    MOUNTED.with(|slot| slot.get())
}

fn mount_once() -> anyhow::Result<Page> {
    MOUNTED.with(|slot| slot.get_or_try_mount(mount_page))
}

fn mount_logged() {
    if let Err(e) = mount_once() {
        log::error!("[page] effects not mounted: {:#}", e);
    }
}

/// Mount now, or once the DOM has been parsed when the module loads early.
pub(crate) fn mount_when_ready() {
    let Some(document) = dom::window_document() else {
        log::error!("[page] no document, effects disabled");
        return;
    };
    if document.ready_state() != "loading" {
        mount_logged();
        return;
    }
    let on_ready = Closure::wrap(Box::new(mount_logged) as Box<dyn FnMut()>);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("[page] could not wait for DOMContentLoaded");
        return;
    }
    on_ready.forget();
}

fn mount_page() -> anyhow::Result<Page> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let cfg = PageConfig::from_attributes(|name| dom::body_attribute(&document, name));

    let mode = InputMode::detect(dom::has_fine_pointer(&window));
    let motion = Rc::new(RefCell::new(MotionEngine::new(cfg.motion, mode)));
    log::info!(
        "[motion] {:?} mode, {} layers, background {:?}",
        mode,
        dom::tracked_layers(&document).len(),
        cfg.motion.background
    );
    match mode {
        InputMode::Pointer => events::wire_pointer_motion(&document, motion.clone()),
        InputMode::Tilt => events::wire_tilt_motion(&document, motion.clone()),
    }

    let audio = match audio::start_session(&document, &cfg) {
        Ok(session) => {
            audio::wire_mute_toggle(&document, &session);
            Some(session)
        }
        Err(e) => {
            log::error!("[audio] no background music: {:?}", e);
            None
        }
    };

    Ok(Page {
        document,
        motion,
        audio,
    })
}
