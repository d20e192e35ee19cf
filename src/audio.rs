use crate::core::constants::{BGM_SOURCE_FORMATS, MUTED_CLASS, MUTE_TOGGLE_ID};
use crate::core::{AudioSession, PageConfig, PlaybackError, Scheduler, TimerError, Track};
use crate::dom;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type WebAudioSession = AudioSession<MediaTrack, IntervalScheduler>;

/// Background music backed by a detached `<audio loop>` element.
pub struct MediaTrack {
    el: web::HtmlAudioElement,
}

impl MediaTrack {
    pub fn create(document: &web::Document, source_base: &str) -> anyhow::Result<Self> {
        let el = document
            .create_element("audio")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_loop(true);
        for (ext, mime) in BGM_SOURCE_FORMATS {
            let src = document
                .create_element("source")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlSourceElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            src.set_src(&format!("{}.{}", source_base, ext));
            src.set_type(mime);
            el.append_child(&src)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        Ok(Self { el })
    }
}

impl Track for MediaTrack {
    fn volume(&self) -> f64 {
        self.el.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        // media elements throw outside [0, 1]
        self.el.set_volume(volume.clamp(0.0, 1.0));
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let promise: js_sys::Promise = self
            .el
            .play()
            .map_err(|e| PlaybackError(format!("{:?}", e)))?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] playback blocked: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        _ = self.el.pause();
    }
}

/// `setInterval`-backed fade timer. The callback is built once and reused
/// for every fade.
pub struct IntervalScheduler {
    tick: Closure<dyn FnMut()>,
}

impl Scheduler for IntervalScheduler {
    type Handle = i32;

    fn start(&mut self, period_ms: u32) -> Result<i32, TimerError> {
        let window = web::window().ok_or_else(|| TimerError("no window".to_string()))?;
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.tick.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .map_err(|e| TimerError(format!("{:?}", e)))
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(handle);
        }
    }
}

/// Build the music session, starting muted and silent.
pub fn start_session(
    document: &web::Document,
    cfg: &PageConfig,
) -> anyhow::Result<Rc<RefCell<WebAudioSession>>> {
    let mut track = MediaTrack::create(document, &cfg.bgm_source)?;
    track.set_volume(0.0);
    let fade = cfg.fade;

    let session = Rc::new_cyclic(|weak: &Weak<RefCell<WebAudioSession>>| {
        let weak = weak.clone();
        let tick = Closure::wrap(Box::new(move || {
            if let Some(session) = weak.upgrade() {
                session.borrow_mut().tick();
            }
        }) as Box<dyn FnMut()>);
        RefCell::new(AudioSession::new(fade, true, track, IntervalScheduler { tick }))
    });
    log::info!(
        "[audio] session ready: {} ({}ms fade, {} steps)",
        cfg.bgm_source,
        fade.duration_ms,
        fade.steps
    );
    Ok(session)
}

/// Mirror the mute state on the toggle button, if the page has one.
pub fn reflect_mute_state(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id(MUTE_TOGGLE_ID) {
        _ = el.class_list().toggle_with_force(MUTED_CLASS, muted);
        _ = el.set_attribute("aria-pressed", if muted { "true" } else { "false" });
    }
}

pub fn wire_mute_toggle(document: &web::Document, session: &Rc<RefCell<WebAudioSession>>) {
    let muted_now = session.borrow().is_muted();
    let session = session.clone();
    let doc = document.clone();
    let wired = dom::add_click_listener(document, MUTE_TOGGLE_ID, move || {
        let muted = session.borrow_mut().toggle();
        reflect_mute_state(&doc, muted);
    });
    if wired {
        reflect_mute_state(document, muted_now);
    } else {
        log::info!("[audio] no #{} on this page", MUTE_TOGGLE_ID);
    }
}
