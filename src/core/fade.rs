use super::constants::{BGM_FADE_MS, BGM_FADE_STEPS, BGM_MAX_VOLUME};
use super::error::{ConfigError, PlaybackError, TimerError};

// Volumes within this distance of a ramp's end are treated as arrived.
const VOLUME_EPSILON: f64 = 1e-9;

/// A looping music track whose volume can be driven.
pub trait Track {
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    /// Start (or resume) playback. Must be called before a fade-in is audible.
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
}

/// A repeating timer source.
pub trait Scheduler {
    type Handle;
    /// Start calling the session's `tick` every `period_ms` milliseconds.
    fn start(&mut self, period_ms: u32) -> Result<Self::Handle, TimerError>;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeConfig {
    pub max_volume: f64,
    pub duration_ms: u32,
    pub steps: u32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            max_volume: BGM_MAX_VOLUME,
            duration_ms: BGM_FADE_MS,
            steps: BGM_FADE_STEPS,
        }
    }
}

impl FadeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_volume > 0.0 && self.max_volume <= 1.0) {
            return Err(ConfigError::InvalidVolume(self.max_volume));
        }
        // each step needs at least 1ms or the ramp outlasts its duration
        if self.steps == 0 || self.duration_ms < self.steps {
            return Err(ConfigError::InvalidFade {
                steps: self.steps,
                duration_ms: self.duration_ms,
            });
        }
        Ok(())
    }

    /// Timer period between volume writes.
    #[inline]
    pub fn period_ms(&self) -> u32 {
        (self.duration_ms / self.steps.max(1)).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    Out,
    In,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    direction: FadeDirection,
    step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    Running,
    Done,
}

/// Volume ramp state machine. Holds no timer; see [`AudioSession`].
#[derive(Debug, Clone)]
pub struct FadeController {
    config: FadeConfig,
    muted: bool,
    fade: Option<Fade>,
}

impl FadeController {
    pub fn new(config: FadeConfig, muted: bool) -> Self {
        Self {
            config,
            muted,
            fade: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[inline]
    pub fn direction(&self) -> Option<FadeDirection> {
        self.fade.map(|f| f.direction)
    }

    /// Replace any ramp in progress with one toward the requested state.
    ///
    /// Fading out walks down from the current volume in `steps` equal steps.
    /// Fading in starts playback first, then climbs by `max_volume / steps`.
    pub fn begin<T: Track>(&mut self, muted: bool, track: &mut T) {
        self.muted = muted;
        let steps = f64::from(self.config.steps.max(1));
        let fade = if muted {
            Fade {
                direction: FadeDirection::Out,
                step: track.volume() / steps,
            }
        } else {
            if let Err(e) = track.play() {
                log::warn!("[audio] {}", e);
            }
            Fade {
                direction: FadeDirection::In,
                step: self.config.max_volume / steps,
            }
        };
        self.fade = Some(fade);
    }

    /// Advance the ramp by one step.
    pub fn step<T: Track>(&mut self, track: &mut T) -> FadeStep {
        let Some(fade) = self.fade else {
            return FadeStep::Done;
        };
        let volume = track.volume();
        match fade.direction {
            FadeDirection::Out => {
                let next = volume - fade.step;
                if next > VOLUME_EPSILON {
                    track.set_volume(next);
                    return FadeStep::Running;
                }
            }
            FadeDirection::In => {
                let next = volume + fade.step;
                if next < self.config.max_volume - VOLUME_EPSILON {
                    track.set_volume(next);
                    return FadeStep::Running;
                }
            }
        }
        self.finish(track);
        FadeStep::Done
    }

    /// Jump straight to the end of the current ramp.
    pub fn finish<T: Track>(&mut self, track: &mut T) {
        match self.fade.take().map(|f| f.direction) {
            Some(FadeDirection::Out) => {
                track.set_volume(0.0);
                track.pause();
            }
            Some(FadeDirection::In) => track.set_volume(self.config.max_volume),
            None => {}
        }
    }
}

/// The page's background-music session: one track, one controller and at
/// most one running fade timer.
pub struct AudioSession<T: Track, S: Scheduler> {
    controller: FadeController,
    track: T,
    scheduler: S,
    timer: Option<S::Handle>,
}

impl<T: Track, S: Scheduler> AudioSession<T, S> {
    pub fn new(config: FadeConfig, muted: bool, track: T, scheduler: S) -> Self {
        Self {
            controller: FadeController::new(config, muted),
            track,
            scheduler,
            timer: None,
        }
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.controller.is_muted()
    }

    #[inline]
    pub fn is_fading(&self) -> bool {
        self.timer.is_some()
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.track.volume()
    }

    #[inline]
    pub fn controller(&self) -> &FadeController {
        &self.controller
    }

    #[inline]
    pub fn track(&self) -> &T {
        &self.track
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Cancel whatever fade is running and start one toward `muted`.
    pub fn set_muted(&mut self, muted: bool) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        log::info!(
            "[audio] fade {} from volume {:.2}",
            if muted { "out" } else { "in" },
            self.track.volume()
        );
        self.controller.begin(muted, &mut self.track);
        match self.scheduler.start(self.controller.config().period_ms()) {
            Ok(handle) => self.timer = Some(handle),
            Err(e) => {
                log::error!("[audio] {}; applying volume immediately", e);
                self.controller.finish(&mut self.track);
            }
        }
    }

    /// Flip the mute state; returns the new state.
    pub fn toggle(&mut self) -> bool {
        let muted = !self.is_muted();
        self.set_muted(muted);
        muted
    }

    /// Timer callback: one volume step, stopping the timer once arrived.
    pub fn tick(&mut self) {
        if self.controller.step(&mut self.track) == FadeStep::Done {
            if let Some(handle) = self.timer.take() {
                self.scheduler.cancel(handle);
            }
        }
    }
}
