use super::constants::BGM_SOURCE_BASE;
use super::error::ConfigError;
use super::fade::FadeConfig;
use super::layer::BackgroundDirection;
use super::motion::MotionConfig;
use super::tilt::TiltConfig;
use std::str::FromStr;

// `data-*` attribute names read from <body>
pub const ATTR_BACKGROUND: &str = "data-parallax-background";
pub const ATTR_TILT_MAX: &str = "data-tilt-max";
pub const ATTR_TILT_SMOOTHING: &str = "data-tilt-smoothing";
pub const ATTR_BGM_VOLUME: &str = "data-bgm-volume";
pub const ATTR_BGM_FADE_MS: &str = "data-bgm-fade-ms";
pub const ATTR_BGM_SRC: &str = "data-bgm-src";

/// Everything the page needs to build its motion engine and audio session.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub motion: MotionConfig,
    pub fade: FadeConfig,
    /// Track path without extension; one `<source>` is added per format.
    pub bgm_source: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            fade: FadeConfig::default(),
            bgm_source: BGM_SOURCE_BASE.to_string(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motion.validate()?;
        self.fade.validate()
    }

    /// Defaults overridden by whatever attributes `lookup` returns.
    ///
    /// Each override is applied on its own; a value that does not parse or
    /// would make its section invalid is logged and skipped.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = PageConfig::default();

        if let Some(raw) = lookup(ATTR_BACKGROUND) {
            match BackgroundDirection::parse(&raw) {
                Some(dir) => cfg.motion.background = dir,
                None => log::warn!("[config] ignoring {}={:?}", ATTR_BACKGROUND, raw),
            }
        }

        if let Some(v) = parse_attr::<f32>(&lookup, ATTR_TILT_MAX) {
            let mut tilt = cfg.motion.tilt;
            tilt.max_tilt_deg = v;
            apply(&mut cfg.motion.tilt, tilt, TiltConfig::validate, ATTR_TILT_MAX);
        }
        if let Some(v) = parse_attr::<f32>(&lookup, ATTR_TILT_SMOOTHING) {
            let mut tilt = cfg.motion.tilt;
            tilt.smoothing = v;
            apply(&mut cfg.motion.tilt, tilt, TiltConfig::validate, ATTR_TILT_SMOOTHING);
        }
        if let Some(v) = parse_attr::<f64>(&lookup, ATTR_BGM_VOLUME) {
            let fade = FadeConfig {
                max_volume: v,
                ..cfg.fade
            };
            apply(&mut cfg.fade, fade, FadeConfig::validate, ATTR_BGM_VOLUME);
        }
        if let Some(v) = parse_attr::<u32>(&lookup, ATTR_BGM_FADE_MS) {
            let fade = FadeConfig {
                duration_ms: v,
                ..cfg.fade
            };
            apply(&mut cfg.fade, fade, FadeConfig::validate, ATTR_BGM_FADE_MS);
        }
        if let Some(src) = lookup(ATTR_BGM_SRC) {
            let src = src.trim();
            if src.is_empty() {
                log::warn!("[config] ignoring empty {}", ATTR_BGM_SRC);
            } else {
                cfg.bgm_source = src.to_string();
            }
        }
        cfg
    }
}

fn parse_attr<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {}={:?}: not a number", name, raw);
            None
        }
    }
}

fn apply<C>(slot: &mut C, candidate: C, validate: impl Fn(&C) -> Result<(), ConfigError>, name: &str) {
    match validate(&candidate) {
        Ok(()) => *slot = candidate,
        Err(e) => log::warn!("[config] ignoring {}: {}", name, e),
    }
}
