// Host-side tests for page configuration from <body> data attributes.

use lumen_web::core::config::*;
use lumen_web::core::constants::*;
use lumen_web::core::*;
use std::collections::HashMap;

fn from_pairs(pairs: &[(&str, &str)]) -> PageConfig {
    let attrs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    PageConfig::from_attributes(|name| attrs.get(name).cloned())
}

#[test]
fn no_attributes_gives_defaults() {
    let cfg = from_pairs(&[]);
    assert_eq!(cfg, PageConfig::default());
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.bgm_source, BGM_SOURCE_BASE);
    assert_eq!(cfg.motion.background, BackgroundDirection::Counter);
}

#[test]
fn valid_overrides_are_applied() {
    let cfg = from_pairs(&[
        (ATTR_BACKGROUND, "sympathetic"),
        (ATTR_TILT_MAX, "10"),
        (ATTR_TILT_SMOOTHING, " 0.25 "),
        (ATTR_BGM_VOLUME, "0.6"),
        (ATTR_BGM_FADE_MS, "800"),
        (ATTR_BGM_SRC, "assets/other/theme"),
    ]);
    assert_eq!(cfg.motion.background, BackgroundDirection::Sympathetic);
    assert_eq!(cfg.motion.tilt.max_tilt_deg, 10.0);
    assert_eq!(cfg.motion.tilt.smoothing, 0.25);
    assert_eq!(cfg.fade.max_volume, 0.6);
    assert_eq!(cfg.fade.duration_ms, 800);
    assert_eq!(cfg.fade.period_ms(), 40);
    assert_eq!(cfg.bgm_source, "assets/other/theme");
    assert!(cfg.validate().is_ok());
}

#[test]
fn invalid_overrides_keep_defaults() {
    let cfg = from_pairs(&[
        (ATTR_BACKGROUND, "upside-down"),
        (ATTR_TILT_MAX, "-5"),
        (ATTR_TILT_SMOOTHING, "1.5"),
        (ATTR_BGM_VOLUME, "loud"),
        (ATTR_BGM_FADE_MS, "0"),
        (ATTR_BGM_SRC, "   "),
    ]);
    assert_eq!(cfg, PageConfig::default());
}

#[test]
fn sympathetic_config_reaches_the_engine() {
    let cfg = from_pairs(&[(ATTR_BACKGROUND, "inverted")]);
    let engine = MotionEngine::new(cfg.motion, InputMode::Pointer);
    assert_eq!(engine.speeds().coefficient(Role::Eden), SPEED_EDEN.abs());
    assert_eq!(
        engine.speeds().coefficient(Role::ParticlesFront),
        SPEED_PARTICLES_FRONT
    );
}

#[test]
fn fade_duration_below_step_count_keeps_default() {
    let cfg = from_pairs(&[(ATTR_BGM_FADE_MS, "5")]);
    assert_eq!(cfg.fade.duration_ms, BGM_FADE_MS);
    assert_eq!(cfg.fade.period_ms() * cfg.fade.steps, BGM_FADE_MS);
}
