// Host-side tests for tilt calibration, normalization and smoothing.

use glam::Vec2;
use lumen_web::core::*;

const PHONE: Vec2 = Vec2::new(400.0, 800.0);

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-3
}

fn sample(gamma: f32, beta: f32) -> TiltSample {
    TiltSample { gamma, beta }
}

#[test]
fn first_event_only_calibrates() {
    let mut engine = MotionEngine::new(MotionConfig::default(), InputMode::Tilt);
    assert!(!engine.tilt().is_calibrated());
    assert_eq!(engine.tilt_frame(sample(10.0, 40.0), PHONE, &Role::ALL), None);
    assert!(engine.tilt().is_calibrated());
    assert_eq!(engine.tilt().smoothed(), Vec2::ZERO);
}

#[test]
fn second_event_is_normalized_scaled_and_smoothed() {
    let mut filter = TiltFilter::new(TiltConfig::default());
    assert_eq!(filter.update(sample(10.0, 40.0), PHONE), None);
    // +10 degrees on both axes is half of the 20 degree range:
    // target = (0.5 * 200, 0.5 * 400), blended by 0.1 from zero
    let out = filter.update(sample(20.0, 50.0), PHONE).unwrap();
    assert!(approx(out, Vec2::new(10.0, 20.0)), "{out:?}");
}

#[test]
fn second_event_reaches_layers_through_speed_table() {
    let mut engine = MotionEngine::new(MotionConfig::default(), InputMode::Tilt);
    let roles = [Role::ParticlesFront, Role::CenterFigure];
    engine.tilt_frame(sample(0.0, 0.0), PHONE, &roles);
    let out = engine.tilt_frame(sample(10.0, 10.0), PHONE, &roles).unwrap();
    let smoothed = engine.tilt().smoothed();
    assert!(approx(out[0].offset_px, smoothed / -15.0));
    assert!(approx(out[1].offset_px, smoothed / -30.0));
    // narrow viewport keeps the narrow centering
    assert_eq!(out[1].base_pct, Some(Vec2::new(-55.0, 0.0)));
}

#[test]
fn deltas_are_clamped_to_max_tilt() {
    let mut filter = TiltFilter::new(TiltConfig::default());
    filter.update(sample(10.0, 40.0), PHONE);
    let out = filter.update(sample(90.0, 40.0), PHONE).unwrap();
    assert!(approx(out, Vec2::new(20.0, 0.0)), "{out:?}");

    let mut filter = TiltFilter::new(TiltConfig::default());
    filter.update(sample(0.0, 0.0), PHONE);
    let out = filter.update(sample(-45.0, -170.0), PHONE).unwrap();
    assert!(approx(out, Vec2::new(-20.0, -40.0)), "{out:?}");
}

#[test]
fn target_spans_half_the_viewport() {
    let filter = TiltFilter::new(TiltConfig::default());
    let t = filter.target(Vec2::ZERO, sample(20.0, -20.0), PHONE);
    assert!(approx(t, Vec2::new(200.0, -400.0)));
}

#[test]
fn halving_max_tilt_doubles_sensitivity() {
    let full = TiltFilter::new(TiltConfig::default());
    let half = TiltFilter::new(TiltConfig {
        max_tilt_deg: TiltConfig::default().max_tilt_deg / 2.0,
        ..TiltConfig::default()
    });
    let s = sample(4.0, -3.0);
    let a = full.target(Vec2::ZERO, s, PHONE);
    let b = half.target(Vec2::ZERO, s, PHONE);
    assert!(approx(b, a * 2.0));
}

#[test]
fn smoothing_converges_monotonically() {
    let mut filter = TiltFilter::new(TiltConfig::default());
    filter.update(sample(0.0, 0.0), PHONE);
    let target = filter.target(Vec2::ZERO, sample(10.0, 10.0), PHONE);
    let mut prev = Vec2::ZERO;
    for _ in 0..200 {
        let out = filter.update(sample(10.0, 10.0), PHONE).unwrap();
        assert!(out.x >= prev.x && out.x <= target.x);
        assert!(out.y >= prev.y && out.y <= target.y);
        prev = out;
    }
    assert!(approx(prev, target));
}

#[test]
fn baseline_is_not_recaptured() {
    let mut filter = TiltFilter::new(TiltConfig::default());
    filter.update(sample(5.0, 5.0), PHONE);
    // returning to the resting pose leaves a zero target
    for _ in 0..3 {
        let out = filter.update(sample(5.0, 5.0), PHONE).unwrap();
        assert_eq!(out, Vec2::ZERO);
    }
}

#[test]
fn missing_angles_read_as_zero() {
    assert_eq!(TiltSample::from_angles(None, None), sample(0.0, 0.0));
    assert_eq!(TiltSample::from_angles(Some(12.5), None), sample(12.5, 0.0));
}

#[test]
fn tilt_config_validation() {
    assert!(TiltConfig::default().validate().is_ok());
    let bad = TiltConfig {
        max_tilt_deg: 0.0,
        ..TiltConfig::default()
    };
    assert_eq!(bad.validate(), Err(ConfigError::InvalidTiltRange(0.0)));
    let bad = TiltConfig {
        smoothing: 1.0,
        ..TiltConfig::default()
    };
    assert_eq!(bad.validate(), Err(ConfigError::InvalidSmoothing(1.0)));
}
