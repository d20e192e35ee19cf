use super::constants::{TILT_MAX_DEG, TILT_SMOOTHING};
use super::error::ConfigError;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Tilt (degrees from the resting pose) that maps to the viewport edge.
    pub max_tilt_deg: f32,
    /// Blend factor toward each new target, strictly inside (0, 1).
    pub smoothing: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: TILT_MAX_DEG,
            smoothing: TILT_SMOOTHING,
        }
    }
}

impl TiltConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_tilt_deg.is_finite() && self.max_tilt_deg > 0.0) {
            return Err(ConfigError::InvalidTiltRange(self.max_tilt_deg));
        }
        if !(self.smoothing > 0.0 && self.smoothing < 1.0) {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }
        Ok(())
    }
}

/// One `deviceorientation` reading: `gamma` is left/right, `beta` front/back.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TiltSample {
    pub gamma: f32,
    pub beta: f32,
}

impl TiltSample {
    /// Build from the event's optional fields; missing angles read as zero.
    #[inline]
    pub fn from_angles(gamma: Option<f64>, beta: Option<f64>) -> Self {
        Self {
            gamma: gamma.unwrap_or(0.0) as f32,
            beta: beta.unwrap_or(0.0) as f32,
        }
    }

    #[inline]
    fn as_vec(self) -> Vec2 {
        Vec2::new(self.gamma, self.beta)
    }
}

/// Calibrated, low-pass filtered tilt input.
///
/// The first sample becomes the neutral pose and produces no output. Every
/// later sample is turned into a pixel-space target with the same range as a
/// pointer delta, then blended into the running output.
#[derive(Debug, Clone)]
pub struct TiltFilter {
    config: TiltConfig,
    baseline: Option<Vec2>,
    smoothed: Vec2,
}

impl TiltFilter {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            baseline: None,
            smoothed: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn is_calibrated(&self) -> bool {
        self.baseline.is_some()
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Target before smoothing for a sample against a known baseline.
    pub fn target(&self, baseline: Vec2, sample: TiltSample, viewport: Vec2) -> Vec2 {
        let max = Vec2::splat(self.config.max_tilt_deg);
        let normalized = (sample.as_vec() - baseline).clamp(-max, max) / max;
        normalized * (viewport * 0.5)
    }

    /// Feed one reading. Returns the smoothed delta, or `None` while
    /// calibrating.
    pub fn update(&mut self, sample: TiltSample, viewport: Vec2) -> Option<Vec2> {
        let Some(baseline) = self.baseline else {
            self.baseline = Some(sample.as_vec());
            log::info!(
                "[tilt] calibrated gamma={:.1} beta={:.1}",
                sample.gamma,
                sample.beta
            );
            return None;
        };
        let target = self.target(baseline, sample, viewport);
        self.smoothed += (target - self.smoothed) * self.config.smoothing;
        Some(self.smoothed)
    }
}
