use super::compose::{compose, LayerTransform};
use super::error::ConfigError;
use super::layer::{BackgroundDirection, Role, SpeedTable};
use super::tilt::{TiltConfig, TiltFilter, TiltSample};
use glam::Vec2;

/// Which input drives the parallax. Chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    Tilt,
}

impl InputMode {
    /// Precise pointers (mouse, trackpad) track the cursor; everything else
    /// falls back to device tilt.
    #[inline]
    pub fn detect(fine_pointer: bool) -> Self {
        if fine_pointer {
            InputMode::Pointer
        } else {
            InputMode::Tilt
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionConfig {
    pub speeds: SpeedTable,
    pub background: BackgroundDirection,
    pub tilt: TiltConfig,
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tilt.validate()
    }
}

#[inline]
pub fn pointer_delta(pointer: Vec2, viewport: Vec2) -> Vec2 {
    pointer - viewport * 0.5
}

/// Turns pointer or tilt input into per-layer transforms.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    mode: InputMode,
    speeds: SpeedTable,
    tilt: TiltFilter,
}

impl MotionEngine {
    pub fn new(config: MotionConfig, mode: InputMode) -> Self {
        Self {
            mode,
            speeds: config.speeds.with_background(config.background),
            tilt: TiltFilter::new(config.tilt),
        }
    }

    #[inline]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[inline]
    pub fn speeds(&self) -> &SpeedTable {
        &self.speeds
    }

    #[inline]
    pub fn tilt(&self) -> &TiltFilter {
        &self.tilt
    }

    /// Transform for a single layer from a raw (unscaled) input delta.
    #[inline]
    pub fn layer_transform(&self, role: Role, delta: Vec2, viewport: Vec2) -> LayerTransform {
        compose(role, self.speeds.movement(role, delta), viewport.x)
    }

    /// Transforms for every layer, in the order given.
    pub fn frame(&self, delta: Vec2, viewport: Vec2, roles: &[Role]) -> Vec<LayerTransform> {
        roles
            .iter()
            .map(|&role| self.layer_transform(role, delta, viewport))
            .collect()
    }

    pub fn pointer_frame(&self, pointer: Vec2, viewport: Vec2, roles: &[Role]) -> Vec<LayerTransform> {
        self.frame(pointer_delta(pointer, viewport), viewport, roles)
    }

    /// Smoothed delta for a tilt reading; `None` for the calibration sample.
    #[inline]
    pub fn tilt_delta(&mut self, sample: TiltSample, viewport: Vec2) -> Option<Vec2> {
        self.tilt.update(sample, viewport)
    }

    pub fn tilt_frame(
        &mut self,
        sample: TiltSample,
        viewport: Vec2,
        roles: &[Role],
    ) -> Option<Vec<LayerTransform>> {
        let delta = self.tilt_delta(sample, viewport)?;
        Some(self.frame(delta, viewport, roles))
    }
}
