use super::layer::Role;
use thiserror::Error;

/// Rejected tuning values. Raised when a config is built or validated, never
/// while handling input events.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("speed table has no coefficient for {0:?}")]
    MissingRole(Role),
    #[error("speed coefficient for {role:?} must be finite and non-zero, got {value}")]
    InvalidCoefficient { role: Role, value: f32 },
    #[error("max tilt must be a positive number of degrees, got {0}")]
    InvalidTiltRange(f32),
    #[error("tilt smoothing must lie strictly between 0 and 1, got {0}")]
    InvalidSmoothing(f32),
    #[error("max volume must lie in (0, 1], got {0}")]
    InvalidVolume(f64),
    #[error("fade needs at least one step and 1ms per step (steps={steps}, duration={duration_ms}ms)")]
    InvalidFade { steps: u32, duration_ms: u32 },
}

/// The track refused to start, e.g. blocked by an autoplay policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("playback blocked: {0}")]
pub struct PlaybackError(pub String);

/// The host could not schedule the fade timer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not schedule fade timer: {0}")]
pub struct TimerError(pub String);
