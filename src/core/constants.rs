// Tuning constants shared by the motion engine and the background-music fader.

// Speed divisors per layer role (see `layer::Role`)
pub const SPEED_PARTICLES_FRONT: f32 = -15.0; // closest
pub const SPEED_WEAPONS: f32 = -25.0;
pub const SPEED_CENTER_FIGURE: f32 = -30.0; // between weapons and back particles
pub const SPEED_PARTICLES_BACK: f32 = -35.0;
pub const SPEED_CREATION: f32 = -60.0;
pub const SPEED_EDEN: f32 = -60.0;
pub const SPEED_HERO_BACKGROUND: f32 = -50.0; // fallback for unmatched layers

// CSS selector for every element that takes part in the parallax
pub const LAYER_SELECTOR: &str =
    ".parallax-layer, .bg-layer-creation, .bg-layer-eden, .center-image-wrapper";

// Center figure placement
pub const NARROW_BREAKPOINT_PX: f32 = 768.0; // widths <= this use the narrow base
pub const CENTER_BASE_WIDE_PCT: [f32; 2] = [-50.0, -50.0];
pub const CENTER_BASE_NARROW_PCT: [f32; 2] = [-55.0, 0.0];
pub const CENTER_CLAMP_X_PX: f32 = 40.0;
pub const CENTER_CLAMP_Y_PX: f32 = 30.0;

// Device tilt
pub const TILT_MAX_DEG: f32 = 20.0; // halving doubles sensitivity
pub const TILT_SMOOTHING: f32 = 0.1; // per-event blend toward the new target

// Background music
pub const BGM_MAX_VOLUME: f64 = 1.0;
pub const BGM_FADE_MS: u32 = 500;
pub const BGM_FADE_STEPS: u32 = 20; // one volume write every 25ms
pub const BGM_SOURCE_BASE: &str = "assets/lumen_gentium/lumen_gentium";
pub const BGM_SOURCE_FORMATS: [(&str, &str); 3] = [
    ("opus", "audio/ogg; codecs=opus"),
    ("m4a", "audio/mp4"),
    ("mp3", "audio/mpeg"),
];

// Mute toggle button
pub const MUTE_TOGGLE_ID: &str = "mute-toggle";
pub const MUTED_CLASS: &str = "muted";
