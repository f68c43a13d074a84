use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Gesture enable flags, speeds, damping and auto-rotation.
pub struct ControlOptions {
    /// Master switch. When off, every input event is ignored.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Allow orbiting (primary drag, one-finger touch).
    #[schemars(title = "Rotate")]
    pub enable_rotate: bool,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Allow dollying (wheel, middle drag, pinch).
    #[schemars(title = "Zoom")]
    pub enable_zoom: bool,
    /// Zoom sensitivity exponent; one wheel step scales by `0.95^zoom_speed`.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Allow panning (right drag, modified primary drag, keys, two fingers).
    #[schemars(title = "Pan")]
    pub enable_pan: bool,
    /// Pan sensitivity multiplier for pointer gestures.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Pan along the camera's up axis instead of the ground plane.
    #[schemars(title = "Screen-Space Panning")]
    pub screen_space_panning: bool,
    /// Allow arrow-key panning.
    #[schemars(skip)]
    pub enable_keys: bool,
    /// Pixels moved per arrow key press.
    #[schemars(skip)]
    pub key_pan_speed: f32,
    /// Keep coasting after a gesture ends.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Fraction of the pending delta removed each frame while damping.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Turntable rotation while no gesture is active.
    #[schemars(title = "Auto-Rotate")]
    pub auto_rotate: bool,
    /// Auto-rotation speed; 2.0 is one revolution per 30 s at 60 fps.
    #[schemars(title = "Auto-Rotate Speed", range(min = -10.0, max = 10.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_rotate: true,
            rotate_speed: 1.0,
            enable_zoom: true,
            zoom_speed: 1.0,
            enable_pan: true,
            pan_speed: 1.0,
            screen_space_panning: false,
            enable_keys: true,
            key_pan_speed: 7.0,
            enable_damping: false,
            damping_factor: 0.25,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
        }
    }
}
