use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom Ramp", inline)]
#[serde(default)]
/// Distance-dependent zoom speed.
///
/// When enabled, the controller overrides the configured zoom speed after
/// every update: close to the target zooming slows down to `min_speed`, far
/// away it speeds up to `max_speed`.
pub struct ZoomRampOptions {
    /// Replace the fixed zoom speed with the ramp.
    #[schemars(title = "Adaptive Zoom")]
    pub enabled: bool,
    /// Distance at (or below) which `min_speed` applies.
    #[schemars(skip)]
    pub near_distance: f32,
    /// Distance at (or above) which `max_speed` applies.
    #[schemars(skip)]
    pub far_distance: f32,
    /// Zoom speed at `near_distance`.
    #[schemars(title = "Near Speed", range(min = 0.01, max = 4.0), extend("step" = 0.01))]
    pub min_speed: f32,
    /// Zoom speed at `far_distance`.
    #[schemars(title = "Far Speed", range(min = 0.01, max = 4.0), extend("step" = 0.01))]
    pub max_speed: f32,
}

impl Default for ZoomRampOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            near_distance: 16.0,
            far_distance: 30.0,
            min_speed: 0.1,
            max_speed: 0.8,
        }
    }
}

impl ZoomRampOptions {
    /// Zoom speed for a camera `distance` away from the target.
    #[must_use]
    pub fn speed_at(&self, distance: f32) -> f32 {
        let span = self.far_distance - self.near_distance;
        if span <= 0.0 {
            return self.min_speed;
        }
        let t = ((distance - self.near_distance) / span).clamp(0.0, 1.0);
        self.min_speed + t * (self.max_speed - self.min_speed)
    }
}
