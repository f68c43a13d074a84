use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Limits", inline)]
#[serde(default)]
/// Distance, zoom and angle bounds enforced on every update.
///
/// Unbounded limits are stored as infinities (`inf` / `-inf` in TOML).
pub struct LimitOptions {
    /// Closest orbit radius (perspective cameras).
    pub min_distance: f32,
    /// Farthest orbit radius (perspective cameras).
    pub max_distance: f32,
    /// Smallest zoom factor (orthographic cameras).
    pub min_zoom: f32,
    /// Largest zoom factor (orthographic cameras).
    pub max_zoom: f32,
    /// Lowest polar angle in radians, measured from the up axis.
    pub min_polar_angle: f32,
    /// Highest polar angle in radians, at most PI.
    pub max_polar_angle: f32,
    /// Lowest azimuth angle in radians.
    pub min_azimuth_angle: f32,
    /// Highest azimuth angle in radians.
    pub max_azimuth_angle: f32,
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_zoom: 0.0,
            max_zoom: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f32::NEG_INFINITY,
            max_azimuth_angle: f32::INFINITY,
        }
    }
}

impl LimitOptions {
    /// Clamp an orbit radius. Never panics on inverted bounds.
    #[must_use]
    pub fn clamp_distance(&self, radius: f32) -> f32 {
        radius.max(self.min_distance).min(self.max_distance)
    }

    /// Clamp an orthographic zoom factor.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    /// Clamp a polar angle to the configured range.
    #[must_use]
    pub fn clamp_polar(&self, phi: f32) -> f32 {
        phi.max(self.min_polar_angle).min(self.max_polar_angle)
    }

    /// Clamp an azimuth angle to the configured range.
    #[must_use]
    pub fn clamp_azimuth(&self, theta: f32) -> f32 {
        theta.max(self.min_azimuth_angle).min(self.max_azimuth_angle)
    }
}
