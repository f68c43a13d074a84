use std::f32::consts::PI;

use glam::Vec3;

/// Distance kept between the polar angle and the poles.
pub const POLE_EPSILON: f32 = 1.0e-6;

/// A point in spherical coordinates around the +Y axis.
///
/// `phi` is the polar angle measured from +Y, `theta` the azimuth measured
/// from +Z towards +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle in radians, `[0, PI]`.
    pub phi: f32,
    /// Azimuth angle in radians.
    pub theta: f32,
}

impl Default for Spherical {
    fn default() -> Self {
        Self {
            radius: 1.0,
            phi: 0.0,
            theta: 0.0,
        }
    }
}

impl Spherical {
    /// Convert a Cartesian offset. The zero vector maps to radius 0 with
    /// both angles 0.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    /// Convert back to a Cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep `phi` strictly inside the poles so the orbit never degenerates.
    pub fn make_safe(&mut self) {
        self.phi = self.phi.max(POLE_EPSILON).min(PI - POLE_EPSILON);
    }
}
