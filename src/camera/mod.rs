//! Camera system for orbit viewing.
//!
//! Provides the camera proxy, spherical coordinate helpers, the orbit
//! controller with damping and limits, and the gesture state machine that
//! turns input events into camera motion.

/// Orbit controller: pending motion, limits and the per-frame update.
pub mod controller;
/// Camera pose, projections and GPU uniform types.
pub mod core;
/// Interaction state machine for pointer, wheel, touch and key input.
pub mod gestures;
/// Spherical coordinates around the +Y axis.
pub mod spherical;

pub use controller::{
    ControlEvent, OrbitController, SavedState, SphericalDelta, Viewport,
};
pub use core::{Camera, CameraUniform, Projection, ProjectionKind};
pub use gestures::InteractionState;
pub use spherical::Spherical;
