use std::f32::consts::PI;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::core::{Camera, Projection};
use super::gestures::{GestureAnchors, InteractionState};
use super::spherical::Spherical;
use crate::options::OrbitOptions;

/// Threshold for squared displacement / rotation metric in change detection.
const CHANGE_EPSILON: f32 = 1.0e-6;

/// Zoom factor applied per wheel step at zoom speed 1.
const ZOOM_BASE: f32 = 0.95;

/// Size of the element receiving input, in the same pixels as the events.
///
/// Both dimensions are at least one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Viewport of the given size. Sizes below one pixel are raised to one
    /// so gesture math never divides by zero.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Notifications queued by the controller for its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A pointer, touch or wheel gesture began.
    Start,
    /// The camera moved, rotated or zoomed visibly.
    Change,
    /// A gesture ended.
    End,
}

/// Pose captured by [`OrbitController::save_state`] and restored by
/// [`OrbitController::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// Orbit target.
    pub target: Vec3,
    /// Camera position.
    pub position: Vec3,
    /// Camera zoom factor.
    pub zoom: f32,
}

/// Rotation not yet applied to the camera, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalDelta {
    /// Pending azimuth change.
    pub theta: f32,
    /// Pending polar change.
    pub phi: f32,
}

/// Orbit camera controller.
///
/// Input handlers (see [`Self::handle_input`]) only accumulate pending
/// rotation, pan and dolly. [`Self::update`] must be called once per frame
/// to fold them into the camera pose.
///
/// ```ignore
/// let camera = Camera::perspective(75.0, aspect, 0.1, 1000.0)
///     .at(Vec3::new(50.0, 30.0, 5.0));
/// let mut controls = OrbitController::new(camera, Viewport::new(w, h));
///
/// // every frame
/// if controls.update() {
///     renderer.render(controls.camera());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OrbitController {
    /// Configuration; may be changed between frames.
    pub options: OrbitOptions,
    /// Point the camera orbits around.
    pub target: Vec3,
    pub(super) camera: Camera,
    pub(super) viewport: Viewport,
    pub(super) state: InteractionState,
    pub(super) anchors: GestureAnchors,
    spherical: Spherical,
    spherical_delta: SphericalDelta,
    scale: f32,
    pan_offset: Vec3,
    zoom_changed: bool,
    ramp_zoom_speed: f32,
    /// Rotates the camera's up axis onto +Y.
    up_to_y: Quat,
    y_to_up: Quat,
    last_position: Vec3,
    last_orientation: Quat,
    saved: SavedState,
    events: Vec<ControlEvent>,
    pub(super) disposed: bool,
}

impl OrbitController {
    /// Create a controller with default options, orbiting the origin.
    #[must_use]
    pub fn new(camera: Camera, viewport: Viewport) -> Self {
        Self::with_options(camera, viewport, OrbitOptions::default())
    }

    /// Create a controller with the given options, orbiting the origin.
    ///
    /// The camera's `up` vector becomes the orbit axis for the lifetime of
    /// the controller.
    #[must_use]
    pub fn with_options(
        camera: Camera,
        viewport: Viewport,
        mut options: OrbitOptions,
    ) -> Self {
        options.keys.rebuild_reverse_map();

        let up_to_y =
            Quat::from_rotation_arc(camera.up.normalize_or(Vec3::Y), Vec3::Y);
        let saved = SavedState {
            target: Vec3::ZERO,
            position: camera.position,
            zoom: camera.zoom,
        };
        let ramp_zoom_speed = options.controls.zoom_speed;

        let mut controller = Self {
            options,
            target: Vec3::ZERO,
            camera,
            viewport,
            state: InteractionState::None,
            anchors: GestureAnchors::default(),
            spherical: Spherical::default(),
            spherical_delta: SphericalDelta::default(),
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            zoom_changed: false,
            ramp_zoom_speed,
            up_to_y,
            y_to_up: up_to_y.inverse(),
            last_position: Vec3::ZERO,
            last_orientation: Quat::IDENTITY,
            saved,
            events: Vec::new(),
            disposed: false,
        };
        let _ = controller.update();
        controller
    }

    /// Orbit around `target` instead of the origin, and remember it as the
    /// reset pose.
    #[must_use]
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self.save_state();
        let _ = self.update();
        self
    }

    // ── Accessors ──

    /// The controlled camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access for hosts that adjust projection parameters. Pose
    /// changes are picked up (and constrained) by the next update.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current input viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Refresh the viewport after the host surface was resized.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect(self.viewport.aspect());
    }

    /// Which gesture is currently active.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Polar angle computed by the last update.
    #[must_use]
    pub fn polar_angle(&self) -> f32 {
        self.spherical.phi
    }

    /// Azimuth angle computed by the last update.
    #[must_use]
    pub fn azimuthal_angle(&self) -> f32 {
        self.spherical.theta
    }

    /// Orbit radius computed by the last update.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.spherical.radius
    }

    /// Rotation waiting to be applied.
    #[must_use]
    pub fn spherical_delta(&self) -> SphericalDelta {
        self.spherical_delta
    }

    /// Target translation waiting to be applied.
    #[must_use]
    pub fn pan_offset(&self) -> Vec3 {
        self.pan_offset
    }

    /// Zoom speed in effect, either fixed or from the distance ramp.
    #[must_use]
    pub fn zoom_speed(&self) -> f32 {
        if self.options.zoom_ramp.enabled {
            self.ramp_zoom_speed
        } else {
            self.options.controls.zoom_speed
        }
    }

    /// Radians added per frame while auto-rotating.
    #[must_use]
    pub fn auto_rotation_angle(&self) -> f32 {
        2.0 * PI / 60.0 / 60.0 * self.options.controls.auto_rotate_speed
    }

    /// Dolly factor of one wheel step.
    #[must_use]
    pub fn zoom_scale(&self) -> f32 {
        ZOOM_BASE.powf(self.zoom_speed())
    }

    /// Whether [`Self::dispose`] was called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Take every queued [`ControlEvent`], oldest first.
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn push_event(&mut self, event: ControlEvent) {
        // consecutive changes carry no extra information
        if event == ControlEvent::Change
            && self.events.last() == Some(&ControlEvent::Change)
        {
            return;
        }
        self.events.push(event);
    }

    // ── Saved pose ──

    /// Remember the current target, position and zoom for [`Self::reset`].
    pub fn save_state(&mut self) {
        self.saved = SavedState {
            target: self.target,
            position: self.camera.position,
            zoom: self.camera.zoom,
        };
    }

    /// The pose [`Self::reset`] returns to.
    #[must_use]
    pub fn saved_state(&self) -> SavedState {
        self.saved
    }

    /// Replace the reset pose, e.g. with one loaded from disk.
    pub fn set_saved_state(&mut self, saved: SavedState) {
        self.saved = saved;
    }

    /// Return to the saved pose and cancel any active gesture.
    pub fn reset(&mut self) {
        self.target = self.saved.target;
        self.camera.position = self.saved.position;
        self.camera.zoom = self.saved.zoom;
        self.camera.mark_projection_changed();
        self.push_event(ControlEvent::Change);

        let _ = self.update();

        self.set_state(InteractionState::None);
        log::debug!("orbit controller reset to {:?}", self.saved);
    }

    /// Detach from input. Every later input event is ignored; `update` keeps
    /// working so pending damping can still settle.
    pub fn dispose(&mut self) {
        self.set_state(InteractionState::None);
        self.disposed = true;
        log::debug!("orbit controller disposed");
    }

    // ── Frame update ──

    /// Apply pending rotation, dolly and pan to the camera.
    ///
    /// Returns `true` when the camera moved, rotated or zoomed enough to be
    /// worth re-rendering. The pose is written either way.
    pub fn update(&mut self) -> bool {
        let offset = self.up_to_y * (self.camera.position - self.target);
        self.spherical = Spherical::from_vec3(offset);

        if self.options.controls.auto_rotate
            && self.state == InteractionState::None
        {
            self.rotate_left(self.auto_rotation_angle());
        }

        self.spherical.theta += self.spherical_delta.theta;
        self.spherical.phi += self.spherical_delta.phi;

        let limits = &self.options.limits;
        self.spherical.theta = limits.clamp_azimuth(self.spherical.theta);
        self.spherical.phi = limits.clamp_polar(self.spherical.phi);
        self.spherical.make_safe();
        self.spherical.radius =
            limits.clamp_distance(self.spherical.radius * self.scale);

        self.target += self.pan_offset;

        let offset = self.y_to_up * self.spherical.to_vec3();
        self.camera.position = self.target + offset;
        self.camera.look_at(self.target);

        if self.options.controls.enable_damping {
            let keep = 1.0 - self.options.controls.damping_factor;
            self.spherical_delta.theta *= keep;
            self.spherical_delta.phi *= keep;
            self.pan_offset *= keep;
        } else {
            self.spherical_delta = SphericalDelta::default();
            self.pan_offset = Vec3::ZERO;
        }

        self.scale = 1.0;

        if self.options.zoom_ramp.enabled {
            self.ramp_zoom_speed =
                self.options.zoom_ramp.speed_at(self.spherical.radius);
        }

        // min(displacement, rotation in radians)^2 > EPS, using the
        // small-angle approximation cos(x/2) = 1 - x^2 / 8
        let moved = self.last_position.distance_squared(self.camera.position)
            > CHANGE_EPSILON;
        // f32 quaternions are only unit length to a few ulps, which is
        // already above the threshold once squared
        let last = self.last_orientation.as_dquat().normalize();
        let current = self.camera.orientation.as_dquat().normalize();
        let turned =
            8.0 * (1.0 - last.dot(current)) > f64::from(CHANGE_EPSILON);

        if self.zoom_changed || moved || turned {
            self.push_event(ControlEvent::Change);
            self.last_position = self.camera.position;
            self.last_orientation = self.camera.orientation;
            self.zoom_changed = false;
            return true;
        }
        false
    }

    // ── Primitive motions ──

    /// Queue an azimuth rotation. Positive angles orbit the camera to the
    /// left around the target.
    pub fn rotate_left(&mut self, angle: f32) {
        self.spherical_delta.theta -= angle;
    }

    /// Queue a polar rotation. Positive angles orbit the camera upward.
    pub fn rotate_up(&mut self, angle: f32) {
        self.spherical_delta.phi -= angle;
    }

    /// Queue a target move of `distance` world units to the camera's left.
    pub fn pan_left(&mut self, distance: f32) {
        self.pan_offset += self.camera.right() * -distance;
    }

    /// Queue a target move of `distance` world units upward: along the
    /// camera's up axis with screen-space panning, otherwise along the
    /// ground plane.
    pub fn pan_up(&mut self, distance: f32) {
        let axis = if self.options.controls.screen_space_panning {
            self.camera.local_up()
        } else {
            self.camera.up.cross(self.camera.right())
        };
        self.pan_offset += axis * distance;
    }

    /// Queue a pan by a screen-space pixel delta (right and down positive).
    ///
    /// For perspective cameras one viewport height corresponds to the
    /// visible height at the target distance, so a dragged point stays
    /// under the cursor.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let height = self.viewport.height();
        match self.camera.projection {
            Projection::Perspective { fovy, .. } => {
                let offset = self.camera.position - self.target;
                // half of the fov is center to top of screen
                let target_distance =
                    offset.length() * (fovy.to_radians() * 0.5).tan();
                // height for both axes so aspect ratio does not distort speed
                self.pan_left(2.0 * delta_x * target_distance / height);
                self.pan_up(2.0 * delta_y * target_distance / height);
            }
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                ..
            } => {
                let zoom = self.camera.zoom;
                self.pan_left(
                    delta_x * (right - left) / zoom / self.viewport.width(),
                );
                self.pan_up(delta_y * (top - bottom) / zoom / height);
            }
            Projection::Custom(_) => {
                log::warn!(
                    "orbit controller: unsupported camera projection, pan \
                     disabled"
                );
                self.options.controls.enable_pan = false;
            }
        }
    }

    /// Dolly toward the target by `dolly_scale` (values below 1 move away).
    /// Orthographic cameras zoom instead.
    pub fn dolly_in(&mut self, dolly_scale: f32) {
        match self.camera.projection {
            Projection::Perspective { .. } => self.scale /= dolly_scale,
            Projection::Orthographic { .. } => {
                self.set_zoom(self.camera.zoom * dolly_scale);
            }
            Projection::Custom(_) => self.disable_zoom(),
        }
    }

    /// Inverse of [`Self::dolly_in`].
    pub fn dolly_out(&mut self, dolly_scale: f32) {
        match self.camera.projection {
            Projection::Perspective { .. } => self.scale *= dolly_scale,
            Projection::Orthographic { .. } => {
                self.set_zoom(self.camera.zoom / dolly_scale);
            }
            Projection::Custom(_) => self.disable_zoom(),
        }
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.camera.zoom = self.options.limits.clamp_zoom(zoom);
        self.camera.mark_projection_changed();
        self.zoom_changed = true;
    }

    pub(super) fn disable_zoom(&mut self) {
        log::warn!(
            "orbit controller: unsupported camera projection, dolly/zoom \
             disabled"
        );
        self.options.controls.enable_zoom = false;
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::input::{InputEvent, Modifiers, MouseButton, Touches};

    fn rig_at(position: Vec3) -> OrbitController {
        let camera = Camera::perspective(60.0, 1.6, 0.1, 1000.0).at(position);
        OrbitController::new(camera, Viewport::new(800.0, 500.0))
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn construction_derives_spherical_state() {
        let controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        assert!(approx(controls.distance(), 10.0));
        assert!(approx(controls.polar_angle(), PI / 2.0));
        assert!(approx(controls.azimuthal_angle(), 0.0));
        assert!(approx(controls.camera().forward().z, -1.0));
    }

    #[test]
    fn update_without_input_is_stable() {
        let mut controls = rig_at(Vec3::new(3.0, 4.0, 5.0));
        let _ = controls.update();
        let first = controls.camera().clone();
        assert!(!controls.update());
        let second = controls.camera();
        assert!((first.position - second.position).length() < 1e-5);
        assert!(first.orientation.dot(second.orientation) > 1.0 - 1e-5);
    }

    #[test]
    fn rotation_reports_change_and_clears_delta() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.rotate_left(0.5);
        assert!(controls.update());
        assert!(approx(controls.azimuthal_angle(), -0.5));
        assert_eq!(controls.spherical_delta(), SphericalDelta::default());
        assert!(approx(controls.distance(), 10.0));
    }

    #[test]
    fn damping_decays_geometrically() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.options.controls.enable_damping = true;
        controls.options.controls.damping_factor = 0.25;
        controls.rotate_left(0.1);

        let mut previous = controls.spherical_delta().theta;
        for _ in 0..20 {
            let _ = controls.update();
            let current = controls.spherical_delta().theta;
            assert!(approx(current / previous, 0.75));
            previous = current;
        }
        assert!(previous != 0.0);
    }

    #[test]
    fn damping_also_decays_pan() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.options.controls.enable_damping = true;
        controls.pan_left(1.0);
        let before = controls.pan_offset().length();
        let _ = controls.update();
        assert!(approx(controls.pan_offset().length(), before * 0.75));
    }

    #[test]
    fn polar_and_distance_limits_hold() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.options.limits.min_polar_angle = 0.5;
        controls.options.limits.max_polar_angle = 2.0;
        controls.options.limits.min_distance = 4.0;
        controls.options.limits.max_distance = 12.0;

        controls.rotate_up(3.0);
        controls.dolly_out(10.0);
        let _ = controls.update();
        assert!(approx(controls.polar_angle(), 0.5));
        assert!(approx(controls.distance(), 12.0));

        controls.rotate_up(-5.0);
        controls.dolly_in(100.0);
        let _ = controls.update();
        assert!(approx(controls.polar_angle(), 2.0));
        assert!(approx(controls.distance(), 4.0));
    }

    #[test]
    fn azimuth_limits_hold() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.options.limits.min_azimuth_angle = -0.25;
        controls.options.limits.max_azimuth_angle = 0.25;
        controls.rotate_left(1.0);
        let _ = controls.update();
        assert!(approx(controls.azimuthal_angle(), -0.25));
    }

    #[test]
    fn poles_are_avoided() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.rotate_up(10.0);
        let _ = controls.update();
        assert!(controls.polar_angle() > 0.0);
        assert!(controls.camera().orientation.is_finite());
    }

    #[test]
    fn invariants_hold_for_random_input() {
        let mut rng = StdRng::seed_from_u64(0x0b17);
        let mut controls = rig_at(Vec3::new(5.0, 5.0, 5.0));
        controls.options.limits.min_distance = 2.0;
        controls.options.limits.max_distance = 20.0;
        controls.options.limits.min_polar_angle = 0.3;
        controls.options.limits.max_polar_angle = 2.0;
        controls.options.controls.enable_damping = rng.random_bool(0.5);

        for _ in 0..500 {
            let event = match rng.random_range(0..6) {
                0 => InputEvent::PointerDown {
                    button: MouseButton::Left,
                    x: rng.random_range(0.0..800.0),
                    y: rng.random_range(0.0..500.0),
                    modifiers: Modifiers {
                        shift: rng.random_bool(0.3),
                        ..Modifiers::NONE
                    },
                },
                1 | 2 => InputEvent::PointerMove {
                    x: rng.random_range(0.0..800.0),
                    y: rng.random_range(0.0..500.0),
                },
                3 => InputEvent::PointerUp,
                4 => InputEvent::Wheel {
                    delta_y: rng.random_range(-200.0..200.0),
                },
                _ => InputEvent::TouchStart {
                    touches: Touches::from_points(&[
                        glam::Vec2::new(rng.random_range(0.0..800.0), 0.0),
                        glam::Vec2::new(0.0, rng.random_range(1.0..500.0)),
                    ]),
                },
            };
            let _ = controls.handle_input(event);
            let _ = controls.update();

            assert!(controls.distance() >= 2.0 && controls.distance() <= 20.0);
            assert!(controls.polar_angle() >= 0.3);
            assert!(controls.polar_angle() <= 2.0);
            assert!(controls.camera().position.is_finite());
        }
    }

    #[test]
    fn auto_rotate_advances_azimuth() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.options.controls.auto_rotate = true;
        let step = controls.auto_rotation_angle();
        assert!(approx(step, 2.0 * PI / 1800.0));

        let _ = controls.update();
        assert!(approx(controls.azimuthal_angle(), -step));
        let _ = controls.update();
        assert!(approx(controls.azimuthal_angle(), -2.0 * step));
    }

    #[test]
    fn orbit_axis_follows_camera_up() {
        let mut camera = Camera::perspective(60.0, 1.0, 0.1, 100.0)
            .at(Vec3::new(10.0, 0.0, 3.0));
        camera.up = Vec3::Z;
        let mut controls =
            OrbitController::new(camera, Viewport::new(500.0, 500.0));
        controls.options.controls.auto_rotate = true;
        controls.options.controls.auto_rotate_speed = 100.0;

        for _ in 0..10 {
            let _ = controls.update();
        }
        let position = controls.camera().position;
        assert!(approx(position.z, 3.0));
        assert!(position.y.abs() > 1.0);
        assert!(approx(position.length(), Vec3::new(10.0, 0.0, 3.0).length()));
    }

    #[test]
    fn pan_scales_with_target_distance() {
        let mut near = rig_at(Vec3::new(0.0, 0.0, 10.0));
        let mut far = rig_at(Vec3::new(0.0, 0.0, 20.0));
        near.pan(100.0, 40.0);
        far.pan(100.0, 40.0);
        let ratio = far.pan_offset().length() / near.pan_offset().length();
        assert!(approx(ratio, 2.0));
    }

    #[test]
    fn pan_moves_target_and_camera_together() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.pan(100.0, 0.0);
        let _ = controls.update();
        // dragging right slides the target to the camera's left
        assert!(controls.target.x < 0.0);
        assert!(approx(controls.camera().position.x, controls.target.x));
        assert!(approx(controls.distance(), 10.0));
    }

    #[test]
    fn ground_plane_pan_keeps_height() {
        let mut controls = rig_at(Vec3::new(0.0, 10.0, 10.0));
        controls.pan(0.0, 50.0);
        assert!(approx(controls.pan_offset().y, 0.0));

        controls.options.controls.screen_space_panning = true;
        let before = controls.pan_offset();
        controls.pan(0.0, 50.0);
        assert!(controls.pan_offset().y > before.y);
    }

    #[test]
    fn orthographic_dolly_clamps_zoom() {
        let camera = Camera::orthographic(-10.0, 10.0, 10.0, -10.0, 0.1, 100.0)
            .at(Vec3::new(0.0, 0.0, 10.0));
        let mut options = OrbitOptions::default();
        options.limits.min_zoom = 0.9;
        options.limits.max_zoom = 1.1;
        let mut controls = OrbitController::with_options(
            camera,
            Viewport::new(800.0, 500.0),
            options,
        );
        let _ = controls.camera_mut().take_projection_changed();

        controls.dolly_in(2.0);
        assert_eq!(controls.camera().zoom, 1.1);
        assert!(controls.update());
        assert!(controls.camera_mut().take_projection_changed());
        assert!(approx(controls.distance(), 10.0));

        controls.dolly_out(10.0);
        assert_eq!(controls.camera().zoom, 0.9);
    }

    #[test]
    fn orthographic_pan_uses_frustum_extent() {
        let camera = Camera::orthographic(-4.0, 4.0, 2.5, -2.5, 0.1, 100.0)
            .at(Vec3::new(0.0, 0.0, 10.0));
        let mut controls =
            OrbitController::new(camera, Viewport::new(800.0, 500.0));
        controls.pan(100.0, 0.0);
        // 100 px of an 800 px wide view spanning 8 units
        assert!(approx(controls.pan_offset().x, -1.0));
    }

    #[test]
    fn custom_projection_disables_pan_and_zoom() {
        let camera = Camera::with_projection(Projection::Custom(Mat4::IDENTITY))
            .at(Vec3::new(0.0, 0.0, 10.0));
        let mut controls =
            OrbitController::new(camera, Viewport::new(800.0, 500.0));

        controls.pan(10.0, 10.0);
        assert!(!controls.options.controls.enable_pan);
        assert_eq!(controls.pan_offset(), Vec3::ZERO);

        controls.dolly_in(2.0);
        assert!(!controls.options.controls.enable_zoom);

        controls.rotate_left(0.3);
        assert!(controls.update());
        assert!(approx(controls.distance(), 10.0));
    }

    #[test]
    fn reset_restores_saved_pose() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.rotate_left(1.0);
        controls.pan_left(3.0);
        let _ = controls.update();
        let _ = controls.drain_events();

        controls.reset();
        assert!((controls.camera().position - Vec3::new(0.0, 0.0, 10.0))
            .length()
            < 1e-4);
        assert_eq!(controls.target, Vec3::ZERO);
        assert_eq!(controls.state(), InteractionState::None);
        assert_eq!(controls.drain_events(), vec![ControlEvent::Change]);
    }

    #[test]
    fn save_state_moves_reset_pose() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0))
            .with_target(Vec3::new(1.0, 0.0, 0.0));
        controls.rotate_up(0.4);
        let _ = controls.update();
        controls.save_state();
        let saved = controls.saved_state();

        controls.rotate_left(1.0);
        let _ = controls.update();
        controls.reset();
        assert!((controls.camera().position - saved.position).length() < 1e-4);
        assert_eq!(controls.target, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn zoom_ramp_tracks_distance() {
        let mut options = OrbitOptions::default();
        options.zoom_ramp.enabled = true;
        options.limits.min_distance = 16.0;
        options.limits.max_distance = 30.0;
        let camera = Camera::perspective(60.0, 1.0, 1.0, 30.0)
            .at(Vec3::new(30.0, 0.0, 0.0));
        let mut controls = OrbitController::with_options(
            camera,
            Viewport::new(800.0, 500.0),
            options,
        );
        assert!(approx(controls.zoom_speed(), 0.8));

        controls.dolly_in(10.0);
        let _ = controls.update();
        assert!(approx(controls.distance(), 16.0));
        assert!(approx(controls.zoom_speed(), 0.1));
    }

    #[test]
    fn change_events_are_coalesced() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        for _ in 0..5 {
            controls.rotate_left(0.1);
            let _ = controls.update();
        }
        assert_eq!(controls.drain_events(), vec![ControlEvent::Change]);
        assert!(controls.drain_events().is_empty());
    }

    #[test]
    fn degenerate_viewport_keeps_pose_finite() {
        let camera = Camera::perspective(60.0, 1.6, 0.1, 1000.0)
            .at(Vec3::new(0.0, 0.0, 10.0));
        let mut controls =
            OrbitController::new(camera, Viewport::new(0.0, 0.0));
        assert_eq!(controls.viewport().width(), 1.0);
        assert_eq!(controls.viewport().height(), 1.0);

        let _ = controls.handle_input(InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 0.0,
            y: 0.0,
            modifiers: Modifiers::NONE,
        });
        let _ = controls
            .handle_input(InputEvent::PointerMove { x: 10.0, y: 0.0 });
        let _ = controls.update();
        assert!(controls.camera().position.is_finite());

        controls.pan(10.0, 10.0);
        let _ = controls.update();
        assert!(controls.camera().position.is_finite());

        controls.resize(0.0, -5.0);
        assert_eq!(controls.viewport().height(), 1.0);
        assert!(controls.viewport().aspect().is_finite());
    }

    #[test]
    fn resize_updates_viewport_and_aspect() {
        let mut controls = rig_at(Vec3::new(0.0, 0.0, 10.0));
        controls.resize(1000.0, 250.0);
        assert_eq!(controls.viewport(), Viewport::new(1000.0, 250.0));
        let Projection::Perspective { aspect, .. } =
            controls.camera().projection
        else {
            panic!("expected perspective projection");
        };
        assert_eq!(aspect, 4.0);
    }
}
