//! Interaction state machine: routes input events to rotate, dolly and pan
//! gestures on the [`OrbitController`].

use std::f32::consts::PI;

use glam::Vec2;

use super::controller::{ControlEvent, OrbitController};
use super::core::ProjectionKind;
use crate::input::{InputEvent, Modifiers, MouseButton, Touches};

/// Which gesture is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No gesture; auto-rotation may run.
    #[default]
    None,
    /// Pointer drag orbiting the camera.
    Rotate,
    /// Pointer drag dollying the camera.
    Dolly,
    /// Pointer drag panning the target.
    Pan,
    /// One-finger orbit.
    TouchRotate,
    /// Two-finger pinch and pan.
    TouchDollyPan,
}

/// Positions at which the current gesture's last step ended.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GestureAnchors {
    rotate: Vec2,
    pan: Vec2,
    /// Pointer position for drag dolly; `y` holds the finger spread for
    /// pinch dolly.
    dolly: Vec2,
}

impl OrbitController {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. The host forwards pointer,
    /// wheel, touch and context-menu events; pending rotation, pan and dolly
    /// are applied on the next [`update`](Self::update).
    ///
    /// Returns `true` if the controller consumed the event, meaning the host
    /// should suppress the platform's default handling.
    ///
    /// # Example
    ///
    /// ```ignore
    /// controls.handle_input(InputEvent::PointerMove { x, y });
    /// controls.handle_input(InputEvent::Wheel { delta_y: 100.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if !self.accepts_input() {
            return false;
        }
        match event {
            InputEvent::PointerDown {
                button,
                x,
                y,
                modifiers,
            } => self.pointer_down(button, Vec2::new(x, y), modifiers),
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(Vec2::new(x, y))
            }
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Wheel { delta_y } => self.wheel(delta_y),
            InputEvent::TouchStart { touches } => self.touch_start(touches),
            InputEvent::TouchMove { touches } => self.touch_move(touches),
            InputEvent::TouchEnd { .. } => self.touch_end(),
            InputEvent::ContextMenu => true,
        }
    }

    /// Pan in response to a key press, independent of any active gesture.
    ///
    /// `key` uses the `KeyCode` debug format (`"ArrowUp"`, ...). Returns
    /// `true` if the key is bound and panning is allowed.
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        let controls = &self.options.controls;
        if !self.accepts_input()
            || !controls.enable_keys
            || !controls.enable_pan
        {
            return false;
        }
        let Some(direction) = self.options.keys.lookup(key) else {
            return false;
        };
        let (dx, dy) =
            direction.pixel_delta(self.options.controls.key_pan_speed);
        self.pan(dx, dy);
        true
    }

    fn accepts_input(&self) -> bool {
        !self.disposed && self.options.controls.enabled
    }

    pub(super) fn set_state(&mut self, state: InteractionState) {
        if self.state != state {
            log::debug!("orbit gesture {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    // ── Pointer ──

    fn pointer_down(
        &mut self,
        button: MouseButton,
        at: Vec2,
        modifiers: Modifiers,
    ) -> bool {
        let controls = &self.options.controls;
        let mouse = self.options.mouse;

        let next = if button == mouse.orbit {
            if modifiers.any() {
                if !controls.enable_pan {
                    return false;
                }
                self.anchors.pan = at;
                InteractionState::Pan
            } else {
                if !controls.enable_rotate {
                    return false;
                }
                self.anchors.rotate = at;
                InteractionState::Rotate
            }
        } else if button == mouse.zoom {
            if !controls.enable_zoom {
                return false;
            }
            self.anchors.dolly = at;
            InteractionState::Dolly
        } else if button == mouse.pan {
            if !controls.enable_pan {
                return false;
            }
            self.anchors.pan = at;
            InteractionState::Pan
        } else {
            return false;
        };

        self.set_state(next);
        self.push_event(ControlEvent::Start);
        true
    }

    fn pointer_move(&mut self, at: Vec2) -> bool {
        let controls = &self.options.controls;
        match self.state {
            InteractionState::Rotate if controls.enable_rotate => {
                self.rotate_to(at);
                true
            }
            InteractionState::Dolly if controls.enable_zoom => {
                self.dolly_to(at);
                true
            }
            InteractionState::Pan if controls.enable_pan => {
                self.pan_to(at);
                true
            }
            _ => false,
        }
    }

    fn pointer_up(&mut self) -> bool {
        if self.state == InteractionState::None {
            return false;
        }
        self.push_event(ControlEvent::End);
        self.set_state(InteractionState::None);
        true
    }

    fn wheel(&mut self, delta_y: f32) -> bool {
        let busy = !matches!(
            self.state,
            InteractionState::None | InteractionState::Rotate
        );
        if !self.options.controls.enable_zoom || busy {
            return false;
        }
        if self.camera.kind() == ProjectionKind::Custom {
            self.disable_zoom();
            return false;
        }

        self.push_event(ControlEvent::Start);
        if delta_y < 0.0 {
            self.dolly_out(self.zoom_scale());
        } else if delta_y > 0.0 {
            self.dolly_in(self.zoom_scale());
        }
        self.push_event(ControlEvent::End);
        true
    }

    // ── Touch ──

    fn touch_start(&mut self, touches: Touches) -> bool {
        let controls = &self.options.controls;
        let next = match (touches.get(0), touches.get(1), touches.len()) {
            (Some(finger), _, 1) => {
                if !controls.enable_rotate {
                    return false;
                }
                self.anchors.rotate = finger;
                InteractionState::TouchRotate
            }
            (Some(_), Some(_), 2) => {
                if !controls.enable_zoom && !controls.enable_pan {
                    return false;
                }
                if controls.enable_zoom {
                    self.anchors.dolly = Vec2::new(0.0, touches.spread());
                }
                if controls.enable_pan {
                    self.anchors.pan = touches.midpoint();
                }
                InteractionState::TouchDollyPan
            }
            _ => InteractionState::None,
        };

        self.set_state(next);
        if next == InteractionState::None {
            return false;
        }
        self.push_event(ControlEvent::Start);
        true
    }

    fn touch_move(&mut self, touches: Touches) -> bool {
        let controls = &self.options.controls;
        match (touches.get(0), touches.len()) {
            (Some(finger), 1) => {
                if !controls.enable_rotate
                    || self.state != InteractionState::TouchRotate
                {
                    return false;
                }
                self.rotate_to(finger);
                true
            }
            (Some(_), 2) => {
                if (!controls.enable_zoom && !controls.enable_pan)
                    || self.state != InteractionState::TouchDollyPan
                {
                    return false;
                }
                self.pinch_to(touches);
                true
            }
            _ => {
                self.set_state(InteractionState::None);
                false
            }
        }
    }

    fn touch_end(&mut self) -> bool {
        self.push_event(ControlEvent::End);
        self.set_state(InteractionState::None);
        true
    }

    // ── Gesture steps ──

    /// Orbit by the pointer movement since the last step. Pixels map to
    /// radians through the viewport height on both axes.
    fn rotate_to(&mut self, at: Vec2) {
        let delta =
            (at - self.anchors.rotate) * self.options.controls.rotate_speed;
        let height = self.viewport.height();
        self.rotate_left(2.0 * PI * delta.x / height);
        self.rotate_up(2.0 * PI * delta.y / height);
        self.anchors.rotate = at;
    }

    fn dolly_to(&mut self, at: Vec2) {
        let delta = at - self.anchors.dolly;
        if delta.y > 0.0 {
            self.dolly_in(self.zoom_scale());
        } else if delta.y < 0.0 {
            self.dolly_out(self.zoom_scale());
        }
        self.anchors.dolly = at;
    }

    fn pan_to(&mut self, at: Vec2) {
        let delta = (at - self.anchors.pan) * self.options.controls.pan_speed;
        self.pan(delta.x, delta.y);
        self.anchors.pan = at;
    }

    fn pinch_to(&mut self, touches: Touches) {
        if self.options.controls.enable_zoom {
            let spread = touches.spread();
            let start = self.anchors.dolly.y;
            if start > 0.0 && spread > 0.0 {
                self.dolly_in((spread / start).powf(self.zoom_speed()));
            }
            self.anchors.dolly = Vec2::new(0.0, spread);
        }
        if self.options.controls.enable_pan {
            self.pan_to(touches.midpoint());
        }
    }
}
