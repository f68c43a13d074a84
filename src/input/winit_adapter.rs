//! Adapter from winit window events to [`InputEvent`]s.

use glam::Vec2;
use winit::event::{
    ElementState, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};
use winit::keyboard::PhysicalKey;

use super::event::{InputEvent, Modifiers, MouseButton, Touches};
use crate::camera::controller::OrbitController;

/// Pixels per wheel "line" when converting line deltas to DOM-style pixels.
const LINE_HEIGHT_PX: f32 = 100.0;

/// Map a winit button to a gesture button. Back, forward and extra buttons
/// have no gesture and yield `None`.
#[must_use]
pub fn button_from_winit(
    button: winit::event::MouseButton,
) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        winit::event::MouseButton::Back
        | winit::event::MouseButton::Forward
        | winit::event::MouseButton::Other(_) => None,
    }
}

/// DOM-style wheel delta: positive when scrolling down, in pixels.
#[must_use]
pub fn wheel_delta_y(delta: &MouseScrollDelta) -> f32 {
    // winit reports scroll-up as positive
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}

impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            ctrl: state.control_key(),
            meta: state.super_key(),
            shift: state.shift_key(),
        }
    }
}

/// Tracks per-finger winit touch events and folds them into touch lists.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: Vec<(u64, Vec2)>,
}

impl TouchTracker {
    /// Apply one finger's phase change and return the matching event.
    pub fn apply(
        &mut self,
        id: u64,
        phase: TouchPhase,
        location: Vec2,
    ) -> InputEvent {
        match phase {
            TouchPhase::Started => {
                self.active.retain(|(existing, _)| *existing != id);
                self.active.push((id, location));
                InputEvent::TouchStart {
                    touches: self.snapshot(),
                }
            }
            TouchPhase::Moved => {
                if let Some(entry) =
                    self.active.iter_mut().find(|(existing, _)| *existing == id)
                {
                    entry.1 = location;
                }
                InputEvent::TouchMove {
                    touches: self.snapshot(),
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active.retain(|(existing, _)| *existing != id);
                InputEvent::TouchEnd {
                    touches: self.snapshot(),
                }
            }
        }
    }

    fn snapshot(&self) -> Touches {
        let points: Vec<Vec2> =
            self.active.iter().map(|(_, point)| *point).collect();
        Touches::from_points(&points)
    }
}

/// Converts winit [`WindowEvent`]s into controller input.
///
/// winit reports cursor position and modifiers separately from button
/// presses, so the adapter remembers both to build complete
/// [`InputEvent::PointerDown`] events.
///
/// ```ignore
/// fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
///     if self.adapter.forward(&event, &mut self.controller) {
///         self.window.request_redraw();
///     }
/// }
/// ```
#[derive(Debug, Default)]
pub struct WinitInputAdapter {
    cursor: Vec2,
    modifiers: Modifiers,
    touches: TouchTracker,
}

impl WinitInputAdapter {
    /// Create an adapter with the cursor at the origin and no modifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a pointer, wheel or touch event. Keyboard events are
    /// handled by [`Self::key_code`].
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let button = button_from_winit(*button)?;
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        button,
                        x: self.cursor.x,
                        y: self.cursor.y,
                        modifiers: self.modifiers,
                    },
                    ElementState::Released => InputEvent::PointerUp,
                })
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
                delta_y: wheel_delta_y(delta),
            }),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = Modifiers::from(modifiers.state());
                None
            }
            WindowEvent::Touch(Touch {
                id,
                phase,
                location,
                ..
            }) => Some(self.touches.apply(
                *id,
                *phase,
                Vec2::new(location.x as f32, location.y as f32),
            )),
            _ => None,
        }
    }

    /// Key string for a key press, in `KeyCode` debug format.
    #[must_use]
    pub fn key_code(event: &WindowEvent) -> Option<String> {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return None;
        };
        if event.state != ElementState::Pressed {
            return None;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        Some(format!("{code:?}"))
    }

    /// Translate and deliver an event. Returns `true` if the controller
    /// consumed it.
    pub fn forward(
        &mut self,
        event: &WindowEvent,
        controller: &mut OrbitController,
    ) -> bool {
        if let Some(key) = Self::key_code(event) {
            return controller.handle_key_down(&key);
        }
        self.translate(event)
            .is_some_and(|input| controller.handle_input(input))
    }
}
