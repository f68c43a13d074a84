//! Conversions from `web-sys` DOM events to [`InputEvent`]s.
//!
//! The DOM reuses one event type for several phases (a `MouseEvent` can be a
//! press, a move or a release), so these are named constructors rather than
//! `From` impls. Listener registration stays with the host page.

use glam::Vec2;
use web_sys::{KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};

use super::event::{InputEvent, Modifiers, MouseButton, Touches};

/// `WheelEvent.deltaMode` value for line-based scrolling.
const DOM_DELTA_LINE: u32 = 1;
/// `WheelEvent.deltaMode` value for page-based scrolling.
const DOM_DELTA_PAGE: u32 = 2;

fn button_from_dom(button: i16) -> Option<MouseButton> {
    match button {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Middle),
        2 => Some(MouseButton::Right),
        _ => None,
    }
}

fn modifiers_of(event: &MouseEvent) -> Modifiers {
    Modifiers {
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
    }
}

/// `mousedown` → [`InputEvent::PointerDown`]. Back/forward buttons yield
/// `None`.
#[must_use]
pub fn pointer_down(event: &MouseEvent) -> Option<InputEvent> {
    let button = button_from_dom(event.button())?;
    Some(InputEvent::PointerDown {
        button,
        x: event.client_x() as f32,
        y: event.client_y() as f32,
        modifiers: modifiers_of(event),
    })
}

/// `mousemove` → [`InputEvent::PointerMove`].
#[must_use]
pub fn pointer_move(event: &MouseEvent) -> InputEvent {
    InputEvent::PointerMove {
        x: event.client_x() as f32,
        y: event.client_y() as f32,
    }
}

/// `wheel` → [`InputEvent::Wheel`], normalised to pixels.
#[must_use]
pub fn wheel(event: &WheelEvent) -> InputEvent {
    let scale = match event.delta_mode() {
        DOM_DELTA_LINE => 16.0,
        DOM_DELTA_PAGE => 800.0,
        _ => 1.0,
    };
    InputEvent::Wheel {
        delta_y: (event.delta_y() * scale) as f32,
    }
}

fn touches_of(event: &TouchEvent) -> Touches {
    let list = event.touches();
    let points: Vec<Vec2> = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| Vec2::new(touch.page_x() as f32, touch.page_y() as f32))
        .collect();
    Touches::from_points(&points)
}

/// `touchstart` → [`InputEvent::TouchStart`].
#[must_use]
pub fn touch_start(event: &TouchEvent) -> InputEvent {
    InputEvent::TouchStart {
        touches: touches_of(event),
    }
}

/// `touchmove` → [`InputEvent::TouchMove`].
#[must_use]
pub fn touch_move(event: &TouchEvent) -> InputEvent {
    InputEvent::TouchMove {
        touches: touches_of(event),
    }
}

/// `touchend` / `touchcancel` → [`InputEvent::TouchEnd`].
#[must_use]
pub fn touch_end(event: &TouchEvent) -> InputEvent {
    InputEvent::TouchEnd {
        touches: touches_of(event),
    }
}

/// `keydown` → key string for
/// [`OrbitController::handle_key_down`](crate::OrbitController::handle_key_down).
#[must_use]
pub fn key_code(event: &KeyboardEvent) -> String {
    event.code()
}
