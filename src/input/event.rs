use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into
/// [`OrbitController::handle_input`](crate::OrbitController::handle_input)
/// by whatever layer owns the window or DOM subscriptions. Coordinates are
/// in the same pixel space as the controller's viewport.
///
/// # Example
///
/// ```ignore
/// let consumed = controller.handle_input(InputEvent::PointerMove {
///     x: 100.0,
///     y: 200.0,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown {
        /// Which button went down.
        button: MouseButton,
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels (down is positive).
        y: f32,
        /// Modifier keys held at press time.
        modifiers: Modifiers,
    },
    /// The pointer moved to an absolute position.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// A pointer button was released.
    PointerUp,
    /// Wheel scrolled. Positive `delta_y` scrolls down (zoom out), matching
    /// the DOM `WheelEvent.deltaY` sign.
    Wheel {
        /// Vertical scroll amount.
        delta_y: f32,
    },
    /// One or more fingers touched down; `touches` lists every active one.
    TouchStart {
        /// All fingers currently on the surface.
        touches: Touches,
    },
    /// Active fingers moved.
    TouchMove {
        /// All fingers currently on the surface.
        touches: Touches,
    },
    /// A finger lifted or the touch was cancelled.
    TouchEnd {
        /// Fingers still on the surface.
        touches: Touches,
    },
    /// The platform is about to open a context menu (right click).
    ContextMenu,
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Modifier keys relevant to gesture selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Control key held.
    pub ctrl: bool,
    /// Meta / command / super key held.
    pub meta: bool,
    /// Shift key held.
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
    };

    /// Whether any modifier that turns an orbit drag into a pan is held.
    #[must_use]
    pub fn any(self) -> bool {
        self.ctrl || self.meta || self.shift
    }
}

/// Snapshot of the fingers on a touch surface.
///
/// Only the first two positions matter to the controller; the count is kept
/// exactly so three-finger gestures can be recognised (and ignored).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Touches {
    count: usize,
    points: [Vec2; 2],
}

impl Touches {
    /// Build a snapshot from every active touch position, in contact order.
    #[must_use]
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut first_two = [Vec2::ZERO; 2];
        for (slot, point) in first_two.iter_mut().zip(points) {
            *slot = *point;
        }
        Self {
            count: points.len(),
            points: first_two,
        }
    }

    /// Number of fingers on the surface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no finger is on the surface.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Position of the `index`-th finger (0 or 1), if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Vec2> {
        if index < self.count.min(2) {
            Some(self.points[index])
        } else {
            None
        }
    }

    /// Distance between the first two fingers.
    #[must_use]
    pub fn spread(&self) -> f32 {
        self.points[0].distance(self.points[1])
    }

    /// Midpoint of the first two fingers.
    #[must_use]
    pub fn midpoint(&self) -> Vec2 {
        (self.points[0] + self.points[1]) * 0.5
    }
}
