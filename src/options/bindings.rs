use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

/// Direction an arrow key pans the view.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keys.bindings]
/// up = "ArrowUp"
/// left = "KeyA"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanDirection {
    /// Pan the view left.
    Left,
    /// Pan the view up.
    Up,
    /// Pan the view right.
    Right,
    /// Pan the view down.
    Bottom,
}

impl PanDirection {
    /// Screen-space pixel delta for one key press of `step` pixels.
    ///
    /// Panning "left" moves the target right on screen, hence the
    /// positive x for `Left`.
    #[must_use]
    pub fn pixel_delta(self, step: f32) -> (f32, f32) {
        match self {
            Self::Up => (0.0, step),
            Self::Bottom => (0.0, -step),
            Self::Left => (step, 0.0),
            Self::Right => (-step, 0.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard bindings mapping pan directions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format, which is
/// also the DOM `KeyboardEvent.code` spelling: `"ArrowUp"`, `"KeyW"`, ...
pub struct KeyBindings {
    /// Maps direction → key string (e.g. `Up` → `"ArrowUp"`).
    pub bindings: HashMap<PanDirection, String>,
    /// Reverse lookup cache (key string → direction). Rebuilt on load.
    #[serde(skip)]
    key_to_direction: HashMap<String, PanDirection>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            (PanDirection::Left, "ArrowLeft".into()),
            (PanDirection::Up, "ArrowUp".into()),
            (PanDirection::Right, "ArrowRight".into()),
            (PanDirection::Bottom, "ArrowDown".into()),
        ]);

        let mut keys = Self {
            bindings,
            key_to_direction: HashMap::new(),
        };
        keys.rebuild_reverse_map();
        keys
    }
}

impl KeyBindings {
    /// Rebuild the reverse lookup map (key string → direction).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_direction.clear();
        for (direction, key) in &self.bindings {
            let _ = self.key_to_direction.insert(key.clone(), *direction);
        }
    }

    /// Rebind a direction to a new key.
    pub fn bind(&mut self, direction: PanDirection, key: impl Into<String>) {
        let _ = self.bindings.insert(direction, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the pan direction for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<PanDirection> {
        self.key_to_direction.get(key).copied()
    }
}

/// Which physical button drives each pointer gesture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MouseBindings {
    /// Button that orbits (or pans, with ctrl/meta/shift held).
    pub orbit: MouseButton,
    /// Button that dollies.
    pub zoom: MouseButton,
    /// Button that pans.
    pub pan: MouseButton,
}

impl Default for MouseBindings {
    fn default() -> Self {
        Self {
            orbit: MouseButton::Left,
            zoom: MouseButton::Middle,
            pan: MouseButton::Right,
        }
    }
}
