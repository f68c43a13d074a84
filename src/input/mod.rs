//! Input vocabulary consumed by the orbit controller, plus adapters from
//! concrete windowing layers.

/// Platform-agnostic input events.
pub mod event;
/// DOM event conversions (requires the `web` feature).
#[cfg(feature = "web")]
pub mod web;
/// winit window event adapter (requires the `viewer` feature).
#[cfg(feature = "viewer")]
pub mod winit_adapter;

pub use event::{InputEvent, Modifiers, MouseButton, Touches};
#[cfg(feature = "viewer")]
pub use winit_adapter::{TouchTracker, WinitInputAdapter};
