// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit camera controls for glam-based renderers.
//!
//! Orbis keeps a camera circling a target point: drag to orbit, wheel or
//! pinch to dolly, right-drag or arrow keys to pan. Motion can be damped,
//! limited in distance, zoom and angle, and the camera can auto-rotate
//! while idle.
//!
//! # Key entry points
//!
//! - [`OrbitController`] - owns the [`Camera`] and applies pending motion
//!   once per frame in [`OrbitController::update`]
//! - [`InputEvent`] - platform-agnostic input fed to
//!   [`OrbitController::handle_input`]
//! - [`options::OrbitOptions`] - runtime configuration with TOML presets
//!
//! # Integration
//!
//! Handlers never move the camera directly. The host forwards events, calls
//! `update()` every frame, and re-renders when it returns `true`:
//!
//! ```ignore
//! controls.handle_input(event);
//! if controls.update() {
//!     uniform.update_view_proj(controls.camera());
//! }
//! for event in controls.drain_events() {
//!     // Start / Change / End
//! }
//! ```
//!
//! Adapters for winit window events (`viewer` feature) and DOM events
//! (`web` feature) live in [`input`].

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{
    Camera, CameraUniform, ControlEvent, InteractionState, OrbitController,
    Projection, ProjectionKind, SavedState, Spherical, SphericalDelta,
    Viewport,
};
pub use error::OrbisError;
pub use input::{InputEvent, Modifiers, MouseButton, Touches};
pub use options::OrbitOptions;
