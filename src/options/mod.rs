//! Controller configuration with TOML preset support.
//!
//! All tweakable settings (gesture toggles, speeds, damping, limits, zoom
//! ramp, mouse and key bindings) are consolidated here. Options serialize
//! to/from TOML so hosts can keep per-scene control presets on disk.

mod bindings;
mod controls;
mod limits;
mod zoom_ramp;

use std::path::Path;

pub use bindings::{KeyBindings, MouseBindings, PanDirection};
pub use controls::ControlOptions;
pub use limits::LimitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom_ramp::ZoomRampOptions;

use crate::error::OrbisError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[limits]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct OrbitOptions {
    /// Gesture toggles, speeds, damping and auto-rotation.
    pub controls: ControlOptions,
    /// Distance, zoom and angle bounds.
    pub limits: LimitOptions,
    /// Distance-dependent zoom speed.
    pub zoom_ramp: ZoomRampOptions,
    /// Pointer button assignments.
    #[schemars(skip)]
    pub mouse: MouseBindings,
    /// Arrow-key pan bindings.
    #[schemars(skip)]
    pub keys: KeyBindings,
}

impl OrbitOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(OrbitOptions)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, OrbisError> {
        let mut options: Self = toml::from_str(content)?;
        options.keys.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbisError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("Loaded orbit options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbisError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved orbit options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = OrbitOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = OrbitOptions::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[limits]
min_distance = 16.0
max_distance = 30.0
";
        let opts = OrbitOptions::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.limits.min_distance, 16.0);
        assert_eq!(opts.limits.max_distance, 30.0);
        // Everything else should be default
        assert_eq!(opts.limits.max_zoom, f32::INFINITY);
        assert_eq!(opts.controls.zoom_speed, 1.0);
        assert_eq!(opts.keys.lookup("ArrowLeft"), Some(PanDirection::Left));
    }

    #[test]
    fn loaded_key_bindings_are_searchable() {
        let toml_str = r#"
[keys.bindings]
up = "KeyW"
"#;
        let opts = OrbitOptions::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keys.lookup("KeyW"), Some(PanDirection::Up));
    }

    #[test]
    fn invalid_toml_is_an_options_error() {
        let err = OrbitOptions::from_toml_str("[controls]\nenabled = 3")
            .unwrap_err();
        assert!(matches!(err, OrbisError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("orbis-presets-{}", std::process::id()));
        let mut opts = OrbitOptions::default();
        opts.controls.enable_damping = true;
        opts.save(&dir.join("coasting.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(OrbitOptions::list_presets(&dir), vec!["coasting"]);
        let loaded = OrbitOptions::load(&dir.join("coasting.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_describes_control_fields() {
        let schema = OrbitOptions::json_schema();
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("rotate_speed"));
        assert!(json.contains("damping_factor"));
        assert!(json.contains("Adaptive Zoom"));
    }
}
