// src/config.rs

//! Defines the configuration structures for the `curvepad` editor.
//!
//! This module provides a set of structs that can be deserialized from a
//! JSON configuration file to customize the editor's window, interaction
//! behavior, and colors. Default values are provided for every option
//! (640x480 window, hit radius 8, black/white/red/grey color scheme).

use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::{Color, NamedColor};

/// Global configuration, loaded once on first access.
///
/// Reads `$XDG_CONFIG_HOME/curvepad/config.json` (or the equivalent under
/// `$HOME/.config`) if present, otherwise falls back to the defaults.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

/// Represents the complete configuration for the editor.
///
/// This struct is the root of the configuration and is intended to be
/// deserialized from a configuration file. It groups settings into logical
/// categories.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Window-related settings.
    pub window: WindowConfig,
    /// Interaction and sampling settings.
    pub editor: EditorConfig,
    /// Performance-related settings.
    pub performance: PerformanceConfig,
    /// Color scheme configuration.
    pub colors: ColorScheme,
}

impl Config {
    /// Loads the configuration from the default path, falling back to
    /// `Config::default()` if the file is absent or malformed.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            info!("No config directory available; using default configuration.");
            return Config::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded configuration from {}.", path.display());
                    Config::sanitized(config)
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Config::default()
                }
            },
            Err(_) => {
                info!(
                    "No config file at {}; using default configuration.",
                    path.display()
                );
                Config::default()
            }
        }
    }

    /// Replaces out-of-range values in a parsed configuration with their
    /// defaults, warning about each replacement.
    fn sanitized(mut config: Config) -> Config {
        let step = config.editor.sample_step;
        if !step.is_finite() || step < EditorConfig::MIN_SAMPLE_STEP {
            warn!(
                "Configured sample_step {} is out of range (minimum {}). Using default {}.",
                step,
                EditorConfig::MIN_SAMPLE_STEP,
                EditorConfig::default().sample_step
            );
            config.editor.sample_step = EditorConfig::default().sample_step;
        }
        config
    }

    /// Returns the default config file path, honoring `XDG_CONFIG_HOME`.
    fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join("curvepad").join("config.json"))
    }
}

// --- Window Configuration ---

/// Defines settings for the editor window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Initial window width in pixels.
    pub width_px: u16,
    /// Initial window height in pixels.
    pub height_px: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "curvepad".to_string(),
            width_px: 640,
            height_px: 480,
        }
    }
}

// --- Editor Configuration ---

/// Defines interaction and curve-sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixel radius used both to draw a control point's marker circle and to
    /// decide whether a pointer motion drags it. The boundary is exclusive:
    /// a pointer at exactly this distance does not drag.
    pub hit_radius: u16,
    /// Parameter increment for curve sampling. The default step of 0.0001
    /// yields 10,001 samples, dense enough for direct pixel plotting.
    pub sample_step: f64,
}

impl EditorConfig {
    /// Smallest accepted `sample_step`. Anything below this (including zero,
    /// negative, or non-finite values) would demand more curve samples than
    /// the renderer can usefully plot, so it is replaced by the default at
    /// load time.
    pub const MIN_SAMPLE_STEP: f64 = 1e-6;
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            hit_radius: 8,
            sample_step: 0.0001,
        }
    }
}

// --- Performance Configuration ---

/// Defines performance-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Minimum delay between frames in milliseconds. The main loop sleeps
    /// this long after each cycle, bounding CPU usage of the poll loop.
    pub min_draw_latency_ms: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        PerformanceConfig {
            min_draw_latency_ms: 16, // ~60 fps
        }
    }
}

// --- Color Scheme ---

/// Colors used for the per-frame draw commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Background clear color.
    pub background: Color,
    /// Color of the sampled curve points.
    pub curve: Color,
    /// Color of the guide lines connecting consecutive control points.
    pub guide_line: Color,
    /// Color of the control point marker circles.
    pub marker: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            background: Color::Named(NamedColor::Black),
            curve: Color::Named(NamedColor::White),
            guide_line: Color::Named(NamedColor::Red),
            marker: Color::Named(NamedColor::Grey),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.window.width_px, 640);
        assert_eq!(config.window.height_px, 480);
        assert_eq!(config.editor.hit_radius, 8);
        assert_eq!(config.editor.sample_step, 0.0001);
        assert_eq!(config.colors.marker.to_rgb(), (128, 128, 128));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.editor.hit_radius, config.editor.hit_radius);
        assert_eq!(parsed.window.title, config.window.title);
    }

    #[test]
    fn out_of_range_sample_step_falls_back_to_default() {
        for json in [
            r#"{"editor": {"sample_step": 0}}"#,
            r#"{"editor": {"sample_step": -0.001}}"#,
            r#"{"editor": {"sample_step": 1e-12}}"#,
        ] {
            let parsed: Config = serde_json::from_str(json).unwrap();
            let config = Config::sanitized(parsed);
            assert_eq!(config.editor.sample_step, 0.0001, "input: {}", json);
        }

        // A step within range is kept as-is, and unrelated fields survive.
        let parsed: Config =
            serde_json::from_str(r#"{"editor": {"sample_step": 0.01, "hit_radius": 12}}"#).unwrap();
        let config = Config::sanitized(parsed);
        assert_eq!(config.editor.sample_step, 0.01);
        assert_eq!(config.editor.hit_radius, 12);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let parsed: Config = serde_json::from_str(r#"{"editor": {"hit_radius": 12}}"#).unwrap();
        assert_eq!(parsed.editor.hit_radius, 12);
        assert_eq!(parsed.editor.sample_step, 0.0001);
        assert_eq!(parsed.window.width_px, 640);
    }
}
