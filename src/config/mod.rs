//! Configuration file support for pillsplitter.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/pillsplitter/config.toml`. Settings include pill defaults,
//! split tolerances, click/drag thresholds and UI preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{GestureConfig, PillConfig, SplitConfig, UiConfig};

use crate::draw::{Color, SplitSettings};
use crate::input::{ColorPicker, GestureSettings, InputSettings};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [pill]
/// min_size = 40.0
/// corner_radius = 20.0
/// palette = ["coral", "#4ECDC4", [69, 183, 209]]
///
/// [split]
/// min_part_size = 20.0
/// clearance = 5.0
///
/// [gesture]
/// drag_threshold = 5.0
/// click_time_ms = 200
/// click_distance = 10.0
///
/// [ui]
/// show_crosshair = true
/// draft_opacity = 0.7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// New pill defaults (minimum size, corner radius, palette)
    #[serde(default)]
    pub pill: PillConfig,

    /// Split tolerances
    #[serde(default)]
    pub split: SplitConfig,

    /// Click versus drag thresholds
    #[serde(default)]
    pub gesture: GestureConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged. The minimum part size is clamped after the minimum pill size and
    /// never exceeds it.
    ///
    /// Validated ranges:
    /// - `pill.min_size`: 1.0 - 1000.0
    /// - `pill.corner_radius`: 0.0 - 500.0
    /// - `split.min_part_size`: 1.0 - `pill.min_size`
    /// - `split.clearance`: 0.0 - 100.0
    /// - `gesture.drag_threshold`: 0.0 - 100.0
    /// - `gesture.click_time_ms`: 1 - 5000
    /// - `gesture.click_distance`: 0.0 - 100.0
    /// - `ui.draft_opacity`: 0.0 - 1.0
    pub(crate) fn validate_and_clamp(&mut self) {
        clamp_f64("pill.min_size", &mut self.pill.min_size, 1.0, 1000.0);
        clamp_f64("pill.corner_radius", &mut self.pill.corner_radius, 0.0, 500.0);
        let max_part = self.pill.min_size;
        clamp_f64("split.min_part_size", &mut self.split.min_part_size, 1.0, max_part);
        clamp_f64("split.clearance", &mut self.split.clearance, 0.0, 100.0);
        clamp_f64("gesture.drag_threshold", &mut self.gesture.drag_threshold, 0.0, 100.0);
        clamp_f64("gesture.click_distance", &mut self.gesture.click_distance, 0.0, 100.0);
        clamp_f64("ui.draft_opacity", &mut self.ui.draft_opacity, 0.0, 1.0);

        if !(1..=5000).contains(&self.gesture.click_time_ms) {
            warn!(
                "Invalid gesture.click_time_ms {}, clamping to 1-5000 range",
                self.gesture.click_time_ms
            );
            self.gesture.click_time_ms = self.gesture.click_time_ms.clamp(1, 5000);
        }

        if self.pill.palette.is_empty() {
            warn!("Empty pill.palette, falling back to the default palette");
            self.pill.palette = types::default_palette();
        }

        for spec in &self.pill.palette {
            if !spec.is_valid() {
                warn!("Unrecognized palette entry {:?} will use the fallback color", spec);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pillsplitter/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pillsplitter");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Serializes the configuration to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Resolves the configured palette into colors.
    pub fn palette(&self) -> Vec<Color> {
        self.pill.palette.iter().map(ColorSpec::to_color).collect()
    }

    /// Click, drag and draw thresholds for the gesture state machine.
    pub fn gesture_settings(&self) -> GestureSettings {
        GestureSettings {
            min_shape_size: self.pill.min_size,
            corner_radius: self.pill.corner_radius,
            drag_threshold: self.gesture.drag_threshold,
            click_time: Duration::from_millis(self.gesture.click_time_ms),
            click_distance: self.gesture.click_distance,
        }
    }

    pub fn split_settings(&self) -> SplitSettings {
        SplitSettings {
            min_part_size: self.split.min_part_size,
            clearance: self.split.clearance,
        }
    }

    /// Runtime settings for the input state machine.
    pub fn input_settings(&self) -> InputSettings {
        InputSettings {
            gesture: self.gesture_settings(),
            split: self.split_settings(),
            show_crosshair: self.ui.show_crosshair,
            draft_opacity: self.ui.draft_opacity,
        }
    }

    /// Builds a color picker over the configured palette.
    pub fn color_picker(&self, seed: Option<u64>) -> ColorPicker {
        ColorPicker::new(self.palette(), seed)
    }
}

fn clamp_f64(name: &str, value: &mut f64, min: f64, max: f64) {
    if value.is_nan() {
        warn!("Invalid {} NaN, using {:.1}", name, min);
        *value = min;
    } else if !(min..=max).contains(value) {
        warn!(
            "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
            name, value, min, max
        );
        *value = value.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());

        let settings = config.input_settings();
        assert_eq!(settings.gesture.min_shape_size, 40.0);
        assert_eq!(settings.gesture.corner_radius, 20.0);
        assert_eq!(settings.gesture.drag_threshold, 5.0);
        assert_eq!(settings.gesture.click_time, Duration::from_millis(200));
        assert_eq!(settings.gesture.click_distance, 10.0);
        assert_eq!(settings.split.min_part_size, 20.0);
        assert_eq!(settings.split.clearance, 5.0);
        assert!(settings.show_crosshair);
        assert_eq!(config.palette().len(), 10);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [split]
            min_part_size = 10.0

            [gesture]
            click_time_ms = 350
            "#,
        )
        .unwrap();
        assert_eq!(config.split.min_part_size, 10.0);
        assert_eq!(config.split.clearance, 5.0);
        assert_eq!(config.gesture.click_time_ms, 350);
        assert_eq!(config.pill.min_size, 40.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [pill]
            min_size = 30.0
            corner_radius = -4.0
            palette = []

            [split]
            min_part_size = 80.0
            clearance = 500.0

            [gesture]
            click_time_ms = 0

            [ui]
            draft_opacity = 3.0
            "#,
        )
        .unwrap();
        assert_eq!(config.pill.corner_radius, 0.0);
        assert_eq!(config.split.min_part_size, 30.0);
        assert_eq!(config.split.clearance, 100.0);
        assert_eq!(config.gesture.click_time_ms, 1);
        assert_eq!(config.ui.draft_opacity, 1.0);
        assert_eq!(config.pill.palette.len(), 10);
    }

    #[test]
    fn mixed_palette_entries_resolve() {
        let config = Config::from_toml_str(
            r##"
            [pill]
            palette = ["plum", "#010203", [10, 20, 30]]
            "##,
        )
        .unwrap();
        let hex: Vec<String> = config.palette().iter().map(|c| c.to_hex()).collect();
        assert_eq!(hex, vec!["#DDA0DD", "#010203", "#0A141E"]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("[pill\nmin_size = ").is_err());
    }

    #[test]
    fn load_from_reads_file_and_reports_missing_paths() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nshow_crosshair = false").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.ui.show_crosshair);

        let missing = file.path().with_extension("missing");
        let err = Config::load_from(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn toml_output_round_trips_through_the_parser() {
        let mut config = Config::default();
        config.gesture.drag_threshold = 8.0;
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn schema_lists_every_section() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["pill", "split", "gesture", "ui"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
