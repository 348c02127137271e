//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::color::DEFAULT_PALETTE_HEX;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings for newly drawn pills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PillConfig {
    /// Minimum width and height of a drawn pill (valid range: 1.0 - 1000.0)
    #[serde(default = "default_min_size")]
    pub min_size: f64,

    /// Nominal corner radius; rendering caps it at half the smaller side
    /// (valid range: 0.0 - 500.0)
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,

    /// Colors new pills are picked from at random
    #[serde(default = "default_palette")]
    pub palette: Vec<ColorSpec>,
}

impl Default for PillConfig {
    fn default() -> Self {
        Self {
            min_size: default_min_size(),
            corner_radius: default_corner_radius(),
            palette: default_palette(),
        }
    }
}

/// Split behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SplitConfig {
    /// Minimum width and height of a split child (valid range: 1.0 - pill.min_size)
    #[serde(default = "default_min_part_size")]
    pub min_part_size: f64,

    /// Gap between the cut and a pill too small to split (valid range: 0.0 - 100.0)
    #[serde(default = "default_clearance")]
    pub clearance: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_part_size: default_min_part_size(),
            clearance: default_clearance(),
        }
    }
}

/// Click versus drag detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GestureConfig {
    /// Pointer travel that turns a press on a pill into a drag (valid range: 0.0 - 100.0)
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f64,

    /// Longest press in milliseconds that still splits (valid range: 1 - 5000)
    #[serde(default = "default_click_time_ms")]
    pub click_time_ms: u64,

    /// Farthest release from the press that still splits (valid range: 0.0 - 100.0)
    #[serde(default = "default_click_distance")]
    pub click_distance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: default_drag_threshold(),
            click_time_ms: default_click_time_ms(),
            click_distance: default_click_distance(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show crosshair guide lines through the pointer
    #[serde(default = "default_show_crosshair")]
    pub show_crosshair: bool,

    /// Opacity of the pill being drawn (valid range: 0.0 - 1.0)
    #[serde(default = "default_draft_opacity")]
    pub draft_opacity: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_crosshair: default_show_crosshair(),
            draft_opacity: default_draft_opacity(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_min_size() -> f64 {
    40.0
}

fn default_corner_radius() -> f64 {
    20.0
}

pub(crate) fn default_palette() -> Vec<ColorSpec> {
    DEFAULT_PALETTE_HEX
        .iter()
        .map(|hex| ColorSpec::Name((*hex).to_string()))
        .collect()
}

fn default_min_part_size() -> f64 {
    20.0
}

fn default_clearance() -> f64 {
    5.0
}

fn default_drag_threshold() -> f64 {
    5.0
}

fn default_click_time_ms() -> u64 {
    200
}

fn default_click_distance() -> f64 {
    10.0
}

fn default_show_crosshair() -> bool {
    true
}

fn default_draft_opacity() -> f64 {
    0.7
}
