//! Board configuration.
//!
//! Every structure implements `Default` with the stock viewer values and
//! deserializes with `#[serde(default)]`, so a JSON file only needs the keys
//! it overrides.

use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Which member of a full visible queue gives way when another panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvictionPolicy {
    /// The panel that has been visible the longest is hidden.
    #[default]
    OldestFirst,
    /// The panel shown most recently is hidden.
    NewestFirst,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Scale applied to the affected axis on a wheel "up" step.
    pub zoom_in_factor: f64,
    /// Scale applied to the affected axis on a wheel "down" step.
    pub zoom_out_factor: f64,
    /// Fraction of the panel pixel width, from its left edge, where the wheel zooms Y.
    pub y_zoom_zone: f32,
    /// Number of evenly spaced X ticks.
    pub tick_density: usize,
    /// Maximum pixel distance between the pointer and a sample for it to be picked.
    pub pick_radius_px: f32,
    /// Adds the sample x value as the second annotation line.
    pub annotate_x: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
            y_zoom_zone: 0.2,
            tick_density: 30,
            pick_radius_px: 8.0,
            annotate_x: false,
        }
    }
}

/// Figure-relative geometry (0..1, origin bottom-left) of the panel widgets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub top: f32,
    pub slot_gap: f32,
    pub plot_left: f32,
    pub plot_width: f32,
    pub button_left: f32,
    pub button_width: f32,
    pub button_height: f32,
    pub checklist_left: f32,
    pub checklist_width: f32,
    pub checklist_height: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top: 1.0,
            slot_gap: 0.04,
            plot_left: 0.13,
            plot_width: 0.85,
            button_left: 0.005,
            button_width: 0.08,
            button_height: 0.03,
            checklist_left: 0.005,
            checklist_width: 0.10,
            checklist_height: 0.10,
            canvas_width: 1280.0,
            canvas_height: 720.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Maximum number of panels rendered at once.
    pub visible_capacity: usize,
    /// How many of the first registered panels start visible.
    pub default_visible: usize,
    /// Replays Y changes onto sibling panels.
    pub y_sync: bool,
    pub eviction: EvictionPolicy,
    pub interaction: InteractionConfig,
    pub layout: LayoutConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            visible_capacity: 3,
            default_visible: 2,
            y_sync: false,
            eviction: EvictionPolicy::OldestFirst,
            interaction: InteractionConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.visible_capacity == 0 {
            return Err(ChartError::InvalidConfig {
                what: "visible_capacity must be at least 1",
            });
        }
        if self.default_visible == 0 || self.default_visible > self.visible_capacity {
            return Err(ChartError::InvalidConfig {
                what: "default_visible must be within 1..=visible_capacity",
            });
        }
        let i = &self.interaction;
        if !(i.zoom_in_factor > 0.0 && i.zoom_out_factor > 0.0) {
            return Err(ChartError::InvalidConfig {
                what: "zoom factors must be positive",
            });
        }
        if !(0.0..=1.0).contains(&i.y_zoom_zone) {
            return Err(ChartError::InvalidConfig {
                what: "y_zoom_zone must be a fraction",
            });
        }
        if self.layout.canvas_width <= 0.0 || self.layout.canvas_height <= 0.0 {
            return Err(ChartError::InvalidConfig {
                what: "canvas size must be positive",
            });
        }
        Ok(())
    }
}
