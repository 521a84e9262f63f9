//! Grid snapping
//!
//! User-committed coordinates are quantized to the grid pitch, one axis at
//! a time. Snapping always applies to the resulting coordinate, never to a
//! delta, so repeated drags cannot accumulate drift.

use serde::{Deserialize, Serialize};

/// Grid configuration, persisted with the layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    /// Pitch in cm
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(rename = "showMeasurements", default = "default_enabled")]
    pub show_measurements: bool,
}

fn default_size() -> f64 {
    10.0
}

fn default_enabled() -> bool {
    true
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: default_size(),
            enabled: default_enabled(),
            show_measurements: default_enabled(),
        }
    }
}

impl GridSettings {
    /// Round to the nearest grid multiple; identity when disabled or pitch 0
    pub fn snap(&self, v: f64) -> f64 {
        if !self.enabled || self.size == 0.0 {
            return v;
        }
        (v / self.size).round() * self.size
    }
}
