use serde::{Deserialize, Serialize};

/// Zoom/area thresholds deciding whether a district carries a permanent label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPolicy {
    /// At or above this zoom every named district is labeled.
    pub min_zoom: f64,
    /// Below `min_zoom`, only districts strictly larger than this (m^2) are labeled.
    pub min_area_m2: f64,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self { min_zoom: 15.0, min_area_m2: 1_000_000.0 }
    }
}

impl LabelPolicy {
    pub fn new(min_zoom: f64, min_area_m2: f64) -> Self { Self { min_zoom, min_area_m2 } }

    #[inline]
    pub fn shows(&self, zoom: f64, area_m2: f64) -> bool {
        zoom >= self.min_zoom || area_m2 > self.min_area_m2
    }
}
