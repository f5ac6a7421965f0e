use serde::{Deserialize, Serialize};

/// One of the three static vector layers of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Points,     // Drawn on top
    Lines,
    Districts,  // Drawn first, carries the labels
}

impl LayerKind {
    pub const ALL: [LayerKind; 3] = [LayerKind::Points, LayerKind::Lines, LayerKind::Districts];

    pub fn to_str(&self) -> &'static str {
        match self {
            LayerKind::Points => "points",
            LayerKind::Lines => "lines",
            LayerKind::Districts => "districts",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "points" | "point" => Some(LayerKind::Points),
            "lines" | "line" => Some(LayerKind::Lines),
            "districts" | "district" => Some(LayerKind::Districts),
            _ => None,
        }
    }

    /// Layers in the order they are stacked on the map, bottom first.
    pub fn draw_order() -> [LayerKind; 3] {
        [LayerKind::Districts, LayerKind::Lines, LayerKind::Points]
    }
}

/// Stable handle to a feature: layer plus position in its collection.
/// Collections never change after loading, so a handle stays valid for the view's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureRef {
    pub layer: LayerKind,
    pub index: usize,
}

impl FeatureRef {
    pub fn new(layer: LayerKind, index: usize) -> Self { Self { layer, index } }
}
