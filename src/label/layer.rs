use geo::{Centroid, Point};
use serde::Serialize;

use crate::feature::FeatureCollection;
use super::{area_m2, LabelPolicy};

/// A permanent text label centered on a district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    /// Index of the district in its collection.
    pub index: usize,
    pub text: String,
    pub anchor: Point<f64>,
    pub area_m2: f64,
}

/// The dynamic label layer on top of the district layer.
/// Its contents are only ever replaced wholesale, never patched.
#[derive(Debug, Clone, Default)]
pub struct LabelLayer {
    labels: Vec<Label>,
    generation: u64,
}

impl LabelLayer {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn labels(&self) -> &[Label] { &self.labels }

    #[inline] pub fn len(&self) -> usize { self.labels.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Number of times the layer has been rebuilt.
    #[inline] pub fn generation(&self) -> u64 { self.generation }

    /// Drop every current label and rebuild the layer for `zoom`.
    /// With no district collection the layer is left empty.
    pub fn recompute(&mut self, districts: Option<&FeatureCollection>, zoom: f64, policy: &LabelPolicy) {
        self.labels.clear();
        self.generation += 1;

        let Some(districts) = districts else { return };
        self.labels.extend(visible_labels(districts, zoom, policy));
    }
}

/// Labels the policy shows at `zoom`, in collection order. Unnamed districts never get one.
pub(crate) fn visible_labels<'a>(
    districts: &'a FeatureCollection,
    zoom: f64,
    policy: &'a LabelPolicy,
) -> impl Iterator<Item = Label> + 'a {
    districts.iter().enumerate().filter_map(move |(index, feature)| {
        let text = feature.name()?;
        let geometry = feature.geometry()?;
        let area = area_m2(geometry);
        if !policy.shows(zoom, area) { return None }

        let anchor = geometry.centroid()?;
        Some(Label { index, text: text.to_string(), anchor, area_m2: area })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Feature;
    use geo::{polygon, Geometry};
    use serde_json::{json, Map, Value};

    fn district(name: Option<&str>, side: f64) -> Feature {
        let props = match name {
            Some(name) => json!({ "name": name }),
            None => Value::Null,
        };
        let (lon, lat) = (56.25, 58.01);
        let geometry = polygon![
            (x: lon, y: lat),
            (x: lon + side, y: lat),
            (x: lon + side, y: lat + side),
            (x: lon, y: lat + side),
        ];
        Feature::new(Some(Geometry::Polygon(geometry)), props.as_object().cloned().unwrap_or_else(Map::new))
    }

    fn districts() -> FeatureCollection {
        FeatureCollection::new(vec![
            district(Some("small"), 0.01),  // ~0.66 km^2
            district(Some("large"), 0.02),  // ~2.6 km^2
            district(None, 0.05),
        ])
    }

    fn names(layer: &LabelLayer) -> Vec<&str> {
        layer.labels().iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn only_large_districts_at_city_zoom() {
        let mut layer = LabelLayer::new();
        layer.recompute(Some(&districts()), 12.0, &LabelPolicy::default());
        assert_eq!(names(&layer), vec!["large"]);
        assert_eq!(layer.labels()[0].index, 1);
        assert!(layer.labels()[0].area_m2 > 1_000_000.0);
    }

    #[test]
    fn every_named_district_at_street_zoom() {
        let mut layer = LabelLayer::new();
        layer.recompute(Some(&districts()), 15.0, &LabelPolicy::default());
        assert_eq!(names(&layer), vec!["small", "large"]);
    }

    #[test]
    fn recompute_replaces_previous_labels() {
        let data = districts();
        let policy = LabelPolicy::default();
        let mut layer = LabelLayer::new();

        layer.recompute(Some(&data), 16.0, &policy);
        assert_eq!(layer.len(), 2);
        layer.recompute(Some(&data), 11.0, &policy);
        assert_eq!(names(&layer), vec!["large"]);
        layer.recompute(None, 16.0, &policy);
        assert!(layer.is_empty());
        assert_eq!(layer.generation(), 3);
    }

    #[test]
    fn recompute_is_idempotent() {
        let data = districts();
        let policy = LabelPolicy::default();
        let mut layer = LabelLayer::new();

        layer.recompute(Some(&data), 13.0, &policy);
        let first = layer.labels().to_vec();
        layer.recompute(Some(&data), 13.0, &policy);
        assert_eq!(layer.labels(), first.as_slice());
    }

    #[test]
    fn label_sits_at_district_centroid() {
        let mut layer = LabelLayer::new();
        layer.recompute(Some(&districts()), 15.0, &LabelPolicy::default());
        let anchor = layer.labels()[0].anchor;
        assert!((anchor.x() - 56.255).abs() < 1e-9);
        assert!((anchor.y() - 58.015).abs() < 1e-9);
    }
}
