use geo::Geometry;
use serde_json::{Map, Value};

use crate::style::Category;

/// Property holding the feature's name-type category.
pub const CATEGORY_KEY: &str = "Тип названия";

/// English spelling of [`CATEGORY_KEY`], read only when the primary key is absent.
pub const CATEGORY_ALIAS: &str = "name type";

/// A single geographic entity with its GeoJSON properties.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    geometry: Option<Geometry<f64>>,
    properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry<f64>>, properties: Map<String, Value>) -> Self {
        Self { geometry, properties }
    }

    /// Geometry, or None when the source geometry was null or of an unsupported type.
    #[inline] pub fn geometry(&self) -> Option<&Geometry<f64>> { self.geometry.as_ref() }

    #[inline] pub fn properties(&self) -> &Map<String, Value> { &self.properties }

    /// Non-empty string property. Empty strings and non-string values count as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    #[inline] pub fn name(&self) -> Option<&str> { self.text("name") }

    #[inline] pub fn original_name(&self) -> Option<&str> { self.text("original_name") }

    #[inline] pub fn explainer(&self) -> Option<&str> { self.text("explainer") }

    /// Raw category label as stored in the data, if any.
    pub fn category_value(&self) -> Option<&str> {
        self.text(CATEGORY_KEY).or_else(|| self.text(CATEGORY_ALIAS))
    }

    /// Known category, or None for missing and unrecognized labels.
    pub fn category(&self) -> Option<Category> {
        self.category_value().and_then(Category::from_label)
    }

    /// True for Polygon and MultiPolygon geometries.
    pub fn is_area(&self) -> bool {
        matches!(self.geometry, Some(Geometry::Polygon(_)) | Some(Geometry::MultiPolygon(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{point, polygon};
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn text_properties_skip_empty_and_non_strings() {
        let feature = Feature::new(None, props(json!({
            "name": "",
            "original_name": 42,
            "explainer": "Long story.",
        })));
        assert_eq!(feature.name(), None);
        assert_eq!(feature.original_name(), None);
        assert_eq!(feature.explainer(), Some("Long story."));
    }

    #[test]
    fn category_prefers_primary_key() {
        let feature = Feature::new(None, props(json!({
            "Тип названия": "Реальное название",
            "name type": "Другое",
        })));
        assert_eq!(feature.category(), Some(Category::RealName));

        let alias_only = Feature::new(None, props(json!({ "name type": "Другое" })));
        assert_eq!(alias_only.category(), Some(Category::Other));

        let unknown = Feature::new(None, props(json!({ "Тип названия": "something else" })));
        assert_eq!(unknown.category_value(), Some("something else"));
        assert_eq!(unknown.category(), None);
    }

    #[test]
    fn only_polygons_are_areas() {
        let poly = Feature::new(
            Some(Geometry::Polygon(polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)])),
            Map::new(),
        );
        let pt = Feature::new(Some(Geometry::Point(point!(x: 0.0, y: 0.0))), Map::new());
        assert!(poly.is_area());
        assert!(!pt.is_area());
        assert!(!Feature::default().is_area());
    }
}
