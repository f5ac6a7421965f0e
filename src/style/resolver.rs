use serde::Serialize;

use crate::feature::Feature;
use super::{Category, Rgb};

/// Vector style for one rendered feature, in the shape the map layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub color: Rgb,
    pub fill_color: Rgb,
    pub fill_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub weight: f64,
    /// Circle marker radius, only meaningful for points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl Style {
    fn area(color: Rgb) -> Self {
        Self { color, fill_color: color, fill_opacity: 0.4, opacity: None, weight: 1.0, radius: None }
    }

    fn marker(color: Rgb) -> Self {
        Self { color, fill_color: color, fill_opacity: 1.0, opacity: Some(1.0), weight: 2.0, radius: Some(6.0) }
    }
}

/// Style a feature from its category and geometry type.
/// Polygons get a translucent fill and thin outline; points and lines are opaque with a heavier stroke.
pub fn resolve_style(feature: &Feature) -> Style {
    let color = Category::color_or_fallback(feature.category());
    if feature.is_area() { Style::area(color) } else { Style::marker(color) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, point, polygon, Geometry, MultiPolygon};
    use serde_json::{json, Map, Value};

    fn feature(geometry: Geometry<f64>, props: Value) -> Feature {
        Feature::new(Some(geometry), props.as_object().cloned().unwrap_or_default())
    }

    fn square() -> geo::Polygon<f64> {
        polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)]
    }

    #[test]
    fn polygons_are_translucent_and_thin() {
        for geometry in [Geometry::Polygon(square()), Geometry::MultiPolygon(MultiPolygon(vec![square()]))] {
            let style = resolve_style(&feature(geometry, json!({"Тип названия": "Визуальная ассоциация"})));
            assert_eq!(style.fill_opacity, 0.4);
            assert_eq!(style.weight, 1.0);
            assert_eq!(style.radius, None);
            assert_eq!(style.color.to_string(), "#4daf4a");
            assert_eq!(style.fill_color, style.color);
        }
    }

    #[test]
    fn points_and_lines_are_opaque_markers() {
        let point = resolve_style(&feature(Geometry::Point(point!(x: 1.0, y: 2.0)), json!({"Тип названия": "Историческая ассоциация"})));
        assert_eq!(point.fill_opacity, 1.0);
        assert_eq!(point.weight, 2.0);
        assert_eq!(point.radius, Some(6.0));
        assert_eq!(point.color.to_string(), "#e41a1c");

        let line = resolve_style(&feature(Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]), json!({})));
        assert_eq!(line.fill_opacity, 1.0);
        assert_eq!(line.weight, 2.0);
    }

    #[test]
    fn missing_or_unknown_category_falls_back_to_gray() {
        for props in [json!({}), json!({"Тип названия": ""}), json!({"Тип названия": "unknown"}), json!({"Тип названия": 3})] {
            let style = resolve_style(&feature(Geometry::Point(point!(x: 0.0, y: 0.0)), props));
            assert_eq!(style.color.to_string(), "#cccccc");
        }

        let bare = resolve_style(&Feature::new(None, Map::new()));
        assert_eq!(bare.fill_color, Rgb::FALLBACK);
    }

    #[test]
    fn serializes_with_leaflet_field_names() {
        let style = resolve_style(&feature(Geometry::Polygon(square()), json!({"Тип названия": "Другое"})));
        let value = serde_json::to_value(style).unwrap();
        assert_eq!(value, json!({"color": "#999999", "fillColor": "#999999", "fillOpacity": 0.4, "weight": 1.0}));
    }
}
