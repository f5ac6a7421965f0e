use geo::{ChamberlainDuquetteArea, Geometry};

/// Spherical area in square meters of a lon/lat geometry.
/// Polygons subtract their holes, multi-part geometries sum their parts, points and lines are zero.
pub fn area_m2(geometry: &Geometry<f64>) -> f64 {
    match geometry {
        Geometry::Polygon(p) => p.chamberlain_duquette_unsigned_area(),
        Geometry::MultiPolygon(mp) => mp.chamberlain_duquette_unsigned_area(),
        Geometry::Rect(r) => r.to_polygon().chamberlain_duquette_unsigned_area(),
        Geometry::Triangle(t) => t.to_polygon().chamberlain_duquette_unsigned_area(),
        Geometry::GeometryCollection(gc) => gc.iter().map(area_m2).sum(),
        _ => 0.0,
    }
}
