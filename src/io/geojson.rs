use anyhow::{anyhow, bail, Context, Result};
use geo::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use serde_json::{Map, Value};

use crate::feature::Feature;

/// Read features from GeoJSON bytes.
/// Accepts a FeatureCollection or a bare Feature. Features whose geometry is null or of an
/// unknown type are kept without geometry; malformed coordinates are an error.
pub(crate) fn read_features_from_geojson_bytes(bytes: &[u8]) -> Result<Vec<Feature>> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson] Failed to parse GeoJSON bytes")?;

    match value["type"].as_str() {
        Some("FeatureCollection") => {
            let features = value["features"].as_array()
                .ok_or_else(|| anyhow!("[io::geojson] FeatureCollection without a features array"))?;
            features.iter().enumerate()
                .map(|(i, f)| parse_feature(f).with_context(|| format!("[io::geojson] feature #{i}")))
                .collect()
        }
        Some("Feature") => Ok(vec![parse_feature(&value)?]),
        other => bail!("[io::geojson] Expected a FeatureCollection, got {:?}", other),
    }
}

fn parse_feature(value: &Value) -> Result<Feature> {
    let properties = match &value["properties"] {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    let geometry = match &value["geometry"] {
        Value::Null => None,
        geometry => parse_geometry(geometry)?,
    };

    Ok(Feature::new(geometry, properties))
}

/// Parse a GeoJSON geometry object. Unknown geometry types yield None.
pub(crate) fn parse_geometry(value: &Value) -> Result<Option<Geometry<f64>>> {
    let coords = &value["coordinates"];
    let geometry = match value["type"].as_str() {
        Some("Point") => Geometry::Point(Point(parse_position(coords)?)),
        Some("MultiPoint") => Geometry::MultiPoint(MultiPoint(
            array(coords)?.iter().map(|c| parse_position(c).map(Point)).collect::<Result<_>>()?,
        )),
        Some("LineString") => Geometry::LineString(parse_line(coords)?),
        Some("MultiLineString") => Geometry::MultiLineString(MultiLineString(
            array(coords)?.iter().map(parse_line).collect::<Result<_>>()?,
        )),
        Some("Polygon") => Geometry::Polygon(parse_polygon(coords)?),
        Some("MultiPolygon") => Geometry::MultiPolygon(MultiPolygon(
            array(coords)?.iter().map(parse_polygon).collect::<Result<_>>()?,
        )),
        Some("GeometryCollection") => {
            let members = value["geometries"].as_array()
                .ok_or_else(|| anyhow!("[io::geojson] GeometryCollection without geometries"))?;
            let mut parts = Vec::with_capacity(members.len());
            for member in members {
                if let Some(geometry) = parse_geometry(member)? { parts.push(geometry) }
            }
            Geometry::GeometryCollection(GeometryCollection(parts))
        }
        _ => return Ok(None),
    };
    Ok(Some(geometry))
}

fn array(value: &Value) -> Result<&Vec<Value>> {
    value.as_array().ok_or_else(|| anyhow!("[io::geojson] Invalid coordinates: expected an array"))
}

/// Parse a position: [x, y, ...]. Extra dimensions are ignored.
fn parse_position(value: &Value) -> Result<Coord<f64>> {
    let pos = array(value)?;
    if pos.len() < 2 {
        bail!("[io::geojson] Invalid position: expected at least two numbers");
    }
    let x = pos[0].as_f64().ok_or_else(|| anyhow!("[io::geojson] Invalid coordinate: x must be a number"))?;
    let y = pos[1].as_f64().ok_or_else(|| anyhow!("[io::geojson] Invalid coordinate: y must be a number"))?;
    Ok(Coord { x, y })
}

fn parse_line(value: &Value) -> Result<LineString<f64>> {
    Ok(LineString(array(value)?.iter().map(parse_position).collect::<Result<_>>()?))
}

/// Parse polygon rings: first ring is the exterior, the rest are holes.
fn parse_polygon(value: &Value) -> Result<Polygon<f64>> {
    let mut rings = array(value)?.iter().map(parse_line);
    let exterior = rings.next()
        .ok_or_else(|| anyhow!("[io::geojson] Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    // Polygon::new closes open rings.
    Ok(Polygon::new(exterior, interiors))
}
