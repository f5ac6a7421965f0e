//! Format-specific reading and writing.
//!
//! - `geojson` - reading feature collections
//! - `svg` - low-level SVG writing used by the map snapshot renderer

pub(crate) mod geojson;
pub(crate) mod svg;

pub(crate) use geojson::read_features_from_geojson_bytes;
