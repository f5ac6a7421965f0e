use std::{ops::Index, sync::Arc};

use anyhow::Result;

use super::Feature;

/// Immutable, cheaply clonable sequence of features loaded from one GeoJSON document.
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    features: Arc<[Feature]>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features: features.into() }
    }

    /// Parse a GeoJSON FeatureCollection (or a single Feature) document.
    pub fn from_geojson_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(crate::io::read_features_from_geojson_bytes(bytes)?))
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn get(&self, index: usize) -> Option<&Feature> { self.features.get(index) }

    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, Feature> { self.features.iter() }

    #[inline] pub fn as_slice(&self) -> &[Feature] { &self.features }

    /// Position of the first feature with the given name.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f.name() == Some(name))
    }
}

impl Index<usize> for FeatureCollection {
    type Output = Feature;

    fn index(&self, index: usize) -> &Feature { &self.features[index] }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter { self.features.iter() }
}
