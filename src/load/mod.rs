//! One-shot loading of the three data files.

mod source;

pub use source::{DataSource, DirSource, MemSource};
#[cfg(feature = "download")]
pub use source::HttpSource;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    config::MapConfig,
    feature::{FeatureCollection, LayerKind},
    view::ViewEvent,
};

/// Fetch and parse one layer's document.
pub fn load_layer(source: &dyn DataSource, config: &MapConfig, kind: LayerKind) -> Result<FeatureCollection> {
    let rel = config.path(kind);
    debug!("[load] fetching {} from {}", kind.to_str(), source.describe(rel));
    let bytes = source.get(rel)?;
    FeatureCollection::from_geojson_bytes(&bytes)
        .with_context(|| format!("[load] failed to parse {rel}"))
}

/// Load all three layers independently. Each result becomes its own `Loaded` event,
/// so one failing file never prevents the others from showing.
pub fn load_layers(source: &dyn DataSource, config: &MapConfig) -> Vec<ViewEvent> {
    LayerKind::ALL.into_iter()
        .map(|kind| ViewEvent::Loaded(kind, load_layer(source, config, kind)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, sync::Arc};

    const POINTS: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"name": "Слон"}, "geometry": {"type": "Point", "coordinates": [56.25, 58.01]}}
    ]}"#;

    #[test]
    fn each_layer_loads_independently() {
        let mut files: HashMap<String, Arc<[u8]>> = HashMap::new();
        files.insert("data/points.geojson".into(), Arc::from(POINTS.as_bytes()));
        files.insert("data/lines.geojson".into(), Arc::from(&b"{ broken"[..]));
        let source = MemSource::new(files);

        let events = load_layers(&source, &MapConfig::default());
        assert_eq!(events.len(), 3);

        let outcome = events.iter()
            .map(|e| match e {
                ViewEvent::Loaded(kind, result) => (*kind, result.as_ref().map(FeatureCollection::len).ok()),
                other => panic!("unexpected event {other:?}"),
            })
            .collect::<Vec<_>>();
        assert_eq!(outcome, vec![
            (LayerKind::Points, Some(1)),
            (LayerKind::Lines, None),
            (LayerKind::Districts, None),
        ]);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let mut files: HashMap<String, Arc<[u8]>> = HashMap::new();
        files.insert("data/lines.geojson".into(), Arc::from(&b"[]"[..]));
        let err = load_layer(&MemSource::new(files), &MapConfig::default(), LayerKind::Lines).unwrap_err();
        assert!(format!("{err:#}").contains("data/lines.geojson"));
    }
}
