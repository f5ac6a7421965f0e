pub mod inspect;
pub mod labels;
pub mod render;

use anyhow::{bail, Result};
use tracing::info;
use vernamap::{load, MapConfig, MapView, ViewEvent};

use crate::cli::SourceArgs;

/// Pick the data source for `base`: a URL when it looks like one, otherwise a directory.
fn open_source(base: &str) -> Result<Box<dyn load::DataSource>> {
    if base.starts_with("http://") || base.starts_with("https://") {
        return url_source(base);
    }
    let path = std::path::Path::new(base);
    if !path.is_dir() {
        bail!("[cli] data directory does not exist: {}", path.display());
    }
    Ok(Box::new(load::DirSource::new(path)))
}

#[cfg(feature = "download")]
fn url_source(base: &str) -> Result<Box<dyn load::DataSource>> {
    Ok(Box::new(load::HttpSource::new(base)))
}

#[cfg(not(feature = "download"))]
fn url_source(base: &str) -> Result<Box<dyn load::DataSource>> {
    bail!("[cli] {base} is a URL but this build has no download support")
}

/// Build a view with all three layers delivered and the zoom applied.
pub(crate) fn open_view(args: &SourceArgs, zoom: Option<f64>) -> Result<MapView> {
    let config = match &args.config {
        Some(path) => MapConfig::from_toml_file(path)?,
        None => MapConfig::default(),
    };

    let source = open_source(&args.base)?;
    info!("[cli] loading layers from {}", args.base);
    let events = load::load_layers(source.as_ref(), &config);

    let mut view = MapView::new(config);
    view.handle_all(events);
    if let Some(zoom) = zoom {
        view.handle(ViewEvent::ZoomChanged(zoom));
    }
    Ok(view)
}
