use js_sys::Uint8Array;
use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use vernamap_core::{
    FeatureCollection, FeatureRef, MapConfig, MapView, Style, SvgOptions, ViewEvent,
};

use crate::common::*;

/// A drawable feature and its style, as handed to the JS map layer.
#[derive(Serialize)]
struct JsStyledFeature {
    index: usize,
    style: Style,
}

/// Browser-side map state. JS owns the map widget and the fetches,
/// and forwards each load completion and user event here.
#[wasm_bindgen]
pub struct WasmMapView {
    inner: MapView,
}

#[wasm_bindgen]
impl WasmMapView {
    /// Create a view; `config` is an optional TOML string overriding the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<WasmMapView, JsValue> {
        let config = match config {
            Some(text) => MapConfig::from_toml_str(&text).map_err(js_err)?,
            None => MapConfig::default(),
        };
        Ok(WasmMapView { inner: MapView::new(config) })
    }

    /// Map widget settings: tile URL, attribution, center, initial zoom, title.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.config())
    }

    /// Relative path JS should fetch for a layer.
    pub fn data_path(&self, layer: String) -> Result<String, JsValue> {
        let kind = parse_layer(&layer).map_err(js_err)?;
        Ok(self.inner.config().path(kind).to_string())
    }

    /// Deliver a fetched document. Returns false (and leaves the layer empty) if it cannot be parsed.
    pub fn load(&mut self, layer: String, bytes: Uint8Array) -> Result<bool, JsValue> {
        let kind = parse_layer(&layer).map_err(js_err)?;
        let result = FeatureCollection::from_geojson_bytes(&bytes.to_vec());
        if let Err(e) = &result {
            warn(&format!("[vernamap] {} layer unavailable: {e:#}", kind.to_str()));
        }
        Ok(self.inner.handle(ViewEvent::Loaded(kind, result)).layers)
    }

    /// Report the map's zoomend; returns true when the label layer must be redrawn.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        self.inner.handle(ViewEvent::ZoomChanged(zoom)).labels
    }

    pub fn click(&mut self, layer: String, index: usize) -> Result<bool, JsValue> {
        let kind = parse_layer(&layer).map_err(js_err)?;
        Ok(self.inner.handle(ViewEvent::Click(FeatureRef::new(kind, index))).panel)
    }

    pub fn expand(&mut self) -> bool { self.inner.handle(ViewEvent::Expand).panel }

    pub fn collapse(&mut self) -> bool { self.inner.handle(ViewEvent::Collapse).panel }

    pub fn close(&mut self) -> bool { self.inner.handle(ViewEvent::Close).panel }

    pub fn show_about(&mut self, show: bool) -> bool {
        let event = if show { ViewEvent::ShowAbout } else { ViewEvent::HideAbout };
        self.inner.handle(event).about
    }

    /// Hover tooltip for a feature, or undefined for unnamed ones.
    pub fn tooltip(&self, layer: String, index: usize) -> Result<JsValue, JsValue> {
        let kind = parse_layer(&layer).map_err(js_err)?;
        match self.inner.tooltip(FeatureRef::new(kind, index)) {
            Some(tooltip) => to_js(&tooltip),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// `[{ index, style }]` for every drawable feature of a layer.
    pub fn styles(&self, layer: String) -> Result<JsValue, JsValue> {
        let kind = parse_layer(&layer).map_err(js_err)?;
        let styles = self.inner.styled(kind)
            .map(|s| JsStyledFeature { index: s.id.index, style: s.style })
            .collect::<Vec<_>>();
        to_js(&styles)
    }

    /// Current permanent district labels; replace the whole label layer with these.
    pub fn labels(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.labels().labels())
    }

    /// Info panel contents, or null when nothing is selected.
    pub fn panel(&self) -> Result<JsValue, JsValue> {
        match self.inner.panel() {
            Some(panel) => to_js(&panel),
            None => Ok(JsValue::NULL),
        }
    }

    /// About-panel paragraphs, or null while it is closed.
    pub fn about(&self) -> Result<JsValue, JsValue> {
        match self.inner.about() {
            Some(paragraphs) => to_js(paragraphs),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn legend(&self) -> Result<JsValue, JsValue> {
        to_js(&vernamap_core::legend())
    }

    pub fn zoom(&self) -> f64 { self.inner.zoom() }

    /// Static SVG snapshot of the current state.
    #[wasm_bindgen(js_name = "to_svg")]
    pub fn to_svg(&self, width: Option<f64>) -> Result<String, JsValue> {
        let options = SvgOptions { width: width.unwrap_or(1200.0), ..SvgOptions::default() };
        self.inner.to_svg_string(&options).map_err(js_err)
    }
}
