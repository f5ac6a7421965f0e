use tracing::{debug, info, warn};

use crate::{
    config::MapConfig,
    feature::{Feature, FeatureCollection, FeatureRef, LayerKind},
    label::{LabelLayer, LabelPolicy},
    style::{resolve_style, Style},
};
use super::{preview, Changes, PanelView, Selection, Tooltip, ViewEvent};

/// A feature as handed to the rendering surface.
#[derive(Debug, Clone, Copy)]
pub struct StyledFeature<'a> {
    pub id: FeatureRef,
    pub feature: &'a Feature,
    pub style: Style,
}

/// Top-level state of the map: the loaded layers, zoom, selection and label layer.
/// All mutation goes through [`MapView::handle`].
#[derive(Debug)]
pub struct MapView {
    config: MapConfig,
    policy: LabelPolicy,
    points: Option<FeatureCollection>,
    lines: Option<FeatureCollection>,
    districts: Option<FeatureCollection>,
    zoom: f64,
    selection: Selection,
    labels: LabelLayer,
    show_about: bool,
}

impl Default for MapView {
    fn default() -> Self { Self::new(MapConfig::default()) }
}

impl MapView {
    pub fn new(config: MapConfig) -> Self {
        Self {
            policy: config.label_policy(),
            zoom: config.initial_zoom,
            config,
            points: None,
            lines: None,
            districts: None,
            selection: Selection::Idle,
            labels: LabelLayer::new(),
            show_about: false,
        }
    }

    #[inline] pub fn config(&self) -> &MapConfig { &self.config }

    #[inline] pub fn zoom(&self) -> f64 { self.zoom }

    #[inline] pub fn selection(&self) -> Selection { self.selection }

    #[inline] pub fn labels(&self) -> &LabelLayer { &self.labels }

    #[inline] pub fn show_about(&self) -> bool { self.show_about }

    /// About-panel paragraphs while the panel is open.
    pub fn about(&self) -> Option<&[String]> {
        self.show_about.then_some(self.config.about.as_slice())
    }

    /// Loaded collection for `kind`, None until (or unless) its load succeeded.
    pub fn layer(&self, kind: LayerKind) -> Option<&FeatureCollection> {
        match kind {
            LayerKind::Points => self.points.as_ref(),
            LayerKind::Lines => self.lines.as_ref(),
            LayerKind::Districts => self.districts.as_ref(),
        }
    }

    fn layer_slot(&mut self, kind: LayerKind) -> &mut Option<FeatureCollection> {
        match kind {
            LayerKind::Points => &mut self.points,
            LayerKind::Lines => &mut self.lines,
            LayerKind::Districts => &mut self.districts,
        }
    }

    pub fn feature(&self, id: FeatureRef) -> Option<&Feature> {
        self.layer(id.layer)?.get(id.index)
    }

    pub fn selected_feature(&self) -> Option<&Feature> {
        self.feature(self.selection.feature()?)
    }

    /// Drawable features of one layer with their resolved styles. Features without geometry are skipped.
    pub fn styled(&self, kind: LayerKind) -> impl Iterator<Item = StyledFeature<'_>> {
        self.layer(kind).into_iter()
            .flat_map(|fc| fc.iter().enumerate())
            .filter(|(_, feature)| feature.geometry().is_some())
            .map(move |(index, feature)| StyledFeature {
                id: FeatureRef::new(kind, index),
                feature,
                style: resolve_style(feature),
            })
    }

    /// Hover tooltip for a feature; unnamed features have none.
    pub fn tooltip(&self, id: FeatureRef) -> Option<Tooltip> {
        self.feature(id)?.name().map(Tooltip::hover)
    }

    /// First feature named `name`, searching the topmost layer first.
    pub fn find_by_name(&self, name: &str) -> Option<FeatureRef> {
        LayerKind::draw_order().into_iter().rev().find_map(|kind| {
            let index = self.layer(kind)?.position_by_name(name)?;
            Some(FeatureRef::new(kind, index))
        })
    }

    /// Info panel for the current selection.
    pub fn panel(&self) -> Option<PanelView> { PanelView::from_view(self) }

    /// Apply one event and report what it changed.
    pub fn handle(&mut self, event: ViewEvent) -> Changes {
        match event {
            ViewEvent::Loaded(kind, result) => self.on_loaded(kind, result),
            ViewEvent::ZoomChanged(zoom) => {
                if !zoom.is_finite() {
                    debug!("[view] ignoring non-finite zoom {zoom}");
                    return Changes::NONE;
                }
                self.zoom = zoom;
                self.refresh_labels();
                Changes { labels: true, ..Changes::NONE }
            }
            ViewEvent::Click(id) => {
                if self.feature(id).and_then(Feature::geometry).is_none() {
                    debug!("[view] ignoring click on unknown or undrawn feature {id:?}");
                    return Changes::NONE;
                }
                Changes { panel: self.selection.click(id), ..Changes::NONE }
            }
            ViewEvent::Expand => {
                let expandable = preview::expandable(self.selected_feature().and_then(Feature::explainer));
                Changes { panel: self.selection.expand(expandable), ..Changes::NONE }
            }
            ViewEvent::Collapse => Changes { panel: self.selection.collapse(), ..Changes::NONE },
            ViewEvent::Close => Changes { panel: self.selection.close(), ..Changes::NONE },
            ViewEvent::ShowAbout => Changes { about: !std::mem::replace(&mut self.show_about, true), ..Changes::NONE },
            ViewEvent::HideAbout => Changes { about: std::mem::replace(&mut self.show_about, false), ..Changes::NONE },
        }
    }

    /// Apply events in order, merging their changes.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = ViewEvent>) -> Changes {
        events.into_iter().fold(Changes::NONE, |acc, event| acc | self.handle(event))
    }

    fn on_loaded(&mut self, kind: LayerKind, result: anyhow::Result<FeatureCollection>) -> Changes {
        let collection = match result {
            Ok(collection) => collection,
            Err(e) => {
                warn!("[view] {} layer unavailable: {e:#}", kind.to_str());
                return Changes::NONE;
            }
        };

        let slot = self.layer_slot(kind);
        if slot.is_some() {
            warn!("[view] {} layer already loaded; ignoring second delivery", kind.to_str());
            return Changes::NONE;
        }
        info!("[view] loaded {} {} features", collection.len(), kind.to_str());
        *slot = Some(collection);

        let labels = kind == LayerKind::Districts;
        if labels { self.refresh_labels() }
        Changes { layers: true, labels, ..Changes::NONE }
    }

    /// Rebuild the label layer from scratch for the current zoom and districts.
    fn refresh_labels(&mut self) {
        self.labels.recompute(self.districts.as_ref(), self.zoom, &self.policy);
        debug!("[view] {} district labels at zoom {}", self.labels.len(), self.zoom);
    }
}
