use std::fmt;

use serde::Serialize;

use crate::{
    feature::FeatureRef,
    style::{Category, Rgb},
};
use super::{preview, MapView, Selection};

/// Button at the bottom of the info panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelControl {
    Expand,
    Collapse,
}

impl PanelControl {
    pub fn label(&self) -> &'static str {
        match self {
            PanelControl::Expand => "Развернуть",
            PanelControl::Collapse => "Свернуть",
        }
    }
}

/// Info panel contents for the current selection; a pure function of view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub feature: FeatureRef,
    pub title: String,
    pub original_name: Option<String>,
    pub original_name_color: Rgb,
    /// Preview while collapsed, full explainer once expanded.
    pub body: String,
    pub control: Option<PanelControl>,
    /// Raw category label from the data, shown as-is.
    pub category: Option<String>,
    pub expanded: bool,
}

impl PanelView {
    /// None when nothing is selected.
    pub fn from_view(view: &MapView) -> Option<Self> {
        let (feature_ref, expanded) = match view.selection() {
            Selection::Idle => return None,
            Selection::Selected(f) => (f, false),
            Selection::Expanded(f) => (f, true),
        };
        let feature = view.feature(feature_ref)?;
        let explainer = feature.explainer();

        let (body, control) = if expanded {
            (explainer.unwrap_or_default().to_string(), Some(PanelControl::Collapse))
        } else {
            (preview::preview(explainer), preview::expandable(explainer).then_some(PanelControl::Expand))
        };

        Some(Self {
            feature: feature_ref,
            title: feature.name().unwrap_or_default().to_string(),
            original_name: feature.original_name().map(str::to_string),
            original_name_color: Category::RealName.color(),
            body,
            control,
            category: feature.category_value().map(str::to_string),
            expanded,
        })
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(original) = &self.original_name { writeln!(f, "({original})")? }
        if !self.body.is_empty() { writeln!(f, "\n{}\n", self.body)? }
        if let Some(control) = self.control { writeln!(f, "[{}]", control.label())? }
        if let Some(category) = &self.category { writeln!(f, "{category}")? }
        Ok(())
    }
}

/// Where a hover tooltip opens relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipDirection {
    Top,
}

/// Non-permanent hover tooltip showing a feature's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub text: String,
    pub direction: TooltipDirection,
    /// Follows the pointer while hovering.
    pub sticky: bool,
    /// Pixel offset from the anchor.
    pub offset: (i32, i32),
}

impl Tooltip {
    pub fn hover(text: &str) -> Self {
        Self { text: text.to_string(), direction: TooltipDirection::Top, sticky: true, offset: (0, -10) }
    }
}
