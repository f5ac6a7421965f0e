#![doc = "Vernacular map public API"]
mod config;
mod feature;
mod io;
mod label;
mod style;
mod view;

pub mod load;

#[doc(inline)]
pub use config::MapConfig;

#[doc(inline)]
pub use feature::{Feature, FeatureCollection, FeatureRef, LayerKind, CATEGORY_ALIAS, CATEGORY_KEY};

#[doc(inline)]
pub use label::{area_m2, Label, LabelLayer, LabelPolicy};

#[doc(inline)]
pub use style::{legend, resolve_style, Category, LegendEntry, Rgb, Style, LEGEND_TITLE};

#[doc(inline)]
pub use view::{
    preview, Changes, MapView, PanelControl, PanelView, Selection, StyledFeature, SvgOptions,
    Tooltip, TooltipDirection, ViewEvent,
};
