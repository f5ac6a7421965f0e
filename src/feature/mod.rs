mod collection;
mod feature;
mod kind;

pub use collection::FeatureCollection;
pub use feature::{Feature, CATEGORY_ALIAS, CATEGORY_KEY};
pub use kind::{FeatureRef, LayerKind};
