//! Permanent district labels, shown by zoom level and district size.

mod area;
mod layer;
mod policy;

pub use area::area_m2;
pub use layer::{Label, LabelLayer};
pub use policy::LabelPolicy;
