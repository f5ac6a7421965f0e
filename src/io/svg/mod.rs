//! SVG format writing operations for map snapshots.

mod geometry;
mod proj;
mod text;
mod writer;

pub(crate) use geometry::*;
pub(crate) use proj::*;
pub(crate) use text::*;
pub(crate) use writer::*;
