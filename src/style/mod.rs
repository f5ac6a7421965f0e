mod category;
mod color;
mod resolver;

pub use category::{legend, Category, LegendEntry, LEGEND_TITLE};
pub use color::Rgb;
pub use resolver::{resolve_style, Style};
