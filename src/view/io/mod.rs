mod svg;

pub use svg::SvgOptions;
