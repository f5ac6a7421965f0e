use serde::Serialize;

use super::Rgb;

/// Heading shown above the legend.
pub const LEGEND_TITLE: &str = "Тип названия";

/// Closed set of name-type categories a feature can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    ObjectAssociation,
    OfficialNameAssociation,
    VisualAssociation,
    HistoricalAssociation,
    RealName,
    Other,
}

impl Category {
    /// Legend order.
    pub const ALL: [Category; 6] = [
        Category::ObjectAssociation,
        Category::OfficialNameAssociation,
        Category::VisualAssociation,
        Category::HistoricalAssociation,
        Category::RealName,
        Category::Other,
    ];

    /// Label used for this category in the data files and the legend.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ObjectAssociation => "Ассоциация с объектом",
            Category::OfficialNameAssociation => "Ассоциация с официальным названием",
            Category::VisualAssociation => "Визуальная ассоциация",
            Category::HistoricalAssociation => "Историческая ассоциация",
            Category::RealName => "Реальное название",
            Category::Other => "Другое",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Category::ObjectAssociation => Rgb::from_hex(0xff7f00),
            Category::OfficialNameAssociation => Rgb::from_hex(0x377eb8),
            Category::VisualAssociation => Rgb::from_hex(0x4daf4a),
            Category::HistoricalAssociation => Rgb::from_hex(0xe41a1c),
            Category::RealName => Rgb::from_hex(0x984ea3),
            Category::Other => Rgb::from_hex(0x999999),
        }
    }

    /// Exact match on the data label; anything else is unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Color for an optional category, gray for unknown ones.
    pub fn color_or_fallback(category: Option<Category>) -> Rgb {
        category.map_or(Rgb::FALLBACK, |c| c.color())
    }
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: Rgb,
}

/// All categories in table order.
pub fn legend() -> Vec<LegendEntry> {
    Category::ALL.iter()
        .map(|c| LegendEntry { label: c.label(), color: c.color() })
        .collect()
}
