//! Map view configuration, optionally read from a TOML file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{feature::LayerKind, label::LabelPolicy};

const DEFAULT_ABOUT: [&str; 5] = [
    "Вернакулярная карта города — это субъективная карта, отражающая восприятие, ассоциации и повседневный опыт местными жителями, а не официальную географию. Тем не менее, иногда они могут совпадать или быть производными друг от друга.",
    "Для создания данной вернакулярной карты было инициировано несколько опросов жителей города о том, какие разговорные названия они употребляют в обычной жизни по отношению к разным объектам в городе...",
    "Опросы происходили в telegram-каналах:\n– «Без поддержки министерства культуры»\n– «Пермь 36,6»\n– репост: Надежда Агишева",
    "Информанты: журналист Иван Козлов («Новая вкладка»), активист Юрий Бобров.",
    "Важно: на карте не все названия, некоторые слишком локальны или спорны.",
];

/// Everything the view needs besides the three data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Data file locations, relative to the data source's base.
    pub points_path: String,
    pub lines_path: String,
    pub districts_path: String,

    /// Initial map center as [lat, lon].
    pub center: [f64; 2],
    pub initial_zoom: f64,

    /// Tile provider template; handed to the rendering surface as-is.
    pub tile_url: String,
    pub attribution: String,

    pub title: String,
    pub about: Vec<String>,

    pub label_min_zoom: f64,
    pub label_min_area_m2: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        let policy = LabelPolicy::default();
        Self {
            points_path: "data/points.geojson".into(),
            lines_path: "data/lines.geojson".into(),
            districts_path: "data/districts.geojson".into(),
            center: [58.01, 56.25],
            initial_zoom: 12.0,
            tile_url: "https://server.arcgisonline.com/ArcGIS/rest/services/Canvas/World_Light_Gray_Base/MapServer/tile/{z}/{y}/{x}".into(),
            attribution: "Tiles © Esri".into(),
            title: "Вернакулярная карта Перми".into(),
            about: DEFAULT_ABOUT.iter().map(|p| p.to_string()).collect(),
            label_min_zoom: policy.min_zoom,
            label_min_area_m2: policy.min_area_m2,
        }
    }
}

impl MapConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("[config] invalid map configuration")
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[config] failed to read {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("[config] in {}", path.display()))
    }

    /// Relative path of the document backing `kind`.
    pub fn path(&self, kind: LayerKind) -> &str {
        match kind {
            LayerKind::Points => &self.points_path,
            LayerKind::Lines => &self.lines_path,
            LayerKind::Districts => &self.districts_path,
        }
    }

    pub fn label_policy(&self) -> LabelPolicy {
        LabelPolicy::new(self.label_min_zoom, self.label_min_area_m2)
    }
}
