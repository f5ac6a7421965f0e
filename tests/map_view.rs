// End-to-end tests: data files on disk -> loader -> view events -> labels, styles, panel, SVG.

use std::path::Path;

use vernamap::{
    load::{self, DirSource},
    Changes, LayerKind, MapConfig, MapView, PanelControl, Selection, SvgOptions, ViewEvent,
};

const POINTS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [56.2455, 58.0105]},
     "properties": {"name": "Слон", "original_name": "Театр оперы и балета", "Тип названия": "Визуальная ассоциация",
                    "explainer": "Здание похоже на слона. Так его называют давно. Особенно студенты. И таксисты тоже."}},
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [56.2300, 58.0000]},
     "properties": {"Тип названия": ""}}
  ]
}"#;

const LINES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[56.20, 58.00], [56.26, 58.02]]},
     "properties": {"name": "Компрос", "Тип названия": "Историческая ассоциация", "explainer": "Одно. Два. Три."}}
  ]
}"#;

const DISTRICTS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[56.25, 58.01], [56.26, 58.01], [56.26, 58.02], [56.25, 58.02], [56.25, 58.01]]]},
     "properties": {"name": "Квартальчик", "Тип названия": "Другое"}},
    {"type": "Feature", "geometry": {"type": "MultiPolygon", "coordinates": [[[[56.10, 57.95], [56.20, 57.95], [56.20, 58.00], [56.10, 58.00], [56.10, 57.95]]]]},
     "properties": {"name": "Заречье", "Тип названия": "Реальное название"}},
    {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[56.30, 58.05], [56.40, 58.05], [56.40, 58.10], [56.30, 58.05]]]},
     "properties": {"Тип названия": "Неизвестно"}}
  ]
}"#;

fn write_data(root: &Path, with_lines: bool) {
    let data = root.join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("points.geojson"), POINTS).unwrap();
    std::fs::write(data.join("districts.geojson"), DISTRICTS).unwrap();
    if with_lines {
        std::fs::write(data.join("lines.geojson"), LINES).unwrap();
    }
}

fn open(root: &Path) -> MapView {
    let config = MapConfig::default();
    let events = load::load_layers(&DirSource::new(root), &config);
    let mut view = MapView::new(config);
    view.handle_all(events);
    view
}

fn label_names(view: &MapView) -> Vec<String> {
    view.labels().labels().iter().map(|l| l.text.clone()).collect()
}

#[test]
fn loads_all_layers_from_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), true);
    let view = open(dir.path());

    assert_eq!(view.layer(LayerKind::Points).map(|fc| fc.len()), Some(2));
    assert_eq!(view.layer(LayerKind::Lines).map(|fc| fc.len()), Some(1));
    assert_eq!(view.layer(LayerKind::Districts).map(|fc| fc.len()), Some(3));
}

#[test]
fn missing_file_leaves_only_that_layer_absent() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), false);
    let view = open(dir.path());

    assert!(view.layer(LayerKind::Lines).is_none());
    assert!(view.layer(LayerKind::Points).is_some());
    assert_eq!(label_names(&view), vec!["Заречье"]);
    assert!(view.to_svg_string(&SvgOptions::default()).is_ok());
}

#[test]
fn loads_arrive_in_any_order() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), true);
    let config = MapConfig::default();
    let mut events = load::load_layers(&DirSource::new(dir.path()), &config);
    events.reverse();

    let mut view = MapView::new(config);
    view.handle(ViewEvent::ZoomChanged(16.0));
    assert!(view.labels().is_empty());

    let changes = view.handle_all(events);
    assert!(changes.layers && changes.labels);
    assert_eq!(label_names(&view), vec!["Квартальчик", "Заречье"]);
}

#[test]
fn labels_follow_zoom_without_stale_entries() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), true);
    let mut view = open(dir.path());

    assert_eq!(label_names(&view), vec!["Заречье"]);
    view.handle(ViewEvent::ZoomChanged(15.0));
    assert_eq!(label_names(&view), vec!["Квартальчик", "Заречье"]);
    view.handle(ViewEvent::ZoomChanged(15.0));
    assert_eq!(label_names(&view), vec!["Квартальчик", "Заречье"]);
    view.handle(ViewEvent::ZoomChanged(10.0));
    assert_eq!(label_names(&view), vec!["Заречье"]);
}

#[test]
fn styles_follow_category_and_geometry() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), true);
    let view = open(dir.path());

    let districts = view.styled(LayerKind::Districts).collect::<Vec<_>>();
    assert_eq!(districts[0].style.color.to_string(), "#999999");
    assert_eq!(districts[1].style.color.to_string(), "#984ea3");
    assert_eq!(districts[2].style.color.to_string(), "#cccccc");
    assert!(districts.iter().all(|s| s.style.fill_opacity == 0.4 && s.style.weight == 1.0));

    let points = view.styled(LayerKind::Points).collect::<Vec<_>>();
    assert_eq!(points[1].style.color.to_string(), "#cccccc");
    assert!(points.iter().all(|s| s.style.fill_opacity == 1.0 && s.style.weight == 2.0 && s.style.radius == Some(6.0)));
}

#[test]
fn selection_scenario() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), true);
    let mut view = open(dir.path());

    let elephant = view.find_by_name("Слон").unwrap();
    let street = view.find_by_name("Компрос").unwrap();

    view.handle(ViewEvent::Click(elephant));
    assert_eq!(view.selection(), Selection::Selected(elephant));
    let panel = view.panel().unwrap();
    assert_eq!(panel.original_name.as_deref(), Some("Театр оперы и балета"));
    assert_eq!(panel.original_name_color.to_string(), "#984ea3");
    assert_eq!(panel.body, "Здание похоже на слона. Так его называют давно. Особенно студенты.");
    assert_eq!(panel.control, Some(PanelControl::Expand));
    assert_eq!(panel.category.as_deref(), Some("Визуальная ассоциация"));

    view.handle(ViewEvent::Expand);
    assert_eq!(view.selection(), Selection::Expanded(elephant));

    view.handle(ViewEvent::Click(street));
    assert_eq!(view.selection(), Selection::Selected(street));
    let panel = view.panel().unwrap();
    assert_eq!(panel.body, "Одно. Два. Три.");
    assert_eq!(panel.control, None);
    assert_eq!(view.handle(ViewEvent::Expand), Changes::NONE);

    view.handle(ViewEvent::Close);
    assert_eq!(view.selection(), Selection::Idle);
    assert!(view.selected_feature().is_none());
}

#[test]
fn unnamed_features_are_clickable_but_have_no_tooltip() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), true);
    let mut view = open(dir.path());

    let unnamed = vernamap::FeatureRef::new(LayerKind::Points, 1);
    assert!(view.tooltip(unnamed).is_none());
    assert!(view.handle(ViewEvent::Click(unnamed)).panel);
    assert_eq!(view.panel().unwrap().title, "");
}
