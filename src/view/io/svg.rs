use std::{io::Write, path::Path};

use anyhow::Result;
use geo::{BoundingRect, Coord, Rect};

use crate::{
    feature::LayerKind,
    io::svg::{
        draw_geometry, escape_xml, wrap_text, write_svg_footer, write_svg_header, write_svg_styles,
        SvgStringWriter, SvgWriter, Viewport,
    },
    style::{legend, LEGEND_TITLE},
    view::{MapView, PanelView},
};

const HEADER_HEIGHT: f64 = 56.0;
const PANEL_WIDTH: f64 = 320.0;
const LINE_HEIGHT: f64 = 18.0;
/// Characters per wrapped line at the panel's body font size.
const PANEL_WRAP: usize = 44;
/// Half-extent in degrees of the fallback frame used when no layer has loaded.
const EMPTY_EXTENT: f64 = 0.1;

/// Canvas settings for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    pub width: f64,
    pub margin: f64,
}

impl Default for SvgOptions {
    fn default() -> Self { Self { width: 1200.0, margin: 20.0 } }
}

impl MapView {
    /// Write a snapshot of the current view as an SVG file.
    pub fn to_svg(&self, path: &Path, options: &SvgOptions) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        self.write_svg(&mut writer, options)?;
        writer.flush()?;
        Ok(())
    }

    /// Snapshot of the current view as an SVG string.
    pub fn to_svg_string(&self, options: &SvgOptions) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.write_svg(&mut writer, options)?;
        writer.into_string()
    }

    /// Bounding box of every loaded geometry, or a small frame around the configured center.
    fn data_bounds(&self) -> Rect<f64> {
        LayerKind::ALL.iter()
            .filter_map(|&kind| self.layer(kind))
            .flat_map(|fc| fc.iter())
            .filter_map(|f| f.geometry()?.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
            .unwrap_or_else(|| {
                let [lat, lon] = self.config().center;
                Rect::new(
                    Coord { x: lon - EMPTY_EXTENT, y: lat - EMPTY_EXTENT },
                    Coord { x: lon + EMPTY_EXTENT, y: lat + EMPTY_EXTENT },
                )
            })
    }

    fn write_svg<W: Write>(&self, writer: &mut W, options: &SvgOptions) -> Result<()> {
        let width = options.width;
        let viewport = Viewport::fit(&self.data_bounds(), width, options.margin, HEADER_HEIGHT);
        let height = HEADER_HEIGHT + viewport.height();
        let project = move |coord: &Coord<f64>| viewport.project(coord);

        write_svg_header(writer, width, height, "#f2f2f0")?;
        write_svg_styles(writer)?;

        for kind in LayerKind::draw_order() {
            writeln!(writer, r#"<g id="{}">"#, kind.to_str())?;
            for styled in self.styled(kind) {
                if let Some(geometry) = styled.feature.geometry() {
                    draw_geometry(writer, geometry, &styled.style, &project)?;
                }
            }
            writeln!(writer, "</g>")?;
        }

        writeln!(writer, r#"<g id="labels">"#)?;
        for label in self.labels().labels() {
            let (x, y) = project(&label.anchor.0);
            writeln!(writer, r#"<text class="feature-label" x="{x:.2}" y="{y:.2}">{}</text>"#, escape_xml(&label.text))?;
        }
        writeln!(writer, "</g>")?;

        self.write_header_band(writer, width)?;
        write_legend(writer, options.margin, height - options.margin)?;
        writeln!(writer, r#"<text class="attribution" x="{:.2}" y="{:.2}">{}</text>"#,
            width - 6.0, height - 6.0, escape_xml(&self.config().attribution))?;

        if let Some(panel) = self.panel() {
            write_panel(writer, &panel, width - PANEL_WIDTH - options.margin, HEADER_HEIGHT + options.margin)?;
        }
        if let Some(about) = self.about() {
            write_about(writer, about, width, HEADER_HEIGHT + options.margin)?;
        }

        write_svg_footer(writer)
    }

    fn write_header_band<W: Write>(&self, writer: &mut W, width: f64) -> Result<()> {
        writeln!(writer, r#"<rect class="header" x="0" y="0" width="{width:.0}" height="{HEADER_HEIGHT}"/>"#)?;
        writeln!(writer, r#"<text class="header-title" x="{:.2}" y="36">{}</text>"#,
            width / 2.0, escape_xml(&self.config().title))?;
        Ok(())
    }
}

/// Legend box anchored at its bottom-left corner.
fn write_legend<W: Write>(writer: &mut W, left: f64, bottom: f64) -> Result<()> {
    let entries = legend();
    let box_height = 34.0 + entries.len() as f64 * 20.0;
    let top = bottom - box_height;

    writeln!(writer, r#"<g id="legend">"#)?;
    writeln!(writer, r#"<rect class="box" x="{left:.2}" y="{top:.2}" width="280" height="{box_height:.2}" rx="4"/>"#)?;
    writeln!(writer, r#"<text class="legend-title" x="{:.2}" y="{:.2}">{}</text>"#, left + 10.0, top + 22.0, LEGEND_TITLE)?;
    for (i, entry) in entries.iter().enumerate() {
        let y = top + 34.0 + i as f64 * 20.0;
        writeln!(writer, r#"<rect x="{:.2}" y="{y:.2}" width="14" height="14" fill="{}"/>"#, left + 10.0, entry.color)?;
        writeln!(writer, r#"<text class="legend-label" x="{:.2}" y="{:.2}">{}</text>"#, left + 32.0, y + 11.0, escape_xml(entry.label))?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

fn write_panel<W: Write>(writer: &mut W, panel: &PanelView, left: f64, top: f64) -> Result<()> {
    let body = wrap_text(&panel.body, PANEL_WRAP);
    let mut rows = 2 + body.len();
    if panel.original_name.is_some() { rows += 1 }
    if panel.control.is_some() || panel.category.is_some() { rows += 1 }
    let box_height = 24.0 + rows as f64 * LINE_HEIGHT;

    let x = left + 14.0;
    let mut y = top + 30.0;

    writeln!(writer, r#"<g id="info-panel" class="{}">"#, if panel.expanded { "expanded" } else { "collapsed" })?;
    writeln!(writer, r#"<rect class="box" x="{left:.2}" y="{top:.2}" width="{PANEL_WIDTH}" height="{box_height:.2}" rx="6"/>"#)?;
    writeln!(writer, r#"<text class="panel-button" x="{:.2}" y="{:.2}">×</text>"#, left + PANEL_WIDTH - 20.0, top + 20.0)?;
    writeln!(writer, r#"<text class="panel-title" x="{x:.2}" y="{y:.2}">{}</text>"#, escape_xml(&panel.title))?;

    if let Some(original) = &panel.original_name {
        y += LINE_HEIGHT;
        writeln!(writer, r#"<text class="panel-original" x="{x:.2}" y="{y:.2}" fill="{}">{}</text>"#,
            panel.original_name_color, escape_xml(original))?;
    }

    y += LINE_HEIGHT * 0.5;
    for line in &body {
        y += LINE_HEIGHT;
        writeln!(writer, r#"<text class="panel-text" x="{x:.2}" y="{y:.2}">{}</text>"#, escape_xml(line))?;
    }

    y += LINE_HEIGHT * 1.5;
    if let Some(control) = panel.control {
        writeln!(writer, r#"<text class="panel-button" x="{x:.2}" y="{y:.2}">{}</text>"#, control.label())?;
    }
    if let Some(category) = &panel.category {
        writeln!(writer, r#"<text class="panel-type" x="{:.2}" y="{y:.2}" text-anchor="end">{}</text>"#,
            left + PANEL_WIDTH - 14.0, escape_xml(category))?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

fn write_about<W: Write>(writer: &mut W, paragraphs: &[String], width: f64, top: f64) -> Result<()> {
    let box_width = 560.0_f64.min(width - 40.0);
    let wrap = (box_width / 7.5) as usize;
    let lines = paragraphs.iter()
        .flat_map(|p| wrap_text(p, wrap).into_iter().chain(std::iter::once(String::new())))
        .collect::<Vec<_>>();
    let left = (width - box_width) / 2.0;
    let box_height = 30.0 + lines.len() as f64 * LINE_HEIGHT;

    writeln!(writer, r#"<g id="about-panel">"#)?;
    writeln!(writer, r#"<rect class="box" x="{left:.2}" y="{top:.2}" width="{box_width:.2}" height="{box_height:.2}" rx="6"/>"#)?;
    writeln!(writer, r#"<text class="panel-button" x="{:.2}" y="{:.2}">×</text>"#, left + box_width - 20.0, top + 20.0)?;
    for (i, line) in lines.iter().enumerate() {
        let y = top + 30.0 + i as f64 * LINE_HEIGHT;
        writeln!(writer, r#"<text class="panel-text" x="{:.2}" y="{y:.2}">{}</text>"#, left + 16.0, escape_xml(line))?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}
