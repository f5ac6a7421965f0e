//! Geometry drawing for SVG map snapshots.

use std::io::Write;

use anyhow::Result;
use geo::{Coord, Geometry, LineString, Polygon};

use crate::style::Style;
use super::Projection;

/// Append a ring or line as an SVG subpath: "M x,y L x,y ..." (closed with Z if `close`).
fn push_subpath(line: &LineString<f64>, close: bool, project: &Projection, out: &mut String) {
    let mut coords = line.0.iter().map(|c| project(c));
    let Some((x, y)) = coords.next() else { return };
    out.push_str(&format!(" M{x:.2},{y:.2}"));
    for (x, y) in coords {
        out.push_str(&format!(" L{x:.2},{y:.2}"));
    }
    if close { out.push('Z') }
}

fn push_polygon(polygon: &Polygon<f64>, project: &Projection, out: &mut String) {
    push_subpath(polygon.exterior(), true, project, out);
    for interior in polygon.interiors() {
        push_subpath(interior, true, project, out);
    }
}

/// Build a compact SVG path string for the areal parts of a geometry (exteriors + holes).
pub(crate) fn area_path(geometry: &Geometry<f64>, project: &Projection) -> String {
    let mut out = String::new();
    match geometry {
        Geometry::Polygon(p) => push_polygon(p, project, &mut out),
        Geometry::MultiPolygon(mp) => mp.iter().for_each(|p| push_polygon(p, project, &mut out)),
        Geometry::Rect(r) => push_polygon(&r.to_polygon(), project, &mut out),
        Geometry::Triangle(t) => push_polygon(&t.to_polygon(), project, &mut out),
        _ => {}
    }
    out
}

/// Build an open SVG path string for the linear parts of a geometry.
pub(crate) fn line_path(geometry: &Geometry<f64>, project: &Projection) -> String {
    let mut out = String::new();
    match geometry {
        Geometry::Line(l) => push_subpath(&LineString::from(vec![l.start, l.end]), false, project, &mut out),
        Geometry::LineString(ls) => push_subpath(ls, false, project, &mut out),
        Geometry::MultiLineString(mls) => mls.iter().for_each(|ls| push_subpath(ls, false, project, &mut out)),
        _ => {}
    }
    out
}

fn style_attrs(style: &Style) -> String {
    let opacity = style.opacity.map(|o| format!(r#" stroke-opacity="{o}""#)).unwrap_or_default();
    format!(
        r#"stroke="{}" stroke-width="{}"{opacity} fill="{}" fill-opacity="{}""#,
        style.color, style.weight, style.fill_color, style.fill_opacity,
    )
}

fn draw_marker(writer: &mut impl Write, coord: &Coord<f64>, style: &Style, project: &Projection) -> Result<()> {
    let (cx, cy) = project(coord);
    let r = style.radius.unwrap_or(6.0);
    writeln!(writer, r#"<circle class="feature" cx="{cx:.2}" cy="{cy:.2}" r="{r}" {}/>"#, style_attrs(style))?;
    Ok(())
}

/// Draw one styled geometry: areas as filled paths, lines as stroked paths, points as circle markers.
pub(crate) fn draw_geometry(writer: &mut impl Write, geometry: &Geometry<f64>, style: &Style, project: &Projection) -> Result<()> {
    match geometry {
        Geometry::Point(p) => draw_marker(writer, &p.0, style, project)?,
        Geometry::MultiPoint(mp) => {
            for p in mp { draw_marker(writer, &p.0, style, project)? }
        }
        Geometry::Line(_) | Geometry::LineString(_) | Geometry::MultiLineString(_) => {
            let d = line_path(geometry, project);
            if !d.is_empty() {
                writeln!(writer, r#"<path class="feature" d="{d}" stroke="{}" stroke-width="{}" fill="none"/>"#, style.color, style.weight)?;
            }
        }
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => {
            let d = area_path(geometry, project);
            if !d.is_empty() {
                writeln!(writer, r#"<path class="feature" d="{d}" fill-rule="evenodd" {}/>"#, style_attrs(style))?;
            }
        }
        Geometry::GeometryCollection(gc) => {
            for part in gc { draw_geometry(writer, part, style, project)? }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, point, polygon};

    fn identity(c: &Coord<f64>) -> (f64, f64) { (c.x, c.y) }

    fn style() -> Style {
        Style {
            color: crate::style::Rgb::from_hex(0x984ea3),
            fill_color: crate::style::Rgb::from_hex(0x984ea3),
            fill_opacity: 0.4,
            opacity: None,
            weight: 1.0,
            radius: None,
        }
    }

    fn render(geometry: Geometry<f64>) -> String {
        let mut out = Vec::new();
        draw_geometry(&mut out, &geometry, &style(), &identity).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn polygons_become_closed_paths() {
        let svg = render(Geometry::Polygon(polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0)]));
        assert!(svg.contains(r#"d=" M0.00,0.00 L2.00,0.00 L2.00,2.00 L0.00,0.00Z""#), "{svg}");
        assert!(svg.contains(r##"fill="#984ea3" fill-opacity="0.4""##));
    }

    #[test]
    fn lines_are_open_and_unfilled() {
        let svg = render(Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]));
        assert!(svg.contains(r#"d=" M0.00,0.00 L1.00,1.00""#));
        assert!(svg.contains(r#"fill="none""#));
    }

    #[test]
    fn points_are_circles() {
        let svg = render(Geometry::Point(point!(x: 3.0, y: 4.0)));
        assert!(svg.starts_with(r#"<circle class="feature" cx="3.00" cy="4.00" r="6""#), "{svg}");
    }
}
