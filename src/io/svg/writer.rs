//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// String-based SVG writer for WASM/browser use
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

impl SvgWriter {
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

/// Write the XML declaration, the opening <svg> tag and a background fill.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, width: f64, height: f64, background: &str) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"##)?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="{background}"/>"##)?;
    Ok(())
}

/// Write the stylesheet shared by all map snapshot elements.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    text {{ font-family: "Helvetica Neue", Arial, sans-serif; }}
    .feature {{ stroke-linejoin: round; stroke-linecap: round; }}
    .feature-label {{ font-size: 12px; font-weight: 600; fill: #333333; text-anchor: middle; dominant-baseline: middle; paint-order: stroke; stroke: #ffffff; stroke-width: 3px; }}
    .header {{ fill: #ffffff; }}
    .header-title {{ font-size: 24px; font-weight: 700; fill: #222222; text-anchor: middle; }}
    .box {{ fill: #ffffff; fill-opacity: 0.95; stroke: #bbbbbb; stroke-width: 1; }}
    .legend-title {{ font-size: 14px; font-weight: 700; fill: #222222; }}
    .legend-label {{ font-size: 12px; fill: #333333; }}
    .panel-title {{ font-size: 18px; font-weight: 700; fill: #111111; }}
    .panel-original {{ font-size: 13px; font-style: italic; }}
    .panel-text {{ font-size: 13px; fill: #333333; }}
    .panel-type {{ font-size: 11px; fill: #777777; }}
    .panel-button {{ font-size: 12px; font-weight: 600; fill: #377eb8; }}
    .attribution {{ font-size: 10px; fill: #666666; text-anchor: end; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}
