//! Console rendering of the inventory report.
//!
//! This pass owns all report output. The operator-facing text is Spanish:
//! the tool's JSON keys and console report are one legacy contract and the
//! site-planning operators read both.

use std::io::{self, Write};

use crate::inventory::report::Report;

/// Console preview caps per category. The JSON output is never truncated;
/// these bound console noise only. Layers are always printed in full.
pub const LINE_PREVIEW: usize = 5;
pub const POLYLINE_PREVIEW: usize = 5;
pub const CIRCLE_PREVIEW: usize = 5;
pub const ARC_PREVIEW: usize = 3;
pub const TEXT_PREVIEW: usize = 10;
pub const BLOCK_PREVIEW: usize = 5;

/// Width of the banner rules
const RULE_WIDTH: usize = 70;

/// Render the whole report: banner, per-category sections, summary block
pub fn render(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "🔍 ANÁLISIS COMPLETO DEL ARCHIVO DWG")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    render_lines(report, out)?;
    render_polylines(report, out)?;
    render_circles(report, out)?;
    render_arcs(report, out)?;
    render_texts(report, out)?;
    render_blocks(report, out)?;
    render_layers(report, out)?;
    render_summary(report, out)?;

    Ok(())
}

fn render_lines(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n📍 Analizando LÍNEAS...")?;
    writeln!(out, "   Total de líneas: {}", report.lines.len())?;

    for record in report.lines.iter().take(LINE_PREVIEW) {
        writeln!(
            out,
            "   Línea {}: ({:.2}, {:.2}) → ({:.2}, {:.2}) [Capa: {}]",
            record.id, record.start.0, record.start.1, record.end.0, record.end.1, record.layer
        )?;
    }
    render_remainder(report.lines.len(), LINE_PREVIEW, "líneas", out)
}

fn render_polylines(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n📍 Analizando POLILÍNEAS...")?;
    writeln!(out, "   Total de polilíneas: {}", report.polylines.len())?;

    for record in report.polylines.iter().take(POLYLINE_PREVIEW) {
        writeln!(
            out,
            "   Polilínea {}: {} puntos, Cerrada: {}, Capa: {}",
            record.id, record.point_count, record.closed, record.layer
        )?;
    }
    render_remainder(report.polylines.len(), POLYLINE_PREVIEW, "polilíneas", out)
}

fn render_circles(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n📍 Analizando CÍRCULOS...")?;
    writeln!(out, "   Total de círculos: {}", report.circles.len())?;

    for record in report.circles.iter().take(CIRCLE_PREVIEW) {
        writeln!(
            out,
            "   Círculo {}: Centro ({:.2}, {:.2}), Radio: {:.2}, Capa: {}",
            record.id, record.center.0, record.center.1, record.radius, record.layer
        )?;
    }
    render_remainder(report.circles.len(), CIRCLE_PREVIEW, "círculos", out)
}

fn render_arcs(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n📍 Analizando ARCOS...")?;
    writeln!(out, "   Total de arcos: {}", report.arcs.len())?;

    for record in report.arcs.iter().take(ARC_PREVIEW) {
        writeln!(
            out,
            "   Arco {}: Centro ({:.2}, {:.2}), Radio: {:.2}, Capa: {}",
            record.id, record.center.0, record.center.1, record.radius, record.layer
        )?;
    }
    render_remainder(report.arcs.len(), ARC_PREVIEW, "arcos", out)
}

fn render_texts(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n📍 Analizando TEXTOS...")?;
    writeln!(out, "   Total de textos: {}", report.texts.len())?;

    for record in report.texts.iter().take(TEXT_PREVIEW) {
        writeln!(
            out,
            "   Texto {}: '{}' en ({:.2}, {:.2}), Capa: {}",
            record.id, record.content, record.position.0, record.position.1, record.layer
        )?;
    }
    render_remainder(report.texts.len(), TEXT_PREVIEW, "textos", out)
}

fn render_blocks(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n📍 Analizando BLOQUES...")?;
    writeln!(out, "   Total de bloques insertados: {}", report.blocks.len())?;

    for record in report.blocks.iter().take(BLOCK_PREVIEW) {
        writeln!(
            out,
            "   Bloque {}: '{}' en ({:.2}, {:.2}), Capa: {}",
            record.id, record.block_name, record.position.0, record.position.1, record.layer
        )?;
    }
    render_remainder(report.blocks.len(), BLOCK_PREVIEW, "bloques", out)
}

fn render_layers(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n📍 Analizando CAPAS...")?;
    writeln!(out, "   Total de capas: {}", report.layers.len())?;

    for (index, record) in report.layers.iter().enumerate() {
        writeln!(
            out,
            "   Capa {}: '{}' (Color: {}, Linetype: {})",
            index, record.name, record.color, record.linetype
        )?;
    }
    Ok(())
}

fn render_summary(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "📊 RESUMEN DEL ANÁLISIS")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Líneas:        {}", report.lines.len())?;
    writeln!(out, "Polilíneas:    {}", report.polylines.len())?;
    writeln!(out, "Círculos:      {}", report.circles.len())?;
    writeln!(out, "Arcos:         {}", report.arcs.len())?;
    writeln!(out, "Textos:        {}", report.texts.len())?;
    writeln!(out, "Bloques:       {}", report.blocks.len())?;
    writeln!(out, "Capas:         {}", report.layers.len())?;

    let bounds = &report.bounds;
    writeln!(out, "\n📐 LÍMITES DEL DIBUJO:")?;
    writeln!(out, "   X: {:.2} → {:.2}", bounds.min_x, bounds.max_x)?;
    writeln!(out, "   Y: {:.2} → {:.2}", bounds.min_y, bounds.max_y)?;
    writeln!(out, "   Ancho:  {:.2} m", bounds.width())?;
    writeln!(out, "   Alto:   {:.2} m", bounds.height())?;

    Ok(())
}

/// Emit the "... y N más" line when a category exceeds its preview cap
fn render_remainder(
    total: usize,
    preview: usize,
    category: &str,
    out: &mut dyn Write,
) -> io::Result<()> {
    if total > preview {
        writeln!(out, "   ... y {} {} más", total - preview, category)?;
    }
    Ok(())
}
