//! One-shot inventory of a single DXF drawing.
//!
//! Reads the fixed input drawing, prints the per-category census with the
//! drawing extents and writes the full report to `analisis-dwg.json` next
//! to the input. Exits with status 1 when the drawing cannot be loaded;
//! a failed report write is only logged and does not change the status.

use std::io;
use std::path::Path;
use std::process;

use anyhow::Context;

use dxf_inventory::inventory::{build_report, render, save_report};
use dxf_inventory::{DxfError, DxfReader};

/// The drawing this tool inspects. Deliberately fixed: the tool is a
/// one-shot inspection utility with no CLI surface.
const INPUT_FILE: &str = "primera_etapa.dxf";

fn main() {
    if let Err(err) = run() {
        eprintln!("❌ {err:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let document = match DxfReader::from_file(INPUT_FILE).and_then(|reader| reader.read()) {
        Ok(document) => document,
        Err(DxfError::InputNotFound { path }) => {
            println!("❌ Archivo no encontrado: {}", path.display());
            process::exit(1);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("no se pudo cargar {INPUT_FILE}"));
        }
    };
    println!("✅ Archivo DWG cargado: {INPUT_FILE}");

    let report = build_report(&document);

    let mut stdout = io::stdout().lock();
    render(&report, &mut stdout).context("error escribiendo el reporte en consola")?;

    // The console summary is already out; a failed write is only reported.
    match save_report(&report, Path::new(INPUT_FILE)) {
        Ok(path) => println!("\n💾 Análisis guardado en: {}", path.display()),
        Err(err) => println!("❌ Error guardando análisis: {err}"),
    }

    println!("\n✅ Análisis completado");
    Ok(())
}
