//! JSON serialization of the inventory report

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DxfError, Result};
use crate::inventory::report::Report;

/// Name of the report file written next to the input drawing
pub const REPORT_FILE_NAME: &str = "analisis-dwg.json";

/// Write the full report next to the input drawing.
///
/// Nothing is truncated here; the console preview caps do not apply.
/// Output is pretty-printed UTF-8 with non-ASCII characters preserved
/// literally, and is byte-identical across runs on the same input.
/// Returns the path of the written file.
pub fn save_report(report: &Report, input: &Path) -> Result<PathBuf> {
    let directory = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let path = directory.join(REPORT_FILE_NAME);

    let body = serde_json::to_string_pretty(report)?;
    fs::write(&path, body).map_err(|source| DxfError::OutputWrite {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
