//! # dxf-inventory
//!
//! A one-shot inventory tool for DXF drawings. Given a drawing, it builds
//! a census of the geometric entities it contains (lines, lightweight
//! polylines, circles, arcs, text labels, block insertions) and the layer
//! table, folds all geometry into the drawing extents, prints a console
//! report and writes the full result as JSON next to the input.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_inventory::inventory::{build_report, render, save_report};
//! use dxf_inventory::DxfReader;
//!
//! let doc = DxfReader::from_file("plano.dxf")?.read()?;
//! let report = build_report(&doc);
//! render(&report, &mut std::io::stdout().lock())?;
//! save_report(&report, std::path::Path::new("plano.dxf"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `io::dxf` — ASCII DXF reading: a code/value pair stream and a section
//!   reader covering the LAYER table and the six supported entity types
//! - `document` — the parsed drawing: layer table plus entities in file
//!   order
//! - `inventory` — pure record extraction with extents folding, the
//!   console formatting pass, and the JSON serializer
//!
//! Extraction is decoupled from presentation: extractors return records,
//! the formatter owns every console line, and preview truncation is a
//! display concern only — the JSON report is never truncated.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod inventory;
pub mod io;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Color, DxfVersion, Extents, Handle, Vector2, Vector3};

// Re-export entity types
pub use entities::{Arc, Circle, Entity, EntityType, Insert, Line, LwPolyline, Text};

// Re-export table types
pub use tables::{Layer, LayerFlags, Table, TableEntry};

// Re-export document
pub use document::CadDocument;

// Re-export I/O types
pub use io::dxf::DxfReader;

// Re-export the inventory surface
pub use inventory::{build_report, render, save_report, Report};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_cad_document_creation() {
        let doc = CadDocument::new();
        assert_eq!(doc.version, DxfVersion::AC1032);

        let doc2 = CadDocument::with_version(DxfVersion::AC1015);
        assert_eq!(doc2.version, DxfVersion::AC1015);
    }
}
