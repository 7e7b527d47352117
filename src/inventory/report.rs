//! Inventory report data model.
//!
//! The JSON names are a legacy contract consumed by downstream site-planning
//! scripts, so the Spanish keys are pinned with serde renames. Point tuples
//! serialize as two-element arrays.

use serde::Serialize;

use crate::types::Extents;

/// One LINE entity
#[derive(Debug, Clone, Serialize)]
pub struct LineRecord {
    /// Zero-based index within the category
    pub id: usize,
    /// Start point
    pub start: (f64, f64),
    /// End point
    pub end: (f64, f64),
    /// Layer name
    pub layer: String,
    /// Euclidean distance between the endpoints
    pub length: f64,
}

/// One LWPOLYLINE entity
#[derive(Debug, Clone, Serialize)]
pub struct PolylineRecord {
    /// Zero-based index within the category
    pub id: usize,
    /// Layer name
    pub layer: String,
    /// Total vertex count
    #[serde(rename = "puntos")]
    pub point_count: usize,
    /// Closed flag (flag word bit 0)
    #[serde(rename = "cerrada")]
    pub closed: bool,
    /// Leading vertices only; the full list stays on the entity
    #[serde(rename = "coordenadas")]
    pub leading_vertices: Vec<(f64, f64)>,
}

/// One CIRCLE entity
#[derive(Debug, Clone, Serialize)]
pub struct CircleRecord {
    /// Zero-based index within the category
    pub id: usize,
    /// Center point
    #[serde(rename = "centro")]
    pub center: (f64, f64),
    /// Radius
    #[serde(rename = "radio")]
    pub radius: f64,
    /// Layer name
    pub layer: String,
}

/// One ARC entity
#[derive(Debug, Clone, Serialize)]
pub struct ArcRecord {
    /// Zero-based index within the category
    pub id: usize,
    /// Center point
    #[serde(rename = "centro")]
    pub center: (f64, f64),
    /// Radius
    #[serde(rename = "radio")]
    pub radius: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
    /// Layer name
    pub layer: String,
}

/// One TEXT entity
#[derive(Debug, Clone, Serialize)]
pub struct TextRecord {
    /// Zero-based index within the category
    pub id: usize,
    /// Text content
    #[serde(rename = "contenido")]
    pub content: String,
    /// Insertion point
    #[serde(rename = "posicion")]
    pub position: (f64, f64),
    /// Layer name
    pub layer: String,
}

/// One INSERT entity (block reference)
#[derive(Debug, Clone, Serialize)]
pub struct InsertRecord {
    /// Zero-based index within the category
    pub id: usize,
    /// Name of the referenced block
    #[serde(rename = "nombre")]
    pub block_name: String,
    /// Insertion point
    #[serde(rename = "posicion")]
    pub position: (f64, f64),
    /// Layer name
    pub layer: String,
}

/// One layer table entry
#[derive(Debug, Clone, Serialize)]
pub struct LayerRecord {
    /// Layer name
    #[serde(rename = "nombre")]
    pub name: String,
    /// ACI color index
    pub color: i16,
    /// Line type name
    pub linetype: String,
    /// Locked flag (flag word bit 2)
    pub locked: bool,
}

/// Full inventory of a drawing.
///
/// Built once per run and not mutated afterwards. Collections keep file
/// order; `bounds` is the extents over all geometry.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// LINE records
    #[serde(rename = "lineas")]
    pub lines: Vec<LineRecord>,
    /// LWPOLYLINE records
    #[serde(rename = "polilineas")]
    pub polylines: Vec<PolylineRecord>,
    /// CIRCLE records
    #[serde(rename = "circulos")]
    pub circles: Vec<CircleRecord>,
    /// ARC records
    #[serde(rename = "arcos")]
    pub arcs: Vec<ArcRecord>,
    /// TEXT records
    #[serde(rename = "textos")]
    pub texts: Vec<TextRecord>,
    /// INSERT records
    #[serde(rename = "bloques")]
    pub blocks: Vec<InsertRecord>,
    /// Layer table records
    #[serde(rename = "capas")]
    pub layers: Vec<LayerRecord>,
    /// Drawing extents over all geometry
    pub bounds: Extents,
}

impl Report {
    /// Create an empty report with sentinel bounds
    pub fn new() -> Self {
        Report {
            lines: Vec::new(),
            polylines: Vec::new(),
            circles: Vec::new(),
            arcs: Vec::new(),
            texts: Vec::new(),
            blocks: Vec::new(),
            layers: Vec::new(),
            bounds: Extents::new(),
        }
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
