//! Drawing inventory: record extraction, console report and JSON output.
//!
//! The pipeline is a single pass in three decoupled stages: [`build_report`]
//! walks the parsed document once and produces pure records while folding
//! geometry into the drawing extents; [`render`] owns all console output,
//! applying the per-category preview caps; [`save_report`] writes the full,
//! untruncated report as JSON next to the input drawing.

pub mod extract;
pub mod format;
pub mod json;
pub mod report;

pub use extract::build_report;
pub use format::render;
pub use json::{save_report, REPORT_FILE_NAME};
pub use report::{
    ArcRecord, CircleRecord, InsertRecord, LayerRecord, LineRecord, PolylineRecord, Report,
    TextRecord,
};
