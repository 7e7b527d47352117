//! I/O module for reading CAD drawings in DXF format

pub mod dxf;

pub use dxf::DxfReader;
