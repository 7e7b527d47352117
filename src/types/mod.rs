//! Core value types shared across the document model

pub mod bounds;
pub mod color;
pub mod handle;
pub mod vector;
pub mod version;

pub use bounds::Extents;
pub use color::Color;
pub use handle::Handle;
pub use vector::{Vector2, Vector3};
pub use version::DxfVersion;
