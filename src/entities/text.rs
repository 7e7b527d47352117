//! Single-line text entity

use super::{Entity, EntityCommon};
use crate::types::{Handle, Vector3};

/// A single-line text entity
#[derive(Debug, Clone)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content
    pub value: String,
    /// Insertion point
    pub insertion_point: Vector3,
    /// Text height
    pub height: f64,
    /// Rotation angle in degrees
    pub rotation: f64,
}

impl Text {
    /// Create a new empty text at the origin
    pub fn new() -> Self {
        Text {
            common: EntityCommon::new(),
            value: String::new(),
            insertion_point: Vector3::ZERO,
            height: 1.0,
            rotation: 0.0,
        }
    }

    /// Create a text with content at an insertion point
    pub fn with_value(value: impl Into<String>, insertion_point: Vector3) -> Self {
        Text {
            value: value.into(),
            insertion_point,
            ..Self::new()
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Text {
    fn handle(&self) -> Handle {
        self.common.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.common.handle = handle;
    }

    fn layer(&self) -> &str {
        &self.common.layer
    }

    fn set_layer(&mut self, layer: String) {
        self.common.layer = layer;
    }

    fn entity_type(&self) -> &'static str {
        "TEXT"
    }
}
