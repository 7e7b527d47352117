//! Line entity

use super::{Entity, EntityCommon};
use crate::types::{Handle, Vector3};

/// A line entity defined by two endpoints
#[derive(Debug, Clone)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line
    pub start: Vector3,
    /// End point of the line
    pub end: Vector3,
}

impl Line {
    /// Create a new line from origin to origin
    pub fn new() -> Self {
        Line {
            common: EntityCommon::new(),
            start: Vector3::ZERO,
            end: Vector3::ZERO,
        }
    }

    /// Create a new line between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Line {
            start,
            end,
            ..Self::new()
        }
    }

    /// Create a new line from coordinates
    pub fn from_coords(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Line::from_points(Vector3::new(x1, y1, z1), Vector3::new(x2, y2, z2))
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Line {
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
        "LINE"
    }
}
