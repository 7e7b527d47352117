//! Arc entity

use super::{Entity, EntityCommon};
use crate::types::{Handle, Vector3};

/// An arc entity (portion of a circle).
///
/// Angles are in degrees, counterclockwise from the X axis, exactly as
/// stored in DXF group codes 50 and 51.
#[derive(Debug, Clone)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point of the arc
    pub center: Vector3,
    /// Radius of the arc
    pub radius: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
}

impl Arc {
    /// Create a new quarter arc at the origin
    pub fn new() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: 90.0,
        }
    }

    /// Create a new arc with center, radius, and angles
    pub fn from_center_radius_angles(
        center: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Self::new()
        }
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Arc {
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
        "ARC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_creation() {
        let arc = Arc::from_center_radius_angles(Vector3::new(0.0, 0.0, 0.0), 2.0, 45.0, 180.0);
        assert_eq!(arc.radius, 2.0);
        assert_eq!(arc.start_angle, 45.0);
        assert_eq!(arc.end_angle, 180.0);
        assert_eq!(arc.entity_type(), "ARC");
    }
}
