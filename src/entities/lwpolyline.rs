//! Lightweight polyline entity (2D polyline with bulges)

use bitflags::bitflags;

use super::{Entity, EntityCommon};
use crate::types::{Handle, Vector2};

bitflags! {
    /// LWPOLYLINE flag word (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LwPolylineFlags: i16 {
        /// Bit 0: the polyline is closed
        const CLOSED = 1;
        /// Bit 7: linetype pattern is generated continuously around vertices
        const PLINEGEN = 128;
    }
}

/// A vertex in a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Location of the vertex (2D)
    pub location: Vector2,
    /// Bulge value for arc segments: 0 = straight line,
    /// positive = counterclockwise arc, negative = clockwise arc
    pub bulge: f64,
}

impl LwVertex {
    /// Create a new straight-segment vertex
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            bulge: 0.0,
        }
    }

    /// Create a vertex from coordinates
    pub fn from_coords(x: f64, y: f64) -> Self {
        LwVertex::new(Vector2::new(x, y))
    }
}

/// A lightweight (2D) polyline entity
#[derive(Debug, Clone)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertices of the polyline
    pub vertices: Vec<LwVertex>,
    /// Flag word (closure, linetype generation)
    pub flags: LwPolylineFlags,
    /// Elevation (Z coordinate of the polyline plane)
    pub elevation: f64,
}

impl LwPolyline {
    /// Create a new empty lightweight polyline
    pub fn new() -> Self {
        LwPolyline {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            flags: LwPolylineFlags::empty(),
            elevation: 0.0,
        }
    }

    /// Create an open polyline through the given 2D points
    pub fn from_points(points: impl IntoIterator<Item = Vector2>) -> Self {
        LwPolyline {
            vertices: points.into_iter().map(LwVertex::new).collect(),
            ..Self::new()
        }
    }

    /// Whether the polyline is closed (flag bit 0)
    pub fn is_closed(&self) -> bool {
        self.flags.contains(LwPolylineFlags::CLOSED)
    }

    /// Mark the polyline as closed
    pub fn close(&mut self) {
        self.flags.insert(LwPolylineFlags::CLOSED);
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl Default for LwPolyline {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for LwPolyline {
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
        "LWPOLYLINE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_by_default() {
        let poly = LwPolyline::from_points([
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
        ]);
        assert_eq!(poly.vertex_count(), 3);
        assert!(!poly.is_closed());
    }

    #[test]
    fn test_close_sets_flag_bit() {
        let mut poly = LwPolyline::new();
        poly.close();
        assert!(poly.is_closed());
        assert_eq!(poly.flags.bits() & 1, 1);
    }

    #[test]
    fn test_flags_from_raw_bits() {
        // Other bits in the flag word are ignored by the accessor.
        let flags = LwPolylineFlags::from_bits_truncate(129);
        assert!(flags.contains(LwPolylineFlags::CLOSED));
        assert!(flags.contains(LwPolylineFlags::PLINEGEN));
    }
}
