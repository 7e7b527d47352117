//! Drawing extents accumulator

use serde::Serialize;

/// Running 2D extents over all geometry in a drawing.
///
/// Starts at the +infinity/−infinity sentinels so the first folded point
/// always wins. A drawing with no geometric entities keeps the sentinels;
/// callers surface that case instead of normalizing it away. Non-finite
/// sentinels serialize as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extents {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extents {
    /// Create empty extents at the sentinel values
    pub fn new() -> Self {
        Extents {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Fold one point into the extents.
    ///
    /// Commutative and associative: the final extents do not depend on
    /// the order in which points are folded.
    pub fn update(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Width of the extents (max_x − min_x).
    ///
    /// Negative infinity while no point has been folded in.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the extents (max_y − min_y)
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True once at least one point has been folded in
    pub fn has_points(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

impl Default for Extents {
    fn default() -> Self {
        Self::new()
    }
}
