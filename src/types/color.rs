//! AutoCAD Color Index (ACI) representation

use std::fmt;

/// An entity or layer color, as stored in DXF group code 62.
///
/// Index 0 means "by block", 256 means "by layer", 1-255 are the ACI
/// palette. A negative layer color means the layer is turned off; the
/// absolute value is still the layer's color index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
}

impl Color {
    /// White (index 7), the default layer color
    pub const WHITE: Color = Color::Index(7);

    /// Create a color from a raw DXF color index
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ if index < 0 => Color::Index((-index).min(255) as u8),
            _ => Color::WHITE,
        }
    }

    /// The ACI index of this color (0 = by block, 256 = by layer)
    pub fn index(&self) -> i16 {
        match self {
            Color::ByBlock => 0,
            Color::ByLayer => 256,
            Color::Index(i) => *i as i16,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "{}", i),
        }
    }
}
