//! Layer table entry

use bitflags::bitflags;

use super::TableEntry;
use crate::types::{Color, Handle};

bitflags! {
    /// LAYER flag word (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LayerFlags: i16 {
        /// Bit 0: layer is frozen
        const FROZEN = 1;
        /// Bit 1: layer is frozen by default in new viewports
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        /// Bit 2: layer is locked
        const LOCKED = 4;
    }
}

/// A layer table entry
#[derive(Debug, Clone)]
pub struct Layer {
    /// Unique handle
    pub handle: Handle,
    /// Layer name
    pub name: String,
    /// Flag word (frozen, locked)
    pub flags: LayerFlags,
    /// Layer color
    pub color: Color,
    /// Line type name
    pub line_type: String,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            handle: Handle::NULL,
            name: name.into(),
            flags: LayerFlags::empty(),
            color: Color::WHITE,
            line_type: "Continuous".to_string(),
        }
    }

    /// Create the standard "0" layer
    pub fn layer_0() -> Self {
        Layer::new("0")
    }

    /// Check if the layer is locked (flag bit 2)
    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }

    /// Check if the layer is frozen (flag bit 0)
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    /// Set the layer as locked
    pub fn lock(&mut self) {
        self.flags.insert(LayerFlags::LOCKED);
    }

    /// Set the layer as unlocked
    pub fn unlock(&mut self) {
        self.flags.remove(LayerFlags::LOCKED);
    }
}

impl TableEntry for Layer {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_flag_is_bit_two() {
        let mut layer = Layer::new("Cotas");
        assert!(!layer.is_locked());
        layer.lock();
        assert!(layer.is_locked());
        assert_eq!(layer.flags.bits() & 4, 4);
        layer.unlock();
        assert!(!layer.is_locked());
    }

    #[test]
    fn test_other_flag_bits_do_not_lock() {
        let mut layer = Layer::new("Refs");
        layer.flags = LayerFlags::from_bits_truncate(3);
        assert!(layer.is_frozen());
        assert!(!layer.is_locked());
    }

    #[test]
    fn test_layer_defaults() {
        let layer = Layer::layer_0();
        assert_eq!(layer.name, "0");
        assert_eq!(layer.color, Color::WHITE);
        assert_eq!(layer.line_type, "Continuous");
    }
}
