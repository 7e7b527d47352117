//! CAD table types and management

use indexmap::IndexMap;

use crate::types::Handle;

pub mod layer;

pub use layer::{Layer, LayerFlags};

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's unique handle
    fn handle(&self) -> Handle;

    /// Set the entry's handle
    fn set_handle(&mut self, handle: Handle);

    /// Get the entry's name
    fn name(&self) -> &str;

    /// Set the entry's name
    fn set_name(&mut self, name: String);
}

/// Generic table for storing named entries.
///
/// Names are case-insensitive. Entries keep insertion order, so a table
/// read from a file iterates in file order.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry, replacing any existing entry with the same name
    pub fn add(&mut self, entry: T) -> Option<T> {
        self.entries.insert(entry.name().to_uppercase(), entry)
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Get all entry names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name())
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_add_and_get() {
        let mut table = Table::new();
        table.add(Layer::new("Perimetro"));

        assert!(table.contains("Perimetro"));
        assert!(table.contains("PERIMETRO")); // Case-insensitive
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_replaces_duplicates() {
        let mut table = Table::new();
        table.add(Layer::new("0"));
        let mut replacement = Layer::new("0");
        replacement.lock();
        let previous = table.add(replacement);

        assert!(previous.is_some());
        assert_eq!(table.len(), 1);
        assert!(table.get("0").unwrap().is_locked());
    }

    #[test]
    fn test_table_keeps_insertion_order() {
        let mut table = Table::new();
        table.add(Layer::new("0"));
        table.add(Layer::new("Vialidades"));
        table.add(Layer::new("Lotes"));

        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["0", "Vialidades", "Lotes"]);
    }
}
