//! CAD document structure

use crate::entities::{Arc, Circle, EntityType, Insert, Line, LwPolyline, Text};
use crate::tables::{Layer, Table};
use crate::types::{DxfVersion, Handle};

/// A parsed drawing: layer table plus model-space and paper-space entities.
///
/// Entities are stored in file order. The inventory depends on that order
/// for its dense, deterministic per-category record ids, so storage is a
/// plain vector rather than a handle map.
#[derive(Debug, Clone)]
pub struct CadDocument {
    /// Document version ($ACADVER)
    pub version: DxfVersion,

    /// Layer table
    pub layers: Table<Layer>,

    /// All entities in file order
    entities: Vec<EntityType>,

    /// Next handle to assign
    next_handle: u64,
}

impl CadDocument {
    /// Create a new empty document with the standard layer "0"
    pub fn new() -> Self {
        let mut doc = CadDocument {
            version: DxfVersion::AC1032,
            layers: Table::new(),
            entities: Vec::new(),
            // Handle values below 0x10 are reserved for table objects.
            next_handle: 0x10,
        };

        let mut layer0 = Layer::layer_0();
        layer0.handle = doc.allocate_handle();
        doc.layers.add(layer0);
        doc
    }

    /// Create a document with a specific version
    pub fn with_version(version: DxfVersion) -> Self {
        let mut doc = Self::new();
        doc.version = version;
        doc
    }

    /// Allocate a new unique handle
    pub fn allocate_handle(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Add an entity to the document, assigning a handle if it has none
    pub fn add_entity(&mut self, mut entity: EntityType) -> Handle {
        let handle = if entity.common().handle.is_null() {
            let h = self.allocate_handle();
            entity.common_mut().handle = h;
            h
        } else {
            let h = entity.common().handle;
            if h.value() >= self.next_handle {
                self.next_handle = h.value() + 1;
            }
            h
        };

        self.entities.push(entity);
        handle
    }

    /// Get the number of entities (model and paper space)
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all entities in file order
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.iter()
    }

    /// Model-space entities of a given DXF type name, in file order
    pub fn query<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a EntityType> + 'a {
        self.entities
            .iter()
            .filter(move |e| !e.common().paper_space && e.type_name() == type_name)
    }

    /// Model-space LINE entities in file order
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.model_space().filter_map(|e| match e {
            EntityType::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Model-space LWPOLYLINE entities in file order
    pub fn lwpolylines(&self) -> impl Iterator<Item = &LwPolyline> {
        self.model_space().filter_map(|e| match e {
            EntityType::LwPolyline(poly) => Some(poly),
            _ => None,
        })
    }

    /// Model-space CIRCLE entities in file order
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.model_space().filter_map(|e| match e {
            EntityType::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    /// Model-space ARC entities in file order
    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.model_space().filter_map(|e| match e {
            EntityType::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    /// Model-space TEXT entities in file order
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.model_space().filter_map(|e| match e {
            EntityType::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Model-space INSERT entities in file order
    pub fn inserts(&self) -> impl Iterator<Item = &Insert> {
        self.model_space().filter_map(|e| match e {
            EntityType::Insert(insert) => Some(insert),
            _ => None,
        })
    }

    fn model_space(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.iter().filter(|e| !e.common().paper_space)
    }
}

impl Default for CadDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector3;

    #[test]
    fn test_new_document_has_layer_zero() {
        let doc = CadDocument::new();
        assert_eq!(doc.layers.len(), 1);
        assert!(doc.layers.contains("0"));
        assert_eq!(doc.entity_count(), 0);
    }

    #[test]
    fn test_add_entity_assigns_handles() {
        let mut doc = CadDocument::new();
        let h1 = doc.add_entity(EntityType::Line(Line::new()));
        let h2 = doc.add_entity(EntityType::Line(Line::new()));
        assert!(!h1.is_null());
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_query_filters_by_type_in_file_order() {
        let mut doc = CadDocument::new();
        doc.add_entity(EntityType::Line(Line::from_coords(
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
        )));
        doc.add_entity(EntityType::Circle(Circle::new()));
        doc.add_entity(EntityType::Line(Line::from_coords(
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0,
        )));

        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].end.x, 1.0);
        assert_eq!(lines[1].end.x, 2.0);
        assert_eq!(doc.query("CIRCLE").count(), 1);
    }

    #[test]
    fn test_paper_space_entities_are_excluded() {
        let mut doc = CadDocument::new();
        let mut text = Text::with_value("title block", Vector3::ZERO);
        text.common.paper_space = true;
        doc.add_entity(EntityType::Text(text));
        doc.add_entity(EntityType::Text(Text::with_value("label", Vector3::ZERO)));

        assert_eq!(doc.entity_count(), 2);
        assert_eq!(doc.texts().count(), 1);
        assert_eq!(doc.texts().next().unwrap().value, "label");
    }
}
