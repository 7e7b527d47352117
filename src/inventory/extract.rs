//! Per-category record extraction and extents folding.
//!
//! One stateless rule per entity category: each takes the record id, the
//! entity and the running extents, and returns a pure record. All console
//! output lives in [`crate::inventory::format`].

use crate::document::CadDocument;
use crate::entities::{Arc, Circle, Insert, Line, LwPolyline, Text};
use crate::inventory::report::{
    ArcRecord, CircleRecord, InsertRecord, LayerRecord, LineRecord, PolylineRecord, Report,
    TextRecord,
};
use crate::tables::Layer;
use crate::types::Extents;

/// How many leading vertices a polyline record carries
pub const VERTEX_PREVIEW: usize = 3;

/// Extract a LINE record; both endpoints fold into the extents
pub fn line_record(id: usize, line: &Line, extents: &mut Extents) -> LineRecord {
    extents.update(line.start.x, line.start.y);
    extents.update(line.end.x, line.end.y);

    LineRecord {
        id,
        start: (line.start.x, line.start.y),
        end: (line.end.x, line.end.y),
        layer: line.common.layer.clone(),
        length: line.length(),
    }
}

/// Extract a LWPOLYLINE record; every vertex folds into the extents,
/// not just the leading preview
pub fn polyline_record(id: usize, polyline: &LwPolyline, extents: &mut Extents) -> PolylineRecord {
    for vertex in &polyline.vertices {
        extents.update(vertex.location.x, vertex.location.y);
    }

    PolylineRecord {
        id,
        layer: polyline.common.layer.clone(),
        point_count: polyline.vertex_count(),
        closed: polyline.is_closed(),
        leading_vertices: polyline
            .vertices
            .iter()
            .take(VERTEX_PREVIEW)
            .map(|v| (v.location.x, v.location.y))
            .collect(),
    }
}

/// Extract a CIRCLE record; the two corners of the axis-aligned bounding
/// square (center ± radius) fold into the extents
pub fn circle_record(id: usize, circle: &Circle, extents: &mut Extents) -> CircleRecord {
    extents.update(circle.center.x - circle.radius, circle.center.y - circle.radius);
    extents.update(circle.center.x + circle.radius, circle.center.y + circle.radius);

    CircleRecord {
        id,
        center: (circle.center.x, circle.center.y),
        radius: circle.radius,
        layer: circle.common.layer.clone(),
    }
}

/// Extract an ARC record.
///
/// The extents contribution is the full circle's bounding square; the
/// start/end angles are ignored, over-estimating short arcs.
pub fn arc_record(id: usize, arc: &Arc, extents: &mut Extents) -> ArcRecord {
    extents.update(arc.center.x - arc.radius, arc.center.y - arc.radius);
    extents.update(arc.center.x + arc.radius, arc.center.y + arc.radius);

    ArcRecord {
        id,
        center: (arc.center.x, arc.center.y),
        radius: arc.radius,
        start_angle: arc.start_angle,
        end_angle: arc.end_angle,
        layer: arc.common.layer.clone(),
    }
}

/// Extract a TEXT record; no extents contribution
pub fn text_record(id: usize, text: &Text) -> TextRecord {
    TextRecord {
        id,
        content: text.value.clone(),
        position: (text.insertion_point.x, text.insertion_point.y),
        layer: text.common.layer.clone(),
    }
}

/// Extract an INSERT record; no extents contribution
pub fn insert_record(id: usize, insert: &Insert) -> InsertRecord {
    InsertRecord {
        id,
        block_name: insert.block_name.clone(),
        position: (insert.insert_point.x, insert.insert_point.y),
        layer: insert.common.layer.clone(),
    }
}

/// Extract a layer table record; no extents contribution
pub fn layer_record(layer: &Layer) -> LayerRecord {
    LayerRecord {
        name: layer.name.clone(),
        color: layer.color.index(),
        linetype: layer.line_type.clone(),
        locked: layer.is_locked(),
    }
}

/// Build the full inventory in a single pass over the document.
///
/// Record ids are dense and zero-based per category, assigned in file
/// order. The extents fold is order-independent, so the fixed category
/// order here is presentation convention, not a correctness requirement.
pub fn build_report(document: &CadDocument) -> Report {
    let mut extents = Extents::new();

    let lines = document
        .lines()
        .enumerate()
        .map(|(id, line)| line_record(id, line, &mut extents))
        .collect();

    let polylines = document
        .lwpolylines()
        .enumerate()
        .map(|(id, polyline)| polyline_record(id, polyline, &mut extents))
        .collect();

    let circles = document
        .circles()
        .enumerate()
        .map(|(id, circle)| circle_record(id, circle, &mut extents))
        .collect();

    let arcs = document
        .arcs()
        .enumerate()
        .map(|(id, arc)| arc_record(id, arc, &mut extents))
        .collect();

    let texts = document
        .texts()
        .enumerate()
        .map(|(id, text)| text_record(id, text))
        .collect();

    let blocks = document
        .inserts()
        .enumerate()
        .map(|(id, insert)| insert_record(id, insert))
        .collect();

    let layers = document.layers.iter().map(layer_record).collect();

    Report {
        lines,
        polylines,
        circles,
        arcs,
        texts,
        blocks,
        layers,
        bounds: extents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Vector2, Vector3};

    #[test]
    fn test_line_record_length_and_bounds() {
        let mut extents = Extents::new();
        let line = Line::from_coords(0.0, 0.0, 0.0, 3.0, 4.0, 0.0);
        let record = line_record(0, &line, &mut extents);

        assert_eq!(record.length, 5.0);
        assert_eq!(extents.min_x, 0.0);
        assert_eq!(extents.min_y, 0.0);
        assert_eq!(extents.max_x, 3.0);
        assert_eq!(extents.max_y, 4.0);
    }

    #[test]
    fn test_circle_record_bounding_square() {
        let mut extents = Extents::new();
        let circle = Circle::from_center_radius(Vector3::new(10.0, 10.0, 0.0), 2.0);
        circle_record(0, &circle, &mut extents);

        assert_eq!(extents.min_x, 8.0);
        assert_eq!(extents.min_y, 8.0);
        assert_eq!(extents.max_x, 12.0);
        assert_eq!(extents.max_y, 12.0);
    }

    #[test]
    fn test_arc_bound_ignores_sweep() {
        // A short quarter arc still contributes the full circle's square.
        let mut extents = Extents::new();
        let arc = Arc::from_center_radius_angles(Vector3::new(0.0, 0.0, 0.0), 1.0, 0.0, 90.0);
        arc_record(0, &arc, &mut extents);

        assert_eq!(extents.min_x, -1.0);
        assert_eq!(extents.min_y, -1.0);
        assert_eq!(extents.max_x, 1.0);
        assert_eq!(extents.max_y, 1.0);
    }

    #[test]
    fn test_polyline_preview_is_capped_but_bounds_are_not() {
        let mut extents = Extents::new();
        let mut polyline = LwPolyline::from_points(
            (0..10).map(|i| Vector2::new(i as f64, 0.0)),
        );
        polyline.close();
        let record = polyline_record(0, &polyline, &mut extents);

        assert!(record.closed);
        assert_eq!(record.point_count, 10);
        assert_eq!(record.leading_vertices.len(), VERTEX_PREVIEW);
        assert_eq!(record.leading_vertices[2], (2.0, 0.0));
        // The ninth vertex still reached the extents.
        assert_eq!(extents.max_x, 9.0);
    }

    #[test]
    fn test_short_polyline_preview_keeps_all_vertices() {
        let mut extents = Extents::new();
        let mut polyline = LwPolyline::from_points([
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
        ]);
        polyline.close();
        let record = polyline_record(0, &polyline, &mut extents);

        assert!(record.closed);
        assert_eq!(record.point_count, 3);
        assert_eq!(
            record.leading_vertices,
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn test_text_and_insert_do_not_touch_bounds() {
        use crate::entities::EntityType;

        let mut doc = CadDocument::new();
        doc.add_entity(EntityType::Text(Text::with_value(
            "hola",
            Vector3::new(100.0, 100.0, 0.0),
        )));
        doc.add_entity(EntityType::Insert(Insert::new(
            "B1",
            Vector3::new(-100.0, -100.0, 0.0),
        )));

        let report = build_report(&doc);
        assert_eq!(report.texts.len(), 1);
        assert_eq!(report.blocks.len(), 1);
        assert!(!report.bounds.has_points());
    }
}
