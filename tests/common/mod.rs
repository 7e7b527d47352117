//! Shared builders for integration tests

// Not every test binary uses every helper.
#![allow(dead_code)]

use dxf_inventory::entities::{Arc, Circle, EntityType, Insert, Line, LwPolyline, Text};
use dxf_inventory::types::{Vector2, Vector3};
use dxf_inventory::CadDocument;

/// A document with a known census: 7 lines, 6 polylines (the first one
/// closed), 2 circles, 4 arcs, 12 texts, 6 inserts and 3 layers — enough
/// to exercise every console preview cap.
pub fn sample_document() -> CadDocument {
    let mut doc = CadDocument::new();

    let mut perimetro = dxf_inventory::Layer::new("Perimetro");
    perimetro.lock();
    doc.layers.add(perimetro);
    doc.layers.add(dxf_inventory::Layer::new("Vialidades"));

    for i in 0..7 {
        let mut line = Line::from_coords(0.0, 0.0, 0.0, (i + 1) as f64, 0.0, 0.0);
        line.common.layer = "Vialidades".to_string();
        doc.add_entity(EntityType::Line(line));
    }

    for i in 0..6 {
        let mut polyline = LwPolyline::from_points([
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0 + i as f64),
        ]);
        polyline.common.layer = "Perimetro".to_string();
        if i == 0 {
            polyline.close();
        }
        doc.add_entity(EntityType::LwPolyline(polyline));
    }

    doc.add_entity(EntityType::Circle(Circle::from_center_radius(
        Vector3::new(5.0, 5.0, 0.0),
        1.5,
    )));
    doc.add_entity(EntityType::Circle(Circle::from_center_radius(
        Vector3::new(-3.0, 2.0, 0.0),
        0.5,
    )));

    for i in 0..4 {
        doc.add_entity(EntityType::Arc(Arc::from_center_radius_angles(
            Vector3::new(1.0, 1.0, 0.0),
            2.0,
            0.0,
            90.0 * (i + 1) as f64,
        )));
    }

    for i in 0..12 {
        doc.add_entity(EntityType::Text(Text::with_value(
            format!("LOTE {i}"),
            Vector3::new(i as f64, -1.0, 0.0),
        )));
    }

    for i in 0..6 {
        doc.add_entity(EntityType::Insert(Insert::new(
            "ARBOL",
            Vector3::new(i as f64, 20.0, 0.0),
        )));
    }

    doc
}

/// A minimal ASCII DXF with one entity of each supported category plus a
/// layer table with a locked layer.
pub const SAMPLE_DXF: &str = "\
0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1032\n0\nENDSEC\n\
0\nSECTION\n2\nTABLES\n\
0\nTABLE\n2\nLAYER\n70\n3\n\
0\nLAYER\n2\n0\n70\n0\n62\n7\n6\nContinuous\n\
0\nLAYER\n2\nPerimetro\n70\n4\n62\n1\n6\nContinuous\n\
0\nLAYER\n2\nCotas\n70\n1\n62\n3\n6\nDashed\n\
0\nENDTAB\n\
0\nTABLE\n2\nLTYPE\n70\n1\n0\nLTYPE\n2\nContinuous\n0\nENDTAB\n\
0\nENDSEC\n\
0\nSECTION\n2\nENTITIES\n\
0\nLINE\n5\nA1\n8\nPerimetro\n10\n0.0\n20\n0.0\n30\n0.0\n11\n3.0\n21\n4.0\n31\n0.0\n\
0\nLWPOLYLINE\n5\nA2\n8\nPerimetro\n90\n4\n70\n1\n\
10\n0.0\n20\n0.0\n10\n10.0\n20\n0.0\n10\n10.0\n20\n10.0\n10\n0.0\n20\n10.0\n\
0\nCIRCLE\n5\nA3\n8\n0\n10\n10.0\n20\n10.0\n40\n2.0\n\
0\nARC\n5\nA4\n8\n0\n10\n0.0\n20\n0.0\n40\n1.0\n50\n0.0\n51\n90.0\n\
0\nTEXT\n5\nA5\n8\nCotas\n10\n4.0\n20\n5.0\n40\n2.5\n1\nCOTA 12.50 m\u{00b2}\n\
0\nINSERT\n5\nA6\n8\n0\n2\nARBOL\n10\n7.0\n20\n8.0\n\
0\nSOLID\n5\nA7\n8\n0\n10\n0.0\n20\n0.0\n\
0\nENDSEC\n\
0\nEOF\n";
