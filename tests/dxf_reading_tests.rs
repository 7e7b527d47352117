//! Integration tests for DXF reading

mod common;

use std::io::Cursor;

use common::SAMPLE_DXF;
use dxf_inventory::inventory::build_report;
use dxf_inventory::{DxfError, DxfReader, DxfVersion};

fn read_sample() -> dxf_inventory::CadDocument {
    DxfReader::from_reader(Cursor::new(SAMPLE_DXF.as_bytes().to_vec()))
        .unwrap()
        .read()
        .unwrap()
}

#[test]
fn nonexistent_file_is_input_not_found() {
    let err = DxfReader::from_file("no_such_drawing.dxf").unwrap_err();
    match err {
        DxfError::InputNotFound { path } => {
            assert_eq!(path.to_string_lossy(), "no_such_drawing.dxf");
        }
        other => panic!("expected InputNotFound, got {other:?}"),
    }
}

#[test]
fn binary_sentinel_is_rejected() {
    let mut data = b"AutoCAD Binary DXF".to_vec();
    data.extend_from_slice(&[0x1A, 0x00, 0x01, 0x02]);

    let err = DxfReader::from_reader(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, DxfError::InvalidFormat(_)));
}

#[test]
fn garbage_input_is_a_parse_error() {
    let err = DxfReader::from_reader(Cursor::new(b"not a dxf at all".to_vec()))
        .unwrap()
        .read()
        .unwrap_err();
    assert!(matches!(err, DxfError::Parse(_)));
}

#[test]
fn sample_drawing_version_and_counts() {
    let doc = read_sample();

    assert_eq!(doc.version, DxfVersion::AC1032);
    assert_eq!(doc.lines().count(), 1);
    assert_eq!(doc.lwpolylines().count(), 1);
    assert_eq!(doc.circles().count(), 1);
    assert_eq!(doc.arcs().count(), 1);
    assert_eq!(doc.texts().count(), 1);
    assert_eq!(doc.inserts().count(), 1);
    // The SOLID entity is skipped, not an error.
    assert_eq!(doc.entity_count(), 6);
}

#[test]
fn sample_drawing_entity_fields() {
    let doc = read_sample();

    let line = doc.lines().next().unwrap();
    assert_eq!(line.common.layer, "Perimetro");
    assert_eq!(line.common.handle.value(), 0xA1);
    assert_eq!(line.start.x, 0.0);
    assert_eq!(line.end.x, 3.0);
    assert_eq!(line.end.y, 4.0);
    assert_eq!(line.length(), 5.0);

    let polyline = doc.lwpolylines().next().unwrap();
    assert_eq!(polyline.vertex_count(), 4);
    assert!(polyline.is_closed());

    let circle = doc.circles().next().unwrap();
    assert_eq!(circle.center.x, 10.0);
    assert_eq!(circle.radius, 2.0);

    let arc = doc.arcs().next().unwrap();
    assert_eq!(arc.start_angle, 0.0);
    assert_eq!(arc.end_angle, 90.0);

    let text = doc.texts().next().unwrap();
    assert_eq!(text.value, "COTA 12.50 m²");
    assert_eq!(text.common.layer, "Cotas");
    assert_eq!(text.height, 2.5);

    let insert = doc.inserts().next().unwrap();
    assert_eq!(insert.block_name, "ARBOL");
    assert_eq!(insert.insert_point.x, 7.0);
    assert_eq!(insert.insert_point.y, 8.0);
}

#[test]
fn sample_drawing_layer_table() {
    let doc = read_sample();

    assert_eq!(doc.layers.len(), 3);
    let names: Vec<_> = doc.layers.names().collect();
    assert_eq!(names, vec!["0", "Perimetro", "Cotas"]);

    let perimetro = doc.layers.get("Perimetro").unwrap();
    assert!(perimetro.is_locked());
    assert!(!perimetro.is_frozen());
    assert_eq!(perimetro.color.index(), 1);

    let cotas = doc.layers.get("Cotas").unwrap();
    assert!(cotas.is_frozen());
    assert!(!cotas.is_locked());
    assert_eq!(cotas.line_type, "Dashed");
}

#[test]
fn sample_drawing_end_to_end_report() {
    let doc = read_sample();
    let report = build_report(&doc);

    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.lines[0].length, 5.0);
    assert_eq!(report.polylines[0].point_count, 4);
    assert!(report.polylines[0].closed);
    assert_eq!(report.texts[0].content, "COTA 12.50 m²");
    assert_eq!(report.blocks[0].block_name, "ARBOL");

    // line (0,0)-(3,4), polyline to (10,10), circle square (8,8)-(12,12),
    // arc square (-1,-1)-(1,1)
    assert_eq!(report.bounds.min_x, -1.0);
    assert_eq!(report.bounds.min_y, -1.0);
    assert_eq!(report.bounds.max_x, 12.0);
    assert_eq!(report.bounds.max_y, 12.0);

    let locked: Vec<_> = report.layers.iter().filter(|l| l.locked).collect();
    assert_eq!(locked.len(), 1);
    assert_eq!(locked[0].name, "Perimetro");
}
