//! Section-level DXF parsing: TABLES and ENTITIES

use super::stream_reader::{DxfCodePair, DxfStreamReader, PointReader};
use crate::document::CadDocument;
use crate::entities::{
    Arc, Circle, EntityCommon, EntityType, Insert, Line, LwPolyline, LwPolylineFlags, LwVertex,
    Text,
};
use crate::error::Result;
use crate::tables::{Layer, LayerFlags};
use crate::types::{Color, Handle, Vector2, Vector3};

/// Parses the sections the inventory needs from a pair stream.
///
/// Entities end at the next code 0, which is pushed back for the caller.
/// Unknown tables and entity types are skipped pair-by-pair rather than
/// rejected.
pub struct SectionReader<'a> {
    reader: &'a mut dyn DxfStreamReader,
}

impl<'a> SectionReader<'a> {
    /// Create a section reader over a pair stream
    pub fn new(reader: &'a mut dyn DxfStreamReader) -> Self {
        Self { reader }
    }

    /// Read the TABLES section; only the LAYER table is materialized
    pub fn read_tables(&mut self, document: &mut CadDocument) -> Result<()> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 && pair.value_string == "ENDSEC" {
                break;
            }

            if pair.code == 0 && pair.value_string == "TABLE" {
                if let Some(name_pair) = self.reader.read_pair()? {
                    if name_pair.code == 2 && name_pair.value_string == "LAYER" {
                        self.read_layer_table(document)?;
                    } else {
                        self.skip_to_endtab()?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Read the ENTITIES section
    pub fn read_entities(&mut self, document: &mut CadDocument) -> Result<()> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 && pair.value_string == "ENDSEC" {
                break;
            }

            if pair.code == 0 {
                match pair.value_string.as_str() {
                    "LINE" => {
                        let entity = self.read_line()?;
                        document.add_entity(EntityType::Line(entity));
                    }
                    "LWPOLYLINE" => {
                        let entity = self.read_lwpolyline()?;
                        document.add_entity(EntityType::LwPolyline(entity));
                    }
                    "CIRCLE" => {
                        let entity = self.read_circle()?;
                        document.add_entity(EntityType::Circle(entity));
                    }
                    "ARC" => {
                        let entity = self.read_arc()?;
                        document.add_entity(EntityType::Arc(entity));
                    }
                    "TEXT" => {
                        let entity = self.read_text()?;
                        document.add_entity(EntityType::Text(entity));
                    }
                    "INSERT" => {
                        let entity = self.read_insert()?;
                        document.add_entity(EntityType::Insert(entity));
                    }
                    _ => {
                        // Unknown entity type: its pairs are consumed by the
                        // outer loop until the next code 0.
                    }
                }
            }
        }

        Ok(())
    }

    /// Read the LAYER table up to ENDTAB
    fn read_layer_table(&mut self, document: &mut CadDocument) -> Result<()> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 && pair.value_string == "ENDTAB" {
                break;
            }

            if pair.code == 0 && pair.value_string == "LAYER" {
                let layer = self.read_layer_entry()?;
                document.layers.add(layer);
            }
        }
        Ok(())
    }

    /// Read a single LAYER entry
    fn read_layer_entry(&mut self) -> Result<Layer> {
        let mut layer = Layer::new("0");

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            match pair.code {
                2 => layer.name = pair.value_string.clone(),
                5 => {
                    if let Some(handle) = pair.as_handle() {
                        layer.handle = Handle::new(handle);
                    }
                }
                6 => layer.line_type = pair.value_string.clone(),
                62 => {
                    if let Some(color_index) = pair.as_i16() {
                        layer.color = Color::from_index(color_index);
                    }
                }
                70 => {
                    if let Some(flags) = pair.as_i16() {
                        layer.flags = LayerFlags::from_bits_truncate(flags);
                    }
                }
                _ => {}
            }
        }

        Ok(layer)
    }

    /// Read a LINE entity
    fn read_line(&mut self) -> Result<Line> {
        let mut line = Line::new();
        let mut start = PointReader::new();
        let mut end = PointReader::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            if read_common(&mut line.common, &pair) {
                continue;
            }

            match pair.code {
                10 | 20 | 30 => {
                    start.add_coordinate(&pair);
                }
                11 | 21 | 31 => {
                    end.add_coordinate(&pair);
                }
                _ => {}
            }
        }

        if let Some(pt) = start.get_point() {
            line.start = pt;
        }
        if let Some(pt) = end.get_point() {
            line.end = pt;
        }

        Ok(line)
    }

    /// Read a LWPOLYLINE entity
    fn read_lwpolyline(&mut self) -> Result<LwPolyline> {
        let mut polyline = LwPolyline::new();
        let mut xs: Vec<f64> = Vec::new();
        let mut ys: Vec<f64> = Vec::new();
        let mut bulges: Vec<f64> = Vec::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            if read_common(&mut polyline.common, &pair) {
                continue;
            }

            match pair.code {
                70 => {
                    if let Some(flags) = pair.as_i16() {
                        polyline.flags = LwPolylineFlags::from_bits_truncate(flags);
                    }
                }
                38 => {
                    if let Some(elevation) = pair.as_double() {
                        polyline.elevation = elevation;
                    }
                }
                10 => {
                    if let Some(x) = pair.as_double() {
                        xs.push(x);
                    }
                }
                20 => {
                    if let Some(y) = pair.as_double() {
                        ys.push(y);
                    }
                }
                42 => {
                    if let Some(bulge) = pair.as_double() {
                        bulges.push(bulge);
                    }
                }
                _ => {}
            }
        }

        for i in 0..xs.len().min(ys.len()) {
            polyline.vertices.push(LwVertex {
                location: Vector2::new(xs[i], ys[i]),
                bulge: bulges.get(i).copied().unwrap_or(0.0),
            });
        }

        Ok(polyline)
    }

    /// Read a CIRCLE entity
    fn read_circle(&mut self) -> Result<Circle> {
        let mut circle = Circle::new();
        let mut center = PointReader::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            if read_common(&mut circle.common, &pair) {
                continue;
            }

            match pair.code {
                10 | 20 | 30 => {
                    center.add_coordinate(&pair);
                }
                40 => {
                    if let Some(radius) = pair.as_double() {
                        circle.radius = radius;
                    }
                }
                _ => {}
            }
        }

        if let Some(pt) = center.get_point() {
            circle.center = pt;
        }

        Ok(circle)
    }

    /// Read an ARC entity
    fn read_arc(&mut self) -> Result<Arc> {
        let mut arc = Arc::new();
        let mut center = PointReader::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            if read_common(&mut arc.common, &pair) {
                continue;
            }

            match pair.code {
                10 | 20 | 30 => {
                    center.add_coordinate(&pair);
                }
                40 => {
                    if let Some(radius) = pair.as_double() {
                        arc.radius = radius;
                    }
                }
                50 => {
                    if let Some(angle) = pair.as_double() {
                        arc.start_angle = angle;
                    }
                }
                51 => {
                    if let Some(angle) = pair.as_double() {
                        arc.end_angle = angle;
                    }
                }
                _ => {}
            }
        }

        if let Some(pt) = center.get_point() {
            arc.center = pt;
        }

        Ok(arc)
    }

    /// Read a TEXT entity
    fn read_text(&mut self) -> Result<Text> {
        let mut text = Text::new();
        let mut insertion = PointReader::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            if read_common(&mut text.common, &pair) {
                continue;
            }

            match pair.code {
                1 => text.value = pair.value_string.clone(),
                10 | 20 | 30 => {
                    insertion.add_coordinate(&pair);
                }
                40 => {
                    if let Some(height) = pair.as_double() {
                        text.height = height;
                    }
                }
                50 => {
                    if let Some(rotation) = pair.as_double() {
                        text.rotation = rotation;
                    }
                }
                _ => {}
            }
        }

        if let Some(pt) = insertion.get_point() {
            text.insertion_point = pt;
        }

        Ok(text)
    }

    /// Read an INSERT entity
    fn read_insert(&mut self) -> Result<Insert> {
        let mut insert = Insert::new(String::new(), Vector3::ZERO);
        let mut insertion = PointReader::new();

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }

            if read_common(&mut insert.common, &pair) {
                continue;
            }

            match pair.code {
                2 => insert.block_name = pair.value_string.clone(),
                10 | 20 | 30 => {
                    insertion.add_coordinate(&pair);
                }
                41 => {
                    if let Some(scale) = pair.as_double() {
                        insert.x_scale = scale;
                    }
                }
                42 => {
                    if let Some(scale) = pair.as_double() {
                        insert.y_scale = scale;
                    }
                }
                43 => {
                    if let Some(scale) = pair.as_double() {
                        insert.z_scale = scale;
                    }
                }
                50 => {
                    if let Some(rotation) = pair.as_double() {
                        insert.rotation = rotation;
                    }
                }
                _ => {}
            }
        }

        if let Some(pt) = insertion.get_point() {
            insert.insert_point = pt;
        }

        Ok(insert)
    }

    /// Skip the current table up to its ENDTAB
    fn skip_to_endtab(&mut self) -> Result<()> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 && pair.value_string == "ENDTAB" {
                break;
            }
        }
        Ok(())
    }
}

/// Apply one of the entity codes shared by every entity type.
///
/// Returns true when the pair was consumed.
fn read_common(common: &mut EntityCommon, pair: &DxfCodePair) -> bool {
    match pair.code {
        5 => {
            if let Some(handle) = pair.as_handle() {
                common.handle = Handle::new(handle);
            }
            true
        }
        8 => {
            common.layer = pair.value_string.clone();
            true
        }
        62 => {
            if let Some(color_index) = pair.as_i16() {
                common.color = Color::from_index(color_index);
            }
            true
        }
        67 => {
            if let Some(space) = pair.as_i16() {
                common.paper_space = space != 0;
            }
            true
        }
        _ => false,
    }
}
