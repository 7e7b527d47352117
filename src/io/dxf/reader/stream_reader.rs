//! DXF stream reader trait and common types

use encoding_rs::Encoding;

use crate::error::Result;
use crate::types::Vector3;

/// Expected value type for a DXF group code, per the group-code ranges of
/// the DXF reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeValueType {
    /// String value
    Text,
    /// Floating-point value
    Double,
    /// 16-bit integer value
    Int16,
    /// 32-bit integer value
    Int32,
    /// 64-bit integer value
    Int64,
    /// Boolean value (stored as 0/1)
    Bool,
}

impl CodeValueType {
    /// Value type for a group code
    pub fn from_code(code: i32) -> Self {
        match code {
            0..=9 => CodeValueType::Text,
            10..=59 => CodeValueType::Double,
            60..=79 => CodeValueType::Int16,
            90..=99 => CodeValueType::Int32,
            100..=109 => CodeValueType::Text,
            110..=149 => CodeValueType::Double,
            160..=169 => CodeValueType::Int64,
            170..=179 => CodeValueType::Int16,
            210..=239 => CodeValueType::Double,
            270..=289 => CodeValueType::Int16,
            290..=299 => CodeValueType::Bool,
            300..=369 => CodeValueType::Text,
            370..=389 => CodeValueType::Int16,
            390..=399 => CodeValueType::Text,
            400..=409 => CodeValueType::Int16,
            410..=419 => CodeValueType::Text,
            420..=429 => CodeValueType::Int32,
            430..=439 => CodeValueType::Text,
            440..=459 => CodeValueType::Int32,
            460..=469 => CodeValueType::Double,
            470..=481 => CodeValueType::Text,
            999..=1009 => CodeValueType::Text,
            1010..=1059 => CodeValueType::Double,
            1060..=1070 => CodeValueType::Int16,
            1071 => CodeValueType::Int32,
            _ => CodeValueType::Text,
        }
    }
}

/// A DXF code/value pair
#[derive(Debug, Clone)]
pub struct DxfCodePair {
    /// The DXF group code
    pub code: i32,

    /// String representation of the value
    pub value_string: String,

    /// Integer value (if the code is an integer type)
    pub value_int: Option<i64>,

    /// Floating-point value (if the code is a double type)
    pub value_double: Option<f64>,

    /// Boolean value (if the code is a boolean type)
    pub value_bool: Option<bool>,
}

impl DxfCodePair {
    /// Create a new code/value pair, parsing the value per the code's type
    pub fn new(code: i32, value_string: String) -> Self {
        let value_type = CodeValueType::from_code(code);

        let value_int = match value_type {
            CodeValueType::Int16 | CodeValueType::Int32 | CodeValueType::Int64 => {
                value_string.trim().parse::<i64>().ok()
            }
            _ => None,
        };

        let value_double = match value_type {
            CodeValueType::Double => value_string.trim().parse::<f64>().ok(),
            _ => None,
        };

        let value_bool = match value_type {
            CodeValueType::Bool => value_string.trim().parse::<i32>().ok().map(|v| v != 0),
            _ => None,
        };

        Self {
            code,
            value_string,
            value_int,
            value_double,
            value_bool,
        }
    }

    /// Get value as string
    pub fn as_string(&self) -> &str {
        &self.value_string
    }

    /// Get value as i16
    pub fn as_i16(&self) -> Option<i16> {
        self.value_int.and_then(|v| i16::try_from(v).ok())
    }

    /// Get value as double
    pub fn as_double(&self) -> Option<f64> {
        self.value_double
    }

    /// Get value as boolean
    pub fn as_bool(&self) -> Option<bool> {
        self.value_bool
    }

    /// Get value as handle (hex string to u64)
    pub fn as_handle(&self) -> Option<u64> {
        u64::from_str_radix(self.value_string.trim(), 16).ok()
    }
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Push a pair back to be returned by the next `read_pair` call
    fn push_back(&mut self, pair: DxfCodePair);

    /// Reset the reader to the beginning
    fn reset(&mut self) -> Result<()>;

    /// Set the fallback encoding for non-UTF8 content
    fn set_encoding(&mut self, encoding: &'static Encoding);
}

/// Helper for assembling a 3D point from consecutive coordinate pairs.
///
/// The section reader routes the X/Y/Z codes of one point here (e.g. codes
/// 10/20/30 for a line start); the axis is derived from the code's decade.
#[derive(Debug, Default)]
pub struct PointReader {
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
}

impl PointReader {
    /// Create a new empty point reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a coordinate value; returns false for non-coordinate codes
    pub fn add_coordinate(&mut self, pair: &DxfCodePair) -> bool {
        let Some(value) = pair.as_double() else {
            return false;
        };

        match pair.code {
            10..=19 => self.x = Some(value),
            20..=29 => self.y = Some(value),
            30..=39 => self.z = Some(value),
            _ => return false,
        }
        true
    }

    /// Get the point; Z defaults to 0 when not provided
    pub fn get_point(&self) -> Option<Vector3> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Vector3::new(x, y, self.z.unwrap_or(0.0))),
            _ => None,
        }
    }
}
