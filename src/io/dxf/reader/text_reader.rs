//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::{BufReader, Read, Seek, SeekFrom};

/// Reads code/value pairs from an ASCII DXF stream.
///
/// Lines are read byte-wise and decoded as UTF-8 first; bytes that are not
/// valid UTF-8 fall back to the configured encoding, or Latin-1 when none
/// is set.
pub struct DxfTextReader<R: Read + Seek> {
    reader: BufReader<R>,
    line_number: usize,
    pushed_back: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding. `None` means Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read + Seek> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            pushed_back: None,
            encoding: None,
        }
    }

    /// Read a single line, handling non-UTF8 bytes gracefully
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();

        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.line_number += 1;

        let line = match String::from_utf8(bytes.clone()) {
            Ok(s) => s,
            Err(_) => {
                if let Some(enc) = self.encoding {
                    let (decoded, _, _) = enc.decode(&bytes);
                    decoded.into_owned()
                } else {
                    // Latin-1 maps bytes 0-255 directly to code points
                    bytes.iter().map(|&b| b as char).collect()
                }
            }
        };

        Ok(Some(line.trim().to_string()))
    }

    /// Read a code/value pair from the stream
    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let code = code_line.trim().parse::<i32>().map_err(|_| {
            DxfError::Parse(format!(
                "Invalid DXF code at line {}: '{}'",
                self.line_number, code_line
            ))
        })?;

        let value_line = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::Parse(format!(
                    "Unexpected EOF after code {} at line {}",
                    code, self.line_number
                )))
            }
        };

        Ok(Some(DxfCodePair::new(
            code,
            unescape_control_sequences(&value_line),
        )))
    }
}

/// Expand the caret control sequences DXF uses in string values
fn unescape_control_sequences(value: &str) -> String {
    value
        .replace("^J", "\n")
        .replace("^M", "\r")
        .replace("^I", "\t")
        .replace("^ ", "^")
}

impl<R: Read + Seek> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.pushed_back.take() {
            return Ok(Some(pair));
        }

        self.read_pair_internal()
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.pushed_back = Some(pair);
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line_number = 0;
        self.pushed_back = None;
        Ok(())
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader_for(data: &str) -> DxfTextReader<Cursor<Vec<u8>>> {
        DxfTextReader::new(BufReader::new(Cursor::new(data.as_bytes().to_vec())))
    }

    #[test]
    fn test_read_simple_pair() {
        let mut reader = reader_for("0\nSECTION\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 0);
        assert_eq!(pair.value_string, "SECTION");
    }

    #[test]
    fn test_indented_code_lines() {
        let mut reader = reader_for("  0\nLINE\n 62\n7\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 0);
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 62);
        assert_eq!(pair.as_i16(), Some(7));
    }

    #[test]
    fn test_push_back() {
        let mut reader = reader_for("0\nSECTION\n2\nHEADER\n");
        let pair = reader.read_pair().unwrap().unwrap();
        reader.push_back(pair);
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 0);
        assert_eq!(pair.value_string, "SECTION");
    }

    #[test]
    fn test_invalid_code_is_parse_error() {
        let mut reader = reader_for("not-a-code\nSECTION\n");
        assert!(matches!(reader.read_pair(), Err(DxfError::Parse(_))));
    }

    #[test]
    fn test_eof_after_code_is_parse_error() {
        let mut reader = reader_for("0\n");
        assert!(matches!(reader.read_pair(), Err(DxfError::Parse(_))));
    }

    #[test]
    fn test_caret_sequences() {
        let mut reader = reader_for("1\nLine1^JLine2^MLine3\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.value_string, "Line1\nLine2\rLine3");
    }

    #[test]
    fn test_reset_rewinds_stream() {
        let mut reader = reader_for("0\nSECTION\n0\nEOF\n");
        reader.read_pair().unwrap();
        reader.reset().unwrap();
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.value_string, "SECTION");
    }
}
