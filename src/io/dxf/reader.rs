//! DXF file reader

mod section_reader;
mod stream_reader;
mod text_reader;

pub use stream_reader::{DxfCodePair, DxfStreamReader};
pub use text_reader::DxfTextReader;

use section_reader::SectionReader;

use crate::document::CadDocument;
use crate::error::{DxfError, Result};
use crate::types::DxfVersion;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Sentinel that opens a binary DXF file
const BINARY_SENTINEL: &[u8] = b"AutoCAD Binary DXF";

/// ASCII DXF file reader.
///
/// Reads the sections the drawing inventory needs: the HEADER section for
/// `$ACADVER`/`$DWGCODEPAGE`, the LAYER table and the supported entity
/// types in ENTITIES. Everything else is skipped structurally.
pub struct DxfReader {
    reader: Box<dyn DxfStreamReader>,
    version: DxfVersion,
}

impl std::fmt::Debug for DxfReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DxfReader")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl DxfReader {
    /// Create a new DXF reader from any seekable reader
    pub fn from_reader<R: Read + Seek + 'static>(reader: R) -> Result<Self> {
        let mut buf_reader = BufReader::new(reader);

        if Self::is_binary(&mut buf_reader)? {
            return Err(DxfError::InvalidFormat(
                "binary DXF is not supported".to_string(),
            ));
        }

        Ok(Self {
            reader: Box::new(DxfTextReader::new(buf_reader)),
            version: DxfVersion::Unknown,
        })
    }

    /// Create a new DXF reader from a file path.
    ///
    /// A path that does not resolve maps to [`DxfError::InputNotFound`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DxfError::InputNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DxfError::Io(e)
            }
        })?;

        Self::from_reader(file)
    }

    /// Check if a stream starts with the binary DXF sentinel
    fn is_binary<R: Read + Seek>(reader: &mut R) -> Result<bool> {
        let mut buffer = [0u8; BINARY_SENTINEL.len()];
        let bytes_read = reader.read(&mut buffer)?;

        reader.seek(SeekFrom::Start(0))?;

        Ok(bytes_read >= BINARY_SENTINEL.len() && buffer == BINARY_SENTINEL)
    }

    /// Read the drawing and return a [`CadDocument`]
    pub fn read(mut self) -> Result<CadDocument> {
        // First pass: version and code page, so string decoding is set up
        // before any entity is read.
        self.read_version()?;

        let mut document = CadDocument::with_version(self.version);

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 && pair.value_string == "SECTION" {
                if let Some(section_pair) = self.reader.read_pair()? {
                    if section_pair.code == 2 {
                        match section_pair.value_string.as_str() {
                            "TABLES" => {
                                SectionReader::new(self.reader.as_mut())
                                    .read_tables(&mut document)?;
                            }
                            "ENTITIES" => {
                                SectionReader::new(self.reader.as_mut())
                                    .read_entities(&mut document)?;
                            }
                            _ => self.skip_section()?,
                        }
                    }
                }
            } else if pair.code == 0 && pair.value_string == "EOF" {
                break;
            }
        }

        Ok(document)
    }

    /// Pre-scan the HEADER section for `$ACADVER` and `$DWGCODEPAGE`.
    ///
    /// After this call the reader is reset to the beginning and
    /// `self.version` is populated. Files older than AC1021 (AutoCAD 2007)
    /// with a known code page get the stream reader's fallback encoding set
    /// accordingly; newer files are always UTF-8.
    fn read_version(&mut self) -> Result<()> {
        let mut code_page: Option<String> = None;

        'outer: while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 && pair.value_string == "SECTION" {
                if let Some(section_pair) = self.reader.read_pair()? {
                    if section_pair.code == 2 && section_pair.value_string == "HEADER" {
                        while let Some(header_pair) = self.reader.read_pair()? {
                            if header_pair.code == 0 && header_pair.value_string == "ENDSEC" {
                                break 'outer;
                            }
                            if header_pair.code == 9 {
                                match header_pair.value_string.as_str() {
                                    "$ACADVER" => {
                                        if let Some(vp) = self.reader.read_pair()? {
                                            if vp.code == 1 {
                                                self.version = DxfVersion::from_version_string(
                                                    &vp.value_string,
                                                );
                                            }
                                        }
                                    }
                                    "$DWGCODEPAGE" => {
                                        if let Some(cp) = self.reader.read_pair()? {
                                            if cp.code == 3 {
                                                code_page = Some(cp.value_string.clone());
                                            }
                                        }
                                    }
                                    _ => {}
                                }
                            }
                        }
                    }
                }
            }
        }

        if self.version < DxfVersion::AC1021 {
            if let Some(cp) = code_page {
                if let Some(enc) = super::code_page::encoding_from_code_page(&cp) {
                    self.reader.set_encoding(enc);
                }
            }
        }

        self.reader.reset()?;
        Ok(())
    }

    /// Skip the current section up to its ENDSEC
    fn skip_section(&mut self) -> Result<()> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 && pair.value_string == "ENDSEC" {
                break;
            }
        }
        Ok(())
    }
}
