//! Lyric sources: where raw LRC text comes from
//!
//! The parser works on text only. Sources open and read files or arbitrary
//! readers, decode UTF-8 and surface failures as [`LrcError::SourceUnavailable`]
//! or [`LrcError::ReadFailure`].

use crate::error::LrcError;
use crate::parser::parse;
use crate::types::ParsedLyrics;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "logging")]
use tracing::debug;

const UTF8_BOM: &str = "\u{feff}";

/// Something that yields the full text of an LRC document
pub trait LyricSource {
    /// Read and decode the whole document
    fn read_text(&mut self) -> Result<String, LrcError>;
}

/// A lyric file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LyricSource for FileSource {
    fn read_text(&mut self) -> Result<String, LrcError> {
        #[cfg(feature = "logging")]
        debug!("Opening lyric file {}", self.path.display());

        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                LrcError::SourceUnavailable(format!("{}: {}", self.path.display(), e))
            }
            _ => LrcError::ReadFailure(format!("{}: {}", self.path.display(), e)),
        })?;

        ReaderSource::new(file).read_text()
    }
}

/// Any reader, such as stdin or an in-memory buffer
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Unwrap the inner reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> LyricSource for ReaderSource<R> {
    fn read_text(&mut self) -> Result<String, LrcError> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        decode_text(bytes)
    }
}

/// Decode raw bytes as UTF-8, dropping a leading byte order mark
///
/// Line endings are normalized to `\n`, so `\r\n` and a bare `\r` both end
/// a line.
pub fn decode_text(bytes: Vec<u8>) -> Result<String, LrcError> {
    let text = String::from_utf8(bytes).map_err(|e| LrcError::ReadFailure(e.to_string()))?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(&text);

    if text.contains('\r') {
        Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Ok(text.to_string())
    }
}

/// Read a source and parse its text
pub fn parse_source<S: LyricSource + ?Sized>(source: &mut S) -> Result<ParsedLyrics, LrcError> {
    let text = source.read_text()?;
    parse(&text)
}

/// Read and parse the LRC file at `path`
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedLyrics, LrcError> {
    parse_source(&mut FileSource::new(path))
}
