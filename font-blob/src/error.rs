//! Errors that occur while packing or rotating font binaries

use std::path::PathBuf;

use thiserror::Error;

use crate::table::TableKind;

/// An error occured while building tables or writing a font binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to {op} '{}': {source}", .path.display())]
    Io {
        /// The operation that failed, e.g. "open" or "write"
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("byte value out of range: {table} table entry {index} is {value}")]
    Encoding {
        table: TableKind,
        index: usize,
        value: i64,
    },

    #[error(
        "malformed input '{}': length {len} is not a multiple of the {}-byte glyph size",
        .path.display(),
        crate::GLYPH_LEN
    )]
    MalformedInput { path: PathBuf, len: u64 },

    #[error("font table has {len} bytes, which is not a whole number of {glyph_len}-byte glyphs")]
    PartialGlyph { len: usize, glyph_len: usize },

    #[error("invalid glyph size {width}x{height}")]
    InvalidGlyphSize { width: u16, height: u16 },

    #[error("failed to parse font source '{}': {message}", .path.display())]
    Source { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
