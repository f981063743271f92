//! The glyph and translation tables that make up a packed font

use std::fmt::Display;

use crate::{error::Error, glyph::GlyphBitmap};

/// Identifies one of the two authored tables, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    Font,
    Translation,
}

impl Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Font => f.write_str("font"),
            TableKind::Translation => f.write_str("translation"),
        }
    }
}

/// The dimensions of every glyph in a font table, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphSize {
    pub width: u16,
    pub height: u16,
}

impl GlyphSize {
    /// The layout of the terminal's primary font.
    pub const REFERENCE: GlyphSize = GlyphSize::new(8, 16);
    /// The only layout the rotator accepts.
    pub const SQUARE_8: GlyphSize = GlyphSize::new(8, 8);

    pub const fn new(width: u16, height: u16) -> Self {
        GlyphSize { width, height }
    }

    /// Returns `self` if both dimensions are non-zero.
    pub fn validate(self) -> Result<Self, Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidGlyphSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// The number of bytes in one row of a glyph; rows are padded to a byte.
    pub fn bytes_per_row(self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// The number of bytes in one glyph.
    pub fn glyph_len(self) -> usize {
        self.bytes_per_row() * self.height as usize
    }
}

impl Default for GlyphSize {
    fn default() -> Self {
        GlyphSize::REFERENCE
    }
}

impl Display for GlyphSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An ordered sequence of glyphs, indexed by glyph index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontTable {
    size: GlyphSize,
    data: Vec<u8>,
}

impl FontTable {
    /// Create a table from raw glyph bytes.
    ///
    /// The data must contain a whole number of glyphs of the given size.
    pub fn new(size: GlyphSize, data: Vec<u8>) -> Result<Self, Error> {
        let size = size.validate()?;
        let glyph_len = size.glyph_len();
        if data.len() % glyph_len != 0 {
            return Err(Error::PartialGlyph {
                len: data.len(),
                glyph_len,
            });
        }
        Ok(FontTable { size, data })
    }

    /// Create a table from authored values, each of which must fit in a byte.
    pub fn from_values(size: GlyphSize, values: &[i64]) -> Result<Self, Error> {
        let data = bytes_from_values(TableKind::Font, values)?;
        FontTable::new(size, data)
    }

    pub fn size(&self) -> GlyphSize {
        self.size
    }

    pub fn glyph_count(&self) -> usize {
        self.data.len() / self.size.glyph_len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The bytes of the glyph at `index`, if it exists.
    pub fn glyph(&self, index: usize) -> Option<&[u8]> {
        let len = self.size.glyph_len();
        let start = index.checked_mul(len)?;
        self.data.get(start..start.checked_add(len)?)
    }

    /// The glyph shown for character `code`, after translation.
    pub fn glyph_for_code(&self, xlat: &TranslationTable, code: u8) -> Option<&[u8]> {
        xlat.lookup(code)
            .and_then(|index| self.glyph(index as usize))
    }

    /// Iterate over the bytes of each glyph, in table order.
    pub fn glyphs(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.size.glyph_len())
    }

    /// Iterate over the glyphs of an 8x8 table as bitmaps.
    ///
    /// Returns `None` for tables of any other size.
    pub fn bitmaps(&self) -> Option<impl Iterator<Item = GlyphBitmap> + '_> {
        (self.size == GlyphSize::SQUARE_8)
            .then(|| self.glyphs().filter_map(GlyphBitmap::from_slice))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// A map from input character code to glyph index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationTable(Vec<u8>);

impl TranslationTable {
    /// The number of entries in the default table.
    pub const DEFAULT_LEN: usize = 0x100;

    pub fn new(data: Vec<u8>) -> Self {
        TranslationTable(data)
    }

    /// A table mapping every byte to the glyph with the same index.
    pub fn identity() -> Self {
        TranslationTable((0..=u8::MAX).collect())
    }

    /// Create a table from authored values, each of which must fit in a byte.
    pub fn from_values(values: &[i64]) -> Result<Self, Error> {
        bytes_from_values(TableKind::Translation, values).map(TranslationTable)
    }

    /// The glyph index for `code`, or `None` if the table is too short.
    pub fn lookup(&self, code: u8) -> Option<u8> {
        self.0.get(code as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        TranslationTable::identity()
    }
}

fn bytes_from_values(table: TableKind, values: &[i64]) -> Result<Vec<u8>, Error> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| Error::Encoding {
                table,
                index,
                value,
            })
        })
        .collect()
}
