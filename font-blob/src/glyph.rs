//! 8x8 glyph bitmaps and the quarter-turn transform

/// The number of bytes in an 8x8 glyph bitmap.
pub const GLYPH_LEN: usize = 8;

/// A single 8x8 glyph, stored as eight rows.
///
/// Bit 7 of each row is the leftmost pixel, bit 0 the rightmost; row 0 is the
/// top of the glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphBitmap([u8; GLYPH_LEN]);

impl GlyphBitmap {
    /// A glyph with no pixels set.
    pub const EMPTY: GlyphBitmap = GlyphBitmap([0; GLYPH_LEN]);

    pub const fn new(rows: [u8; GLYPH_LEN]) -> Self {
        GlyphBitmap(rows)
    }

    /// Create a glyph from a slice, which must be exactly [`GLYPH_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(GlyphBitmap)
    }

    pub fn rows(&self) -> &[u8; GLYPH_LEN] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; GLYPH_LEN] {
        self.0
    }

    /// Returns `true` if the pixel at column `x`, row `y` is set.
    ///
    /// Coordinates outside the glyph are never set.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= 8 || y >= GLYPH_LEN {
            return false;
        }
        self.0[y] & (0x80 >> x) != 0
    }

    /// Rotate this glyph a quarter turn clockwise.
    ///
    /// Output row `i` collects column `i` of the input: bit `j` of the result
    /// row is taken from bit `7 - i` of input row `j`. The top row of the
    /// input therefore becomes the rightmost column of the output.
    ///
    /// Displays wired for the rotated layout depend on this exact bit order.
    pub fn rotate(&self) -> GlyphBitmap {
        let mut res = [0u8; GLYPH_LEN];
        for (i, out) in res.iter_mut().enumerate() {
            let mi = 1u8 << (7 - i);
            for (j, row) in self.0.iter().enumerate() {
                let mj = 1u8 << j;
                if row & mi != 0 {
                    *out |= mj;
                }
            }
        }
        GlyphBitmap(res)
    }
}

impl From<[u8; GLYPH_LEN]> for GlyphBitmap {
    fn from(rows: [u8; GLYPH_LEN]) -> Self {
        GlyphBitmap(rows)
    }
}

impl AsRef<[u8]> for GlyphBitmap {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
