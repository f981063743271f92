//! Loading authored font tables from a TOML font source.
//!
//! A font source looks like this:
//!
//! ```toml
//! width = 8
//! height = 8
//! # optional; every code maps to the glyph with the same index if omitted
//! xlat = [0, 1, 2]
//! font = [
//!     0x00, 0x18, 0x24, 0x42, 0x7E, 0x42, 0x42, 0x00,
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    error::Error,
    table::{FontTable, GlyphSize, TranslationTable},
};

/// The authored contents of a font, before any range checking.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSource {
    #[serde(default = "default_width")]
    pub width: u16,
    #[serde(default = "default_height")]
    pub height: u16,
    #[serde(default)]
    pub xlat: Option<Vec<i64>>,
    pub font: Vec<i64>,
}

fn default_width() -> u16 {
    GlyphSize::REFERENCE.width
}

fn default_height() -> u16 {
    GlyphSize::REFERENCE.height
}

impl FontSource {
    /// Parse a font source from TOML text.
    ///
    /// The `path` is only used for error reporting.
    pub fn parse(text: &str, path: impl Into<PathBuf>) -> Result<Self, Error> {
        toml::from_str(text).map_err(|e| Error::Source {
            path: path.into(),
            message: e.message().to_owned(),
        })
    }

    /// Read and parse the font source at `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io("read", path, e))?;
        let source = FontSource::parse(&text, path)?;
        log::debug!(
            "loaded {} font bytes and {} translation entries from {}",
            source.font.len(),
            source.xlat.as_ref().map(Vec::len).unwrap_or(TranslationTable::DEFAULT_LEN),
            path.display()
        );
        Ok(source)
    }

    pub fn glyph_size(&self) -> GlyphSize {
        GlyphSize::new(self.width, self.height)
    }

    /// Build the font table, checking that every value fits in a byte.
    pub fn font_table(&self, size: GlyphSize) -> Result<FontTable, Error> {
        FontTable::from_values(size, &self.font)
    }

    /// Build the translation table, falling back to the identity mapping.
    pub fn translation_table(&self) -> Result<TranslationTable, Error> {
        match &self.xlat {
            Some(values) => TranslationTable::from_values(values),
            None => Ok(TranslationTable::identity()),
        }
    }

    /// Build both tables, using `size` in place of the declared glyph size
    /// if provided.
    pub fn into_tables(
        self,
        size: Option<GlyphSize>,
    ) -> Result<(FontTable, TranslationTable), Error> {
        let size = size.unwrap_or_else(|| self.glyph_size());
        let xlat = self.translation_table()?;
        let font = self.font_table(size)?;
        Ok((font, xlat))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::table::TableKind;

    #[test]
    fn parse_sample() {
        let source = FontSource::parse(font_test_data::SOURCE_8X8, "sample.toml").unwrap();
        assert_eq!(source.glyph_size(), GlyphSize::SQUARE_8);
        let (font, xlat) = source.into_tables(None).unwrap();
        assert_eq!(font.as_bytes(), font_test_data::glyphs::ALL.concat());
        assert_eq!(xlat.as_bytes(), font_test_data::SOURCE_8X8_XLAT);
    }

    #[test]
    fn defaults() {
        let source = FontSource::parse("font = [0x00, 0xff]", "min.toml").unwrap();
        assert_eq!(source.glyph_size(), GlyphSize::REFERENCE);
        assert_eq!(source.translation_table().unwrap(), TranslationTable::identity());
    }

    #[test]
    fn size_override() {
        let source = FontSource::parse("font = [1, 2, 3, 4, 5, 6, 7, 8]", "min.toml").unwrap();
        // 8 bytes is not a whole 8x16 glyph
        assert!(matches!(
            source.clone().into_tables(None),
            Err(Error::PartialGlyph { .. })
        ));
        let (font, _) = source.into_tables(Some(GlyphSize::SQUARE_8)).unwrap();
        assert_eq!(font.glyph_count(), 1);
    }

    #[test]
    fn out_of_range_value() {
        let source = FontSource::parse("xlat = [0, 1, 0x100]\nfont = []", "bad.toml").unwrap();
        let err = source.into_tables(None).unwrap_err();
        assert!(matches!(
            err,
            Error::Encoding {
                table: TableKind::Translation,
                index: 2,
                value: 256
            }
        ));
    }

    #[test]
    fn malformed_source() {
        let err = FontSource::parse("font = [0x00, ", "broken.toml").unwrap_err();
        assert!(matches!(err, Error::Source { ref path, .. } if path == Path::new("broken.toml")));

        let err = FontSource::parse("height = 8", "nofont.toml").unwrap_err();
        assert!(err.to_string().contains("nofont.toml"));

        let err = FontSource::parse("font = []\nglyphs = 3", "extra.toml").unwrap_err();
        assert!(matches!(err, Error::Source { .. }));
    }

    #[test]
    fn missing_file() {
        let err = FontSource::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { op: "read", .. }));
    }
}
