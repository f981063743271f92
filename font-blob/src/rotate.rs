//! Rotating a packed 8x8 font file glyph by glyph

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use thiserror::Error;

use crate::{
    error::Error,
    glyph::{GlyphBitmap, GLYPH_LEN},
    write::{persist, temp_file_for},
};

/// The packed 8x8 font read by default.
pub const DEFAULT_INPUT: &str = "8x8.fnt";
/// The rotated font written by default.
pub const DEFAULT_OUTPUT: &str = "8x8r.fnt";

/// An error encountered while streaming glyphs.
#[derive(Debug, Error)]
pub enum GlyphStreamError {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
    /// The input ended partway through a glyph; `len` is the total number of
    /// bytes read.
    #[error("input ended inside a glyph after {len} bytes")]
    Truncated { len: u64 },
}

/// Reads whole glyphs from a byte stream.
pub struct GlyphReader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> GlyphReader<R> {
    pub fn new(inner: R) -> Self {
        GlyphReader { inner, offset: 0 }
    }

    /// The number of bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Read the next glyph.
    ///
    /// Returns `Ok(None)` if the input is exhausted exactly at a glyph
    /// boundary.
    pub fn read_glyph(&mut self) -> Result<Option<GlyphBitmap>, GlyphStreamError> {
        let mut buf = [0u8; GLYPH_LEN];
        let mut filled = 0;
        while filled < GLYPH_LEN {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(GlyphStreamError::Read(e)),
            }
        }
        self.offset += filled as u64;
        match filled {
            0 => Ok(None),
            GLYPH_LEN => Ok(Some(GlyphBitmap::new(buf))),
            _ => Err(GlyphStreamError::Truncated { len: self.offset }),
        }
    }
}

impl<R: Read> Iterator for GlyphReader<R> {
    type Item = Result<GlyphBitmap, GlyphStreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_glyph().transpose()
    }
}

/// Rotate every glyph read from `input`, writing each result to `output` as
/// soon as it is produced.
///
/// Returns the number of glyphs rotated.
pub fn rotate_glyphs<R: Read, W: Write>(
    input: R,
    mut output: W,
) -> Result<usize, GlyphStreamError> {
    let mut count = 0;
    for glyph in GlyphReader::new(input) {
        let rotated = glyph?.rotate();
        output
            .write_all(rotated.rows())
            .map_err(GlyphStreamError::Write)?;
        count += 1;
    }
    output.flush().map_err(GlyphStreamError::Write)?;
    Ok(count)
}

/// Rotate the packed font at `input`, writing the result to `output`.
///
/// The output is only created once every glyph has been rotated; if the input
/// cannot be read or is not a whole number of glyphs, nothing is written.
pub fn rotate_file(input: &Path, output: &Path) -> Result<usize, Error> {
    let reader = File::open(input).map_err(|e| Error::io("open", input, e))?;
    let mut temp = temp_file_for(output)?;

    let count = {
        let writer = BufWriter::new(temp.as_file_mut());
        rotate_glyphs(BufReader::new(reader), writer).map_err(|e| match e {
            GlyphStreamError::Read(e) => Error::io("read", input, e),
            GlyphStreamError::Write(e) => Error::io("write", output, e),
            GlyphStreamError::Truncated { len } => Error::MalformedInput {
                path: input.to_owned(),
                len,
            },
        })?
    };

    persist(temp, output)?;
    log::info!(
        "rotated {count} glyphs from {} into {}",
        input.display(),
        output.display()
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stream_preserves_length() {
        let input = font_test_data::glyphs::ALL.concat();
        let mut output = Vec::new();
        let count = rotate_glyphs(input.as_slice(), &mut output).unwrap();
        assert_eq!(count, font_test_data::glyphs::ALL.len());
        assert_eq!(output.len(), input.len());
    }

    #[test]
    fn stream_rotates_each_glyph() {
        let input = [[0xFFu8, 0, 0, 0, 0, 0, 0, 0], [0x80; 8]].concat();
        let mut output = Vec::new();
        rotate_glyphs(input.as_slice(), &mut output).unwrap();
        assert_eq!(output, [[0x01u8; 8], [0xFF, 0, 0, 0, 0, 0, 0, 0]].concat());
    }

    #[test]
    fn empty_stream() {
        let mut output = Vec::new();
        assert_eq!(rotate_glyphs(&[0u8; 0][..], &mut output).unwrap(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn truncated_stream() {
        let input = [0u8; 13];
        let mut output = Vec::new();
        let err = rotate_glyphs(&input[..], &mut output).unwrap_err();
        assert!(matches!(err, GlyphStreamError::Truncated { len: 13 }));
    }

    /// A reader that hands out one byte at a time.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match (self.0.split_first(), buf.first_mut()) {
                (Some((first, rest)), Some(out)) => {
                    *out = *first;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn short_reads_are_not_truncation() {
        let input = font_test_data::glyphs::ALL.concat();
        let mut reader = GlyphReader::new(Trickle(&input));
        let glyphs = reader.by_ref().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(glyphs.len(), font_test_data::glyphs::ALL.len());
        assert_eq!(glyphs[0].rows(), &font_test_data::glyphs::ALL[0]);
        assert_eq!(reader.offset(), input.len() as u64);
    }

    #[test]
    fn rotates_file() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join(DEFAULT_INPUT);
        let output = dir.path().join(DEFAULT_OUTPUT);
        let glyphs = font_test_data::glyphs::ALL.concat();
        std::fs::write(&input, &glyphs).unwrap();

        let count = rotate_file(&input, &output).unwrap();
        assert_eq!(count, font_test_data::glyphs::ALL.len());

        let rotated = std::fs::read(&output).unwrap();
        assert_eq!(rotated.len(), glyphs.len());
        let expected = font_test_data::glyphs::ALL
            .iter()
            .flat_map(|g| GlyphBitmap::new(*g).rotate().to_bytes())
            .collect::<Vec<_>>();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn malformed_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("13.fnt");
        let output = dir.path().join("13r.fnt");
        std::fs::write(&input, [0xAAu8; 13]).unwrap();

        let err = rotate_file(&input, &output).unwrap_err();
        match err {
            Error::MalformedInput { path, len } => {
                assert_eq!(path, input);
                assert_eq!(len, 13);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!output.exists());
        // no stray temporary files either
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn malformed_file_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("8x8.fnt");
        let output = dir.path().join("8x8r.fnt");
        std::fs::write(&input, [0u8; 9]).unwrap();
        std::fs::write(&output, b"previous").unwrap();

        assert!(rotate_file(&input, &output).is_err());
        assert_eq!(std::fs::read(&output).unwrap(), b"previous");
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.fnt");
        let output = dir.path().join("out.fnt");
        let err = rotate_file(&input, &output).unwrap_err();
        assert!(matches!(err, Error::Io { op: "open", ref path, .. } if *path == input));
        assert!(!output.exists());
    }

    #[cfg(unix)]
    #[test]
    fn output_permissions_match_plain_files() {
        use std::os::unix::fs::PermissionsExt;
        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join(DEFAULT_INPUT);
        let output = dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&input, font_test_data::glyphs::SMILEY).unwrap();

        rotate_file(&input, &output).unwrap();
        assert_eq!(mode(output.as_path()), mode(input.as_path()));
    }
}
