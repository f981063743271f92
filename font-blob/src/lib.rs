//! Packing and rotating raw bitmap fonts for terminal displays.
//!
//! Fonts are stored on the device as headerless binaries: a glyph table,
//! which is the concatenated rows of every glyph, and a translation table
//! mapping character codes to glyph indices. This crate builds those files
//! from an authored [`FontSource`], and produces a rotated copy of an 8x8
//! glyph table for displays mounted on their side.
//!
//! ```
//! use font_blob::GlyphBitmap;
//!
//! let top_row = GlyphBitmap::new([0xFF, 0, 0, 0, 0, 0, 0, 0]);
//! assert_eq!(top_row.rotate().to_bytes(), [0x01; 8]);
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod glyph;
pub mod rotate;
mod source;
mod table;
pub mod write;

pub use error::Error;
pub use glyph::{GlyphBitmap, GLYPH_LEN};
pub use rotate::{rotate_file, rotate_glyphs};
pub use source::FontSource;
pub use table::{FontTable, GlyphSize, TableKind, TranslationTable};
pub use write::{pack_source, pack_tables, PackOptions, PackedFiles};
