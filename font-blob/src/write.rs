//! Writing packed font tables to disk

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
    error::Error,
    source::FontSource,
    table::{FontTable, GlyphSize, TranslationTable},
};

/// Where packed tables are written.
#[derive(Clone, Debug, Default)]
pub struct PackOptions {
    /// The directory that receives both output files.
    pub out_dir: PathBuf,
    /// Overrides the glyph size declared by the font source.
    pub size: Option<GlyphSize>,
}

/// The paths written by [`pack_tables`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedFiles {
    pub font: PathBuf,
    pub xlat: PathBuf,
}

/// The file name of the packed glyph table for a given glyph size.
pub fn font_file_name(size: GlyphSize) -> String {
    format!("font{}x{}.fnt", size.width, size.height)
}

/// The file name of the packed translation table for a given glyph size.
pub fn xlat_file_name(size: GlyphSize) -> String {
    format!("xlat{}x{}.bin", size.width, size.height)
}

/// Build the tables described by `source` and write them as configured by
/// `options`.
///
/// Every value in the source is range checked before any file is written.
pub fn pack_source(source: FontSource, options: &PackOptions) -> Result<PackedFiles, Error> {
    let (font, xlat) = source.into_tables(options.size)?;
    pack_tables(&font, &xlat, &options.out_dir)
}

/// Write the font and translation tables into `out_dir`.
///
/// The glyph table is written first; if that fails the translation table is
/// not attempted. Each file is replaced atomically, so a failed write leaves
/// whatever was previously at the destination.
pub fn pack_tables(
    font: &FontTable,
    xlat: &TranslationTable,
    out_dir: &Path,
) -> Result<PackedFiles, Error> {
    let size = font.size();
    let font_path = out_dir.join(font_file_name(size));
    let xlat_path = out_dir.join(xlat_file_name(size));

    write_atomic(&font_path, font.as_bytes())?;
    log::info!(
        "wrote {} glyphs ({} bytes) to {}",
        font.glyph_count(),
        font.as_bytes().len(),
        font_path.display()
    );
    write_atomic(&xlat_path, xlat.as_bytes())?;
    log::info!(
        "wrote {} translation entries to {}",
        xlat.len(),
        xlat_path.display()
    );

    Ok(PackedFiles {
        font: font_path,
        xlat: xlat_path,
    })
}

/// Create a temporary file next to `path`, to be persisted over it once fully
/// written.
///
/// The file gets the permissions of an existing file at `path`, or those of a
/// freshly created file (0666 less the umask) otherwise.
pub(crate) fn temp_file_for(path: &Path) -> Result<NamedTempFile, Error> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let file = builder
        .tempfile_in(dir)
        .map_err(|e| Error::io("create", path, e))?;

    if let Ok(existing) = std::fs::metadata(path) {
        if existing.is_file() {
            file.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| Error::io("create", path, e))?;
        }
    }
    Ok(file)
}

/// Move a finished temporary file to its destination, once its contents have
/// reached the disk.
pub(crate) fn persist(file: NamedTempFile, path: &Path) -> Result<(), Error> {
    file.as_file()
        .sync_all()
        .map_err(|e| Error::io("write", path, e))?;
    file.persist(path)
        .map(drop)
        .map_err(|e| Error::io("replace", path, e.error))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let mut file = temp_file_for(path)?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| Error::io("write", path, e))?;
    log::debug!("writing {} bytes to {}", bytes.len(), path.display());
    persist(file, path)
}
