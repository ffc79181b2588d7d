//! File I/O with transparent gzip handling
//!
//! MeSH distribution files are large enough that they are normally shipped
//! gzip-compressed, so every reader here understands `.gz` content and every
//! writer can produce it. Decompression always goes through an in-memory
//! buffer; the files involved (tens of MB compressed) comfortably fit.
//!
//! Writes are atomic: content goes to a temporary file in the destination
//! directory first and is renamed into place only once fully written. A
//! failed run never leaves a truncated output behind.

use crate::error::ConvertError;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Leading bytes of every gzip stream (RFC 1952).
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read a gzip-compressed file and decompress it to a string
///
/// The file must be a valid gzip stream; plain-text input is an error.
/// A file of several concatenated gzip members (the `cat a.gz b.gz`
/// layout) decodes in full, as `gzip -d` itself would read it.
/// Errors distinguish the failing stage: opening or reading the file is
/// [`ConvertError::IoError`], a bad or truncated gzip stream is
/// [`ConvertError::DecompressionError`], and non-UTF-8 decompressed content
/// is [`ConvertError::ParseError`].
pub fn read_gzip_to_string(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path)
        .map_err(|e| ConvertError::IoError(format!("{}: {e}", path.display())))?;
    decode_gzip(&bytes, path)
}

/// Read a file to a string, decompressing when it is gzip-compressed
///
/// Detects gzip content by its magic bytes rather than by file extension,
/// so a `.xml` file that is actually compressed still reads correctly.
pub fn read_to_string(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path)
        .map_err(|e| ConvertError::IoError(format!("{}: {e}", path.display())))?;
    if bytes.starts_with(&GZIP_MAGIC) {
        decode_gzip(&bytes, path)
    } else {
        String::from_utf8(bytes)
            .map_err(|e| ConvertError::ParseError(format!("{}: {e}", path.display())))
    }
}

fn decode_gzip(bytes: &[u8], path: &Path) -> Result<String, ConvertError> {
    // MultiGzDecoder, not GzDecoder: a plain GzDecoder stops after the
    // first member and would silently drop the rest of the file.
    let mut decoder = MultiGzDecoder::new(bytes);
    let mut decoded = Vec::new();
    decoder
        .read_to_end(&mut decoded)
        .map_err(|e| ConvertError::DecompressionError(format!("{}: {e}", path.display())))?;
    String::from_utf8(decoded)
        .map_err(|e| ConvertError::ParseError(format!("{}: {e}", path.display())))
}

/// Write bytes to a file atomically
///
/// The bytes are written to a temporary file in the destination directory
/// and renamed over the target path once complete. The temporary file lives
/// next to the target so the rename stays on one filesystem.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| ConvertError::IoError(format!("{}: {e}", path.display())))?;
    tmp.write_all(bytes)
        .map_err(|e| ConvertError::IoError(format!("{}: {e}", path.display())))?;
    tmp.persist(path)
        .map_err(|e| ConvertError::IoError(format!("{}: {}", path.display(), e.error)))?;
    Ok(())
}

/// Write text to a file atomically, gzip-compressing when the path ends in `.gz`
///
/// `compression_level` follows gzip conventions (0 = none, 9 = best);
/// values above 9 are clamped. It is ignored for uncompressed output.
pub fn write_text(path: &Path, text: &str, compression_level: u32) -> Result<(), ConvertError> {
    if path.extension().and_then(|ext| ext.to_str()) == Some("gz") {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(compression_level.min(9)));
        encoder
            .write_all(text.as_bytes())
            .map_err(|e| ConvertError::IoError(format!("{}: {e}", path.display())))?;
        let compressed = encoder
            .finish()
            .map_err(|e| ConvertError::IoError(format!("{}: {e}", path.display())))?;
        write_atomic(path, &compressed)
    } else {
        write_atomic(path, text.as_bytes())
    }
}
