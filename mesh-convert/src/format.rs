//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations
//! must implement. The trait provides a uniform interface for parsing record
//! sets out of source text and serializing them back.
//!
//! Compression is not a format concern: formats always work on decompressed
//! text, and the [`crate::io`] layer decides when to gunzip input or gzip
//! output based on the file path.

use crate::error::ConvertError;
use crate::records::RecordSet;

/// Trait for MeSH data formats
///
/// Implementors provide conversion between a textual representation and
/// [`RecordSet`]. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<RecordSet, ConvertError> {
///         // Parse source into records
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "jsonl", "mesh-xml", "map")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["ndjson", "jsonl"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames; a trailing
    /// `.gz` on the filename is stripped before matching.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → RecordSet)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (RecordSet → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a record set
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<RecordSet, ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a record set into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _records: &RecordSet) -> Result<String, ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
