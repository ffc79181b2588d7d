//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::ConvertError;
use crate::format::Format;
use crate::records::RecordSet;
use std::collections::HashMap;

/// Registry of MeSH data formats
///
/// Provides a centralized registry for all available formats.
/// Formats can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new();
/// registry.register(MyFormat);
///
/// let format = registry.get("my-format")?;
/// let records = format.parse("source text")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, ConvertError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ConvertError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// A trailing `.gz` is stripped before matching, so `desc.ndjson.gz`
    /// detects the same format as `desc.ndjson`. Returns the format name if
    /// a matching extension is found, or None otherwise.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("desc.ndjson"), Some("jsonl".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("desc2026.xml.gz"), Some("mesh-xml".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("doc.unknown"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        // Compressed files are detected by the extension under the .gz
        let stem = filename.strip_suffix(".gz").unwrap_or(filename);

        let extension = std::path::Path::new(stem)
            .extension()
            .and_then(|ext| ext.to_str())?;

        // Search for a format that supports this extension
        for format in self.formats.values() {
            if format.file_extensions().contains(&extension) {
                return Some(format.name().to_string());
            }
        }

        None
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<RecordSet, ConvertError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(ConvertError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a record set using the specified format
    pub fn serialize(&self, records: &RecordSet, format: &str) -> Result<String, ConvertError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(ConvertError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize(records)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Register built-in formats
        registry.register(crate::formats::mesh_xml::MeshXmlFormat);
        registry.register(crate::formats::jsonl::JsonlFormat);
        registry.register(crate::formats::term_map::TermMapFormat::default());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
