//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while reading, converting, or writing MeSH data
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error opening, reading, or writing a file
    IoError(String),
    /// Input is not a valid gzip stream
    DecompressionError(String),
    /// Error during parsing (XML, JSON-lines, or a record missing
    /// its required fields)
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested direction
    NotSupported(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            ConvertError::IoError(msg) => write!(f, "I/O error: {msg}"),
            ConvertError::DecompressionError(msg) => write!(f, "Decompression error: {msg}"),
            ConvertError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            ConvertError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
