//! JSON-lines record serialization
//!
//! The working format for converted MeSH data: one record per line, each
//! line an independent, self-contained JSON object. Files in this format
//! are usually stored gzip-compressed (`.ndjson.gz`), but compression is
//! handled by the I/O layer; this module only sees decompressed text.
//!
//! ## Format
//!
//! - One compact JSON object per line, no wrapping array
//! - Every record carries at least string `id` and `name` fields
//! - Optional fields (`class`, `qualifiers`, `concepts`) are omitted when
//!   empty rather than written as nulls or empty arrays
//!
//! ## Example
//!
//! ```text
//! {"id":"D000001","name":"Calcimycin","class":1,"concepts":[...]}
//! {"id":"D000002","name":"Temefos","class":1}
//! ```

use crate::error::ConvertError;
use crate::format::Format;
use crate::records::{Record, RecordSet};

/// Parse JSON-lines source into a record set
///
/// Each non-empty line must be a valid JSON object describing a record.
/// Unknown fields are ignored; a malformed line fails the whole parse with
/// the 1-based line number in the error message.
pub fn parse_records(source: &str) -> Result<RecordSet, ConvertError> {
    let mut records = RecordSet::new();
    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(line)
            .map_err(|e| ConvertError::ParseError(format!("line {}: {e}", idx + 1)))?;
        records.push(record);
    }
    Ok(records)
}

/// Serialize a record set to JSON-lines text
///
/// Every record becomes one compact JSON line, each terminated by a
/// newline. An empty record set serializes to the empty string.
pub fn serialize_records(records: &RecordSet) -> Result<String, ConvertError> {
    let mut output = String::new();
    for record in records.iter() {
        let line = serde_json::to_string(record)
            .map_err(|e| ConvertError::SerializationError(e.to_string()))?;
        output.push_str(&line);
        output.push('\n');
    }
    Ok(output)
}

/// Format implementation for JSON-lines records
pub struct JsonlFormat;

impl Format for JsonlFormat {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn description(&self) -> &str {
        "Newline-delimited JSON, one MeSH record per line"
    }

    fn file_extensions(&self) -> &[&str] {
        &["ndjson", "jsonl"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<RecordSet, ConvertError> {
        parse_records(source)
    }

    fn serialize(&self, records: &RecordSet) -> Result<String, ConvertError> {
        serialize_records(records)
    }
}
