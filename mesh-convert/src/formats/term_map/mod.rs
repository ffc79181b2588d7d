//! Flat id-to-name map serialization
//!
//! Reduces a record set to the lookup table used by downstream consumers:
//! a single JSON object mapping every record id to its term name. All
//! other record detail is dropped.
//!
//! ## Format
//!
//! ```text
//! {"C000001":"Compound X","D000001":"Calcimycin","D000002":"Temefos"}
//! ```
//!
//! Keys are written in sorted order, so serialization is deterministic.
//! Serialization only; a map cannot be turned back into full records.

use crate::error::ConvertError;
use crate::format::Format;
use crate::records::RecordSet;
use crate::simple_map::{MapOptions, TermMap};

/// Format implementation for the flat id-to-name map
#[derive(Default)]
pub struct TermMapFormat {
    options: MapOptions,
}

impl TermMapFormat {
    /// Create a format instance with explicit serialization options
    pub fn new(options: MapOptions) -> Self {
        TermMapFormat { options }
    }
}

impl Format for TermMapFormat {
    fn name(&self) -> &str {
        "map"
    }

    fn description(&self) -> &str {
        "Flat JSON object mapping record ids to term names"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, records: &RecordSet) -> Result<String, ConvertError> {
        TermMap::from(records).to_json(&self.options)
    }
}
