//! Simple id-to-name map construction
//!
//! This module implements the merge pipeline behind `mesh simple-map`: two
//! gzip-compressed JSON-lines files (descriptor records, then supplemental
//! records) are folded into one flat map from record id to term name, which
//! is then written as a single JSON object.
//!
//! Ingestion order carries the collision rule. The descriptor file is read
//! first and the supplemental file second, so on a shared id the
//! supplemental name wins. Any malformed line aborts the whole run; the
//! output file is only written after both inputs parsed cleanly, so a
//! failed run never replaces an existing output.

use crate::error::ConvertError;
use crate::io;
use crate::records::RecordSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Options controlling map serialization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapOptions {
    /// Pretty-print the output object instead of compact one-line JSON
    pub pretty: bool,
}

/// Flat mapping from record id to term name
///
/// Backed by a `BTreeMap` so serialization order is the sorted key order.
/// Two runs over identical inputs therefore produce byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermMap(BTreeMap<String, String>);

impl TermMap {
    /// Create an empty map
    pub fn new() -> Self {
        TermMap(BTreeMap::new())
    }

    /// Insert a term, returning the previously stored name if the id was
    /// already present
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(id.into(), name.into())
    }

    /// Look up the name for an id
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(|name| name.as_str())
    }

    /// Number of distinct ids in the map
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (id, name) pairs in sorted id order
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Serialize the map as a single JSON object
    pub fn to_json(&self, options: &MapOptions) -> Result<String, ConvertError> {
        let result = if options.pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| ConvertError::SerializationError(e.to_string()))
    }
}

impl From<&RecordSet> for TermMap {
    fn from(records: &RecordSet) -> Self {
        let mut map = TermMap::new();
        for record in records.iter() {
            map.insert(record.id.clone(), record.name.clone());
        }
        map
    }
}

/// The subset of a record the map needs
///
/// Records carry many other fields (qualifiers, concepts, terms); all of
/// them are ignored here. Only `id` and `name` are required, and both must
/// be strings.
#[derive(Debug, Deserialize)]
struct Entry {
    id: String,
    name: String,
}

/// Ingest one gzip-compressed JSON-lines file into the map
///
/// Parses each non-empty line as a JSON object with string `id` and `name`
/// fields and upserts the pair into `map`. Later lines overwrite earlier
/// ones on id collision. Returns the number of entries ingested.
///
/// A line that is not valid JSON, or that lacks the required fields, fails
/// the whole call with a [`ConvertError::ParseError`] naming the file and
/// 1-based line number. Nothing is skipped and nothing is recovered.
pub fn ingest(path: &Path, map: &mut TermMap) -> Result<usize, ConvertError> {
    let text = io::read_gzip_to_string(path)?;

    let mut count = 0;
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: Entry = serde_json::from_str(line).map_err(|e| {
            ConvertError::ParseError(format!("{}:{}: {e}", path.display(), idx + 1))
        })?;
        map.insert(entry.id, entry.name);
        count += 1;
    }

    Ok(count)
}

/// Build the merged map from a descriptor and a supplemental file and write
/// it to `output`
///
/// The descriptor file is ingested first and the supplemental file second,
/// so supplemental names win id collisions. The map is serialized as one
/// JSON object (always uncompressed, regardless of the output extension)
/// and written atomically: on any error the previous content of `output`,
/// if any, is left untouched.
pub fn build(
    desc: &Path,
    suppl: &Path,
    output: &Path,
    options: &MapOptions,
) -> Result<TermMap, ConvertError> {
    let mut map = TermMap::new();
    ingest(desc, &mut map)?;
    ingest(suppl, &mut map)?;

    let json = map.to_json(options)?;
    io::write_atomic(output, json.as_bytes())?;

    Ok(map)
}
