//! Core data structures for MeSH records.
//!
//! Every format parses into and serializes from [`RecordSet`]. The JSON
//! field names (`isPreferred`, `CASN1Name`, `type`, `class`) are the wire
//! names used by the JSON-lines files this toolchain produces and
//! consumes, so serde renames are applied where Rust naming differs.

use serde::{Deserialize, Serialize};

/// One MeSH record: a descriptor or a supplemental concept record.
///
/// Only `id` and `name` are required; the remaining fields are produced
/// by the XML converter and carried through JSON-lines untouched. Unknown
/// fields on a JSON-lines record are ignored when parsing, and empty
/// collections are omitted when serializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    /// DescriptorClass or SCRClass attribute from the XML release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<i32>,
    /// Allowable qualifiers (descriptor records only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<TermRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<Concept>,
}

impl Record {
    /// Create a record carrying only the required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            name: name.into(),
            class: None,
            qualifiers: Vec::new(),
            concepts: Vec::new(),
        }
    }
}

/// An id/name pair referring to a qualifier or a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRef {
    pub id: String,
    pub name: String,
}

/// A concept attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub name: String,
    #[serde(rename = "isPreferred", default)]
    pub preferred: bool,
    /// Scope note with trailing whitespace trimmed.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    /// CAS type 1 chemical name; present only when the release has one.
    #[serde(rename = "CASN1Name", default, skip_serializing_if = "Option::is_none")]
    pub casn1_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terms: Vec<TermRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
}

/// A relation from the enclosing concept to another concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// ConceptUI of the concept on the far side of the relation.
    pub other: String,
    #[serde(rename = "type")]
    pub kind: RelationKind,
}

/// Direction of a concept relation (MeSH BRD/NRW/REL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Broader,
    Narrower,
    Related,
}

/// An ordered collection of records, one parsed input document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        RecordSet {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        RecordSet { records }
    }
}
