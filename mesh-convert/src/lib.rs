//! Format conversion for MeSH vocabulary data
//!
//!     This crate provides a uniform interface for converting the NLM MeSH
//!     vocabulary between its distribution format (gzip-compressed XML record
//!     sets) and the working formats downstream tooling consumes (JSON-lines
//!     records, flat id-to-name lookup maps).
//!
//! Architecture
//!
//!     All conversions go through one in-memory representation, the RecordSet
//!     (./records.rs). Formats only translate between text and records; they
//!     never touch files themselves. File handling, including gzip detection
//!     and atomic output replacement, lives in ./io.rs, so the same format
//!     code serves compressed and uncompressed files alike.
//!
//!     This is a pure lib, that is, it powers the mesh-cli but is shell
//!     agnostic: no code here prints to std streams, exits, or reads env vars.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── io.rs                   # gzip-aware reading, atomic writing
//!     ├── records.rs              # Record/RecordSet, the common representation
//!     ├── simple_map.rs           # descriptor + supplemental merge pipeline
//!     ├── formats
//!     │   ├── mesh_xml            # NLM XML record sets, parse only
//!     │   ├── jsonl               # JSON-lines records, parse and serialize
//!     │   └── term_map            # flat id → name object, serialize only
//!     └── lib.rs
//!
//! Testing
//!
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories,
//!     so tests/lib.rs includes these as modules.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait.
//!     Formats have a parse() and serialize() method, a name and file
//!     extensions. See the trait def [./format.rs]
//!     - Format trait: uniform interface for all formats (parsing and/or
//!       serialization)
//!     - FormatRegistry: centralized discovery and selection, plus filename
//!       based detection (a trailing .gz never decides the format, the
//!       extension under it does)
//!
//!     mesh-xml is parse only. The distribution XML carries far more detail
//!     than the converted records keep, and serializing it back is not a
//!     goal; records keep the fields the JSON-lines consumers rely on.
//!
//! The Simple Map
//!
//!     The one pipeline built on top of the formats is simple_map
//!     (./simple_map.rs): ingest a descriptor file, then a supplemental
//!     file, and write a single JSON object mapping every record id to its
//!     name. The supplemental file is ingested second on purpose, its names
//!     win id collisions. The map is backed by a BTreeMap, so two runs over
//!     identical inputs write byte-identical output.
//!
//! Library Choices
//!
//!     The heavy lifting is offloaded to specialized crates: serde_json for
//!     every JSON surface, roxmltree for the XML read path, flate2 for gzip
//!     and tempfile for atomic replacement of the output file. This crate
//!     only adapts between their models and the MeSH record shape.

pub mod error;
pub mod format;
pub mod formats;
pub mod io;
pub mod records;
pub mod registry;
pub mod simple_map;

pub use error::ConvertError;
pub use format::Format;
pub use records::{Record, RecordSet};
pub use registry::FormatRegistry;
pub use simple_map::{MapOptions, TermMap};
