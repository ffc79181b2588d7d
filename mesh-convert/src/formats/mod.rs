//! Format implementations
//!
//! This module contains all format implementations that convert between
//! MeSH record sets and their textual representations.

pub mod jsonl;
pub mod mesh_xml;
pub mod term_map;

pub use jsonl::JsonlFormat;
pub use mesh_xml::MeshXmlFormat;
pub use term_map::TermMapFormat;
