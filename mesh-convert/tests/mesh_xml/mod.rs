//! MeSH XML format tests
//!
//! Tests for importing NLM descriptor and supplemental record sets.

mod import;
