//! Conversion chain tests
//!
//! Tests that drive whole conversions through the registry, the way the
//! CLI does.

mod pipeline;
