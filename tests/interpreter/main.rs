//! Integration tests for Layer 3: Interpreter
//!
//! Tests pattern matching against parsed nodes and the lineage buckets the
//! interpreter reports, driven by the built-in registry.

mod lineage_tests;
mod property_tests;
