//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: NodeValue, ParsedNode, Span, and Error.

mod errors;
mod nodes;
mod spans;
