//! Integration tests for Layer 1: Syntax
//!
//! Tests for the pattern algebra, command-level semantics, and structural
//! validation of declarations.
