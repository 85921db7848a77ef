//! Integration tests for Layer 2: Registry
//!
//! Tests registry construction, name resolution, and CI-style validation
//! of the built-in command set.

mod lookup_tests;
