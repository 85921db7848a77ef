//! End-to-end integration tests
//!
//! Drives the registry and interpreter together the way a pipeline
//! analyzer would: resolve each stage's command name, interpret its node,
//! and fold the reports into a running field-availability set.

mod pipeline_tests;
